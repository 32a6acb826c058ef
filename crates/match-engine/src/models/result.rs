use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a single application's result was produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    /// The resume was recovered and scored.
    Scored,
    /// No resume attached; the fixed missing-resume score was assigned.
    MissingResume,
    /// Evaluation failed; the fixed failure score was assigned.
    Failed,
}

/// The five sub-scores and their weighted sum, each in [0, 100] and rounded
/// to 2 decimal places.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keyword: f64,
    pub sections: f64,
    pub overall: f64,
}

impl MatchBreakdown {
    pub fn zeroed() -> Self {
        Self::default()
    }
}

/// What the scorer saw: extracted resume signals, which skills matched the
/// effective required set, and the improvement suggestions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchDetails {
    pub extracted_skills: Vec<String>,
    pub experience_years: u32,
    pub education: Vec<String>,
    pub matched_skills: Vec<String>,
    pub suggestions: Vec<String>,
}

/// One application's final result. Immutable; the caller owns persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub application_id: Uuid,
    pub score: f64,
    pub outcome: MatchOutcome,
    pub breakdown: MatchBreakdown,
    pub details: MatchDetails,
    /// True when the job or resume text came from a fallback source
    /// (locator bag-of-words or job metadata) rather than document content.
    pub degraded_input: bool,
}

impl MatchResult {
    pub fn missing_resume(application_id: Uuid, score: f64) -> Self {
        Self {
            application_id,
            score,
            outcome: MatchOutcome::MissingResume,
            breakdown: MatchBreakdown::zeroed(),
            details: MatchDetails::default(),
            degraded_input: false,
        }
    }

    pub fn failed(application_id: Uuid, score: f64) -> Self {
        Self {
            application_id,
            score,
            outcome: MatchOutcome::Failed,
            breakdown: MatchBreakdown::zeroed(),
            details: MatchDetails::default(),
            degraded_input: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_resume_result_is_zeroed() {
        let result = MatchResult::missing_resume(Uuid::new_v4(), 10.0);
        assert_eq!(result.score, 10.0);
        assert_eq!(result.outcome, MatchOutcome::MissingResume);
        assert_eq!(result.breakdown, MatchBreakdown::zeroed());
        assert!(result.details.suggestions.is_empty());
    }

    #[test]
    fn test_outcome_serializes_snake_case() {
        let json = serde_json::to_string(&MatchOutcome::MissingResume).unwrap();
        assert_eq!(json, r#""missing_resume""#);
    }
}
