use serde::{Deserialize, Serialize};

/// Relative weights of the five scoring factors. They sum to 1.00 so the
/// overall score stays on the same 0-100 scale as the sub-scores.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoreWeights {
    pub skills: f64,
    pub experience: f64,
    pub education: f64,
    pub keyword: f64,
    pub sections: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            skills: 0.35,
            experience: 0.25,
            education: 0.15,
            keyword: 0.15,
            sections: 0.10,
        }
    }
}

/// Tunable policy around the scoring algorithm.
///
/// The two fixed scores are deliberate signals, not measurements: a missing
/// resume scores higher than a processing failure so downstream consumers can
/// tell "could not evaluate" apart from "evaluation blew up".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchPolicy {
    pub weights: ScoreWeights,
    /// Minimum normalized similarity for a fuzzy skill match.
    pub fuzzy_threshold: f64,
    /// Assigned to applications with no resume attached.
    pub missing_resume_score: f64,
    /// Assigned to applications whose evaluation failed.
    pub failure_score: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            fuzzy_threshold: 0.8,
            missing_resume_score: 10.0,
            failure_score: 5.0,
        }
    }
}

impl MatchPolicy {
    /// Defaults with optional env overrides for the policy constants.
    /// Weights are not overridable: they must keep summing to 1.00.
    pub fn from_env() -> Self {
        let mut policy = Self::default();
        if let Some(v) = env_f64("MATCH_FUZZY_THRESHOLD") {
            policy.fuzzy_threshold = v;
        }
        if let Some(v) = env_f64("MATCH_MISSING_RESUME_SCORE") {
            policy.missing_resume_score = v;
        }
        if let Some(v) = env_f64("MATCH_FAILURE_SCORE") {
            policy.failure_score = v;
        }
        policy
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}
