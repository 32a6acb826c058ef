use serde::{Deserialize, Serialize};

/// A job posting as supplied by the surrounding system.
///
/// `description_document` is an opaque locator (URL or path) for an attached
/// job-description document; the engine recovers its text best-effort and
/// never requires it to be parseable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub required_skills: Vec<String>,
    pub description_document: Option<String>,
}

impl JobPosting {
    /// Pseudo-text built from metadata, used when neither the description
    /// field nor an attached document yields any text. Callers see this
    /// flagged as degraded input on every result of the run.
    pub fn metadata_text(&self) -> String {
        let parts = [
            self.title.as_str(),
            self.company.as_str(),
            self.location.as_deref().unwrap_or(""),
            &self.required_skills.join(" "),
        ];
        parts.join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_text_joins_fields() {
        let job = JobPosting {
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: Some("Berlin".to_string()),
            description: None,
            required_skills: vec!["Rust".to_string(), "PostgreSQL".to_string()],
            description_document: None,
        };
        assert_eq!(job.metadata_text(), "Backend Engineer Acme Berlin Rust PostgreSQL");
    }

    #[test]
    fn test_metadata_text_skips_missing_location() {
        let job = JobPosting {
            title: "Analyst".to_string(),
            company: "Acme".to_string(),
            location: None,
            description: None,
            required_skills: vec![],
            description_document: None,
        };
        assert_eq!(job.metadata_text(), "Analyst Acme");
    }
}
