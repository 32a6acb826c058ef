use serde::{Deserialize, Serialize};

/// The five canonical resume sections. A resume always carries all five,
/// each possibly empty; the struct itself is that invariant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResumeSections {
    pub contact: String,
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

/// Structured signals derived from one resume text.
///
/// `skills` holds at most 30 entries, deduplicated case-insensitively in
/// first-seen order. `experience_years` is capped at 50.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResumeFeatures {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Vec<String>,
    pub sections: ResumeSections,
    pub raw_text: String,
}

/// Structured signals derived from job-side text. Jobs are not segmented
/// into sections; only these three factors are read from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JobFeatures {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Vec<String>,
}
