// Text analysis layer: recovery of plain text from document bytes, section
// segmentation, feature extraction, and the string-similarity primitives.

pub mod features;
pub mod recover;
pub mod sections;
pub mod similarity;

use crate::models::resume::{JobFeatures, ResumeFeatures};

/// Derives all structured signals from one resume text.
pub fn parse_resume(text: &str) -> ResumeFeatures {
    ResumeFeatures {
        skills: features::extract_skills(text),
        experience_years: features::extract_experience_years(text),
        education: features::extract_education(text),
        sections: sections::segment_resume(text),
        raw_text: text.to_string(),
    }
}

/// Derives job-side signals. Jobs are not segmented into sections.
pub fn job_features(text: &str) -> JobFeatures {
    JobFeatures {
        skills: features::extract_skills(text),
        experience_years: features::extract_experience_years(text),
        education: features::extract_education(text),
    }
}
