//! Heading-based resume section segmentation.
//!
//! A short line containing a section keyword opens a section; the next short
//! line containing any canonical header closes it. The short-line rule keeps
//! body prose that merely mentions a keyword from being mistaken for a
//! heading. Single forward pass, no backtracking.

use crate::models::resume::ResumeSections;

/// Headers that terminate whichever section is currently open. Independent
/// of the section being extracted, so any header boundary truncates,
/// including a repeat of the open section's own header.
const CANONICAL_HEADERS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "achievements",
    "references",
    "contact",
    "summary",
    "objective",
];

const CONTACT_KEYWORDS: &[&str] = &["contact", "personal", "info"];
const SUMMARY_KEYWORDS: &[&str] = &["summary", "objective", "profile", "about"];
const EXPERIENCE_KEYWORDS: &[&str] = &["experience", "work", "employment", "career", "professional"];
const EDUCATION_KEYWORDS: &[&str] = &["education", "academic", "university", "degree", "school"];
const SKILLS_KEYWORDS: &[&str] = &["skills", "technical", "technologies", "tools", "proficient"];

/// Lines at or above this length are body prose, never headers.
const HEADER_MAX_CHARS: usize = 50;

fn is_header_line(line: &str, keywords: &[&str]) -> bool {
    line.chars().count() < HEADER_MAX_CHARS && keywords.iter().any(|k| line.contains(k))
}

/// Returns the text between the first header line matching `keywords` and
/// the next canonical header, joined and trimmed. Empty string when no
/// header is found. Header lines themselves are not part of the content.
pub fn extract_section(text: &str, keywords: &[&str]) -> String {
    let mut content: Vec<&str> = Vec::new();
    let mut in_section = false;

    for raw in text.lines() {
        let line = raw.trim().to_lowercase();

        if !in_section {
            if is_header_line(&line, keywords) {
                in_section = true;
            }
            continue;
        }

        if is_header_line(&line, CANONICAL_HEADERS) {
            break;
        }
        content.push(raw);
    }

    content.join("\n").trim().to_string()
}

/// Splits raw resume text into the five canonical sections using the fixed
/// keyword sets. Every field is present; unfound sections are empty.
pub fn segment_resume(text: &str) -> ResumeSections {
    ResumeSections {
        contact: extract_section(text, CONTACT_KEYWORDS),
        summary: extract_section(text, SUMMARY_KEYWORDS),
        experience: extract_section(text, EXPERIENCE_KEYWORDS),
        education: extract_section(text, EDUCATION_KEYWORDS),
        skills: extract_section(text, SKILLS_KEYWORDS),
    }
}
