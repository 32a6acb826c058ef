//! Feature extraction: catalogued + pattern-based skills, years of
//! experience, education vocabulary hits, and generic keywords.

use std::collections::HashSet;
use std::sync::OnceLock;

use chrono::{Datelike, Utc};
use regex::Regex;

/// Skill catalogue, grouped by category. Entries are stored lower-case and
/// matched as whole words.
const PROGRAMMING_LANGUAGES: &[&str] = &[
    "javascript", "typescript", "python", "java", "c++", "c#", "php", "ruby", "go", "rust",
    "swift", "kotlin", "scala", "dart", "html", "css", "sass", "scss", "less",
];
const FRAMEWORKS: &[&str] = &[
    "react", "angular", "vue", "svelte", "express", "django", "flask", "spring", "laravel",
    "rails", "fastapi", "node.js", "nodejs", "next.js", "nuxt", "gatsby", "bootstrap", "tailwind",
];
const DATABASES: &[&str] = &[
    "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "sqlite", "oracle", "cassandra",
    "dynamodb",
];
const CLOUD_PLATFORMS: &[&str] = &[
    "aws", "azure", "gcp", "google cloud", "heroku", "netlify", "vercel", "digitalocean",
];
const DEVOPS_TOOLS: &[&str] = &[
    "docker", "kubernetes", "jenkins", "terraform", "ansible", "ci/cd", "git", "github", "gitlab",
];
const MOBILE: &[&str] = &[
    "react native", "flutter", "ios", "android", "xamarin", "ionic", "cordova",
];
const DATA_AND_ML: &[&str] = &[
    "machine learning", "data science", "artificial intelligence", "tensorflow", "pytorch",
    "pandas", "numpy", "r", "matlab",
];

const SKILL_CATALOGUE: &[&[&str]] = &[
    PROGRAMMING_LANGUAGES,
    FRAMEWORKS,
    DATABASES,
    CLOUD_PLATFORMS,
    DEVOPS_TOOLS,
    MOBILE,
    DATA_AND_ML,
];

/// Free-text phrases whose object is a comma/ampersand list of skills.
const SKILL_PHRASE_PATTERNS: &[&str] = &[
    r"skilled?\s+in\s+([^.]+)",
    r"proficient\s+in\s+([^.]+)",
    r"experience\s+with\s+([^.]+)",
    r"knowledge\s+of\s+([^.]+)",
];

const EXPERIENCE_MENTION_PATTERNS: &[&str] = &[
    r"(?i)(\d+)\+?\s*years?\s*(?:of\s*)?experience",
    r"(?i)(\d+)\+?\s*years?\s*in",
    r"(?i)experience\s*:?\s*(\d+)\+?\s*years?",
];

const YEAR_RANGE_PATTERN: &str = r"(?i)(\d{4})\s*[-\u{2013}]\s*(\d{4}|present|current)";

const EDUCATION_VOCABULARY: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "mba", "degree", "diploma",
    "university", "college", "institute", "school",
    "computer science", "engineering", "mathematics", "physics", "chemistry",
    "business", "economics", "finance", "marketing",
];

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "can", "may", "might", "must", "shall",
];

pub const MAX_SKILLS: usize = 30;
const MAX_EXPERIENCE_YEARS: u32 = 50;
const MIN_RANGE_START_YEAR: i32 = 1990;
const MAX_KEYWORDS: usize = 100;
const MIN_TOKEN_CHARS: usize = 2;

fn catalogue_patterns() -> &'static [(&'static str, Regex)] {
    static PATTERNS: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SKILL_CATALOGUE
            .iter()
            .flat_map(|category| category.iter())
            .map(|skill| {
                let pattern = format!(r"\b{}\b", regex::escape(skill));
                (*skill, Regex::new(&pattern).expect("catalogue pattern is valid"))
            })
            .collect()
    })
}

fn phrase_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        SKILL_PHRASE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("skill phrase pattern is valid"))
            .collect()
    })
}

fn mention_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        EXPERIENCE_MENTION_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("experience mention pattern is valid"))
            .collect()
    })
}

fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(YEAR_RANGE_PATTERN).expect("year range pattern is valid"))
}

/// Extracts skills from free text: catalogue whole-word hits first, then the
/// objects of the "skilled in ..." phrase family. Case-insensitive dedup in
/// first-seen order, capped at [`MAX_SKILLS`].
pub fn extract_skills(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut skills: Vec<String> = Vec::new();

    for (skill, pattern) in catalogue_patterns() {
        if pattern.is_match(&lower) {
            push_unique(&mut skills, &mut seen, skill);
        }
    }

    for pattern in phrase_patterns() {
        for capture in pattern.captures_iter(&lower) {
            for candidate in capture[1].split([',', '&']) {
                let candidate = candidate.trim();
                if candidate.chars().count() > MIN_TOKEN_CHARS {
                    push_unique(&mut skills, &mut seen, candidate);
                }
            }
        }
    }

    skills.truncate(MAX_SKILLS);
    skills
}

fn push_unique(skills: &mut Vec<String>, seen: &mut HashSet<String>, candidate: &str) {
    if seen.insert(candidate.to_lowercase()) {
        skills.push(candidate.to_string());
    }
}

/// Best estimate of total years of experience: the maximum over explicit
/// "N years" mentions and YYYY-YYYY / YYYY-present ranges. Zero when the
/// text carries no signal.
pub fn extract_experience_years(text: &str) -> u32 {
    experience_years_at(text, Utc::now().year())
}

/// Same as [`extract_experience_years`] with the reference year injected,
/// so range clamping is testable without a live clock.
pub(crate) fn experience_years_at(text: &str, current_year: i32) -> u32 {
    let mut candidates: Vec<u32> = Vec::new();

    for pattern in mention_patterns() {
        for capture in pattern.captures_iter(text) {
            if let Ok(years) = capture[1].parse::<u32>() {
                if years <= MAX_EXPERIENCE_YEARS {
                    candidates.push(years);
                }
            }
        }
    }

    for capture in range_pattern().captures_iter(text) {
        let start: i32 = match capture[1].parse() {
            Ok(year) => year,
            Err(_) => continue,
        };
        let end_token = capture[2].to_lowercase();
        let end = if end_token == "present" || end_token == "current" {
            current_year
        } else {
            match end_token.parse() {
                Ok(year) => year,
                Err(_) => continue,
            }
        };
        if start > MIN_RANGE_START_YEAR && start <= end && end <= current_year {
            candidates.push((end - start) as u32);
        }
    }

    candidates
        .into_iter()
        .max()
        .unwrap_or(0)
        .min(MAX_EXPERIENCE_YEARS)
}

/// Presence test of the education vocabulary against the lower-cased text.
/// Returns matched terms in vocabulary order.
pub fn extract_education(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    EDUCATION_VOCABULARY
        .iter()
        .filter(|term| lower.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Tokenizes text into comparison keywords: lower-cased, punctuation mapped
/// to whitespace, stop words and short tokens dropped, first 100 kept.
/// Duplicates survive; set semantics are applied at comparison time.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { ' ' })
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS && !STOP_WORDS.contains(token))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_skills_found_case_insensitive() {
        let skills = extract_skills("Built services in Python and React on AWS");
        assert!(skills.contains(&"python".to_string()));
        assert!(skills.contains(&"react".to_string()));
        assert!(skills.contains(&"aws".to_string()));
    }

    #[test]
    fn test_whole_word_matching_rejects_substrings() {
        let skills = extract_skills("JavaScript developer");
        assert!(skills.contains(&"javascript".to_string()));
        assert!(!skills.contains(&"java".to_string()), "java must not match inside javascript");
    }

    #[test]
    fn test_phrase_extraction_splits_on_commas_and_ampersands() {
        let skills = extract_skills("Proficient in Elixir, Phoenix & Erlang");
        assert!(skills.contains(&"elixir".to_string()));
        assert!(skills.contains(&"phoenix".to_string()));
        assert!(skills.contains(&"erlang".to_string()));
    }

    #[test]
    fn test_phrase_extraction_drops_short_tokens() {
        let skills = extract_skills("knowledge of qa, ab");
        assert!(!skills.iter().any(|s| s == "qa" || s == "ab"));
    }

    #[test]
    fn test_skills_deduplicated_case_insensitively() {
        let skills = extract_skills("Python PYTHON python. Skilled in Python");
        assert_eq!(skills.iter().filter(|s| s.as_str() == "python").count(), 1);
    }

    #[test]
    fn test_skills_capped_at_30() {
        let listed: Vec<String> = (0..40).map(|i| format!("tool{i:02}")).collect();
        let text = format!("Skilled in {}", listed.join(", "));
        assert_eq!(extract_skills(&text).len(), MAX_SKILLS);
    }

    #[test]
    fn test_explicit_experience_mentions() {
        assert_eq!(experience_years_at("5 years of experience", 2024), 5);
        assert_eq!(experience_years_at("8+ years experience", 2024), 8);
        assert_eq!(experience_years_at("3 years in fintech", 2024), 3);
        assert_eq!(experience_years_at("Experience: 7 years", 2024), 7);
    }

    #[test]
    fn test_implausible_mention_ignored() {
        assert_eq!(experience_years_at("60 years experience", 2024), 0);
    }

    #[test]
    fn test_year_ranges_contribute_span() {
        assert_eq!(experience_years_at("Acme 2010-2015", 2024), 5);
        assert_eq!(experience_years_at("Acme 2019 - present", 2024), 5);
        assert_eq!(experience_years_at("Acme 2020 \u{2013} current", 2024), 4);
    }

    #[test]
    fn test_range_bounds_enforced() {
        // start must be after 1990 and the end may not lie in the future
        assert_eq!(experience_years_at("1985-1995", 2024), 0);
        assert_eq!(experience_years_at("2020-2030", 2024), 0);
        assert_eq!(experience_years_at("2020-2015", 2024), 0);
    }

    #[test]
    fn test_experience_takes_maximum_candidate() {
        let text = "2 years experience at Globex, before that Acme 2015-2021";
        assert_eq!(experience_years_at(text, 2024), 6);
    }

    #[test]
    fn test_no_experience_signal_is_zero() {
        assert_eq!(experience_years_at("team player, fast learner", 2024), 0);
    }

    #[test]
    fn test_education_vocabulary_hits_in_order() {
        let education = extract_education("Bachelor of Computer Science, State University");
        assert_eq!(education, vec!["bachelor", "university", "computer science"]);
    }

    #[test]
    fn test_education_empty_when_no_terms() {
        assert!(extract_education("ten years of welding").is_empty());
    }

    #[test]
    fn test_keywords_drop_stop_words_and_short_tokens() {
        let keywords = extract_keywords("The quick-thinking engineer and an architect!");
        assert_eq!(keywords, vec!["quick", "thinking", "engineer", "architect"]);
    }

    #[test]
    fn test_keywords_capped_at_100() {
        let text: Vec<String> = (0..150).map(|i| format!("word{i:03}")).collect();
        assert_eq!(extract_keywords(&text.join(" ")).len(), MAX_KEYWORDS);
    }

    #[test]
    fn test_keywords_are_lowercased() {
        assert_eq!(extract_keywords("Rust TOKIO"), vec!["rust", "tokio"]);
    }
}
