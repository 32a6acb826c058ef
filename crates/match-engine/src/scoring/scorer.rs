//! The match scorer: combines resume features, job features, and the
//! declared required skills into five weighted sub-scores, an overall score,
//! and human-readable suggestions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::MatchPolicy;
use crate::extract::features::extract_keywords;
use crate::extract::similarity::{fuzzy_match, keyword_similarity};
use crate::extract::{job_features, parse_resume};
use crate::models::result::{MatchBreakdown, MatchDetails};
use crate::models::resume::ResumeSections;

/// A scored evaluation before it is attached to an application.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvaluation {
    pub score: f64,
    pub breakdown: MatchBreakdown,
    pub details: MatchDetails,
}

/// Awarded instead of a skills ratio when nothing is required anywhere but
/// the resume does list skills. A consolation signal, not a match.
const SKILLS_PRESENT_SCORE: f64 = 40.0;
/// Neutral default when the job states no experience requirement.
const NEUTRAL_EXPERIENCE_SCORE: f64 = 50.0;
const NO_EXPERIENCE_SCORE: f64 = 20.0;
/// Neutral default when the job states no education signal.
const NEUTRAL_EDUCATION_SCORE: f64 = 70.0;
const UNMATCHED_EDUCATION_SCORE: f64 = 30.0;
/// A section counts as present once its text exceeds this many chars.
const SECTION_CONTENT_MIN_CHARS: usize = 20;
const MAX_SKILL_GAP_SUGGESTIONS: usize = 3;
const MIN_RESUME_SKILLS: usize = 5;

/// Scores one resume against one job. Pure and total: any two strings and
/// any skill list (including empty) produce a result, and identical inputs
/// produce identical output.
pub fn score_match(
    job_text: &str,
    resume_text: &str,
    required_skills: &[String],
    policy: &MatchPolicy,
) -> MatchEvaluation {
    let resume = parse_resume(resume_text);
    let job = job_features(job_text);

    let effective_required = effective_required_skills(required_skills, &job.skills);

    let matched_skills: Vec<String> = resume
        .skills
        .iter()
        .filter(|skill| {
            let skill = skill.to_lowercase();
            effective_required
                .iter()
                .any(|required| fuzzy_match(&skill, required, policy.fuzzy_threshold))
        })
        .cloned()
        .collect();

    let skills_score = if !effective_required.is_empty() {
        (matched_skills.len() as f64 / effective_required.len() as f64 * 100.0).min(100.0)
    } else if !resume.skills.is_empty() {
        SKILLS_PRESENT_SCORE
    } else {
        0.0
    };

    let experience_score = experience_score(resume.experience_years, job.experience_years);
    let education_score = education_score(&resume.education, &job.education);
    let keyword_score =
        keyword_similarity(&extract_keywords(job_text), &extract_keywords(resume_text));
    let sections_score = section_completeness(&resume.sections);

    let w = &policy.weights;
    let overall = skills_score * w.skills
        + experience_score * w.experience
        + education_score * w.education
        + keyword_score * w.keyword
        + sections_score * w.sections;

    let suggestions = build_suggestions(
        &effective_required,
        &matched_skills,
        &resume.skills,
        job.experience_years,
        resume.experience_years,
    );

    MatchEvaluation {
        score: round2(overall),
        breakdown: MatchBreakdown {
            skills: round2(skills_score),
            experience: round2(experience_score),
            education: round2(education_score),
            keyword: round2(keyword_score),
            sections: round2(sections_score),
            overall: round2(overall),
        },
        details: MatchDetails {
            extracted_skills: resume.skills,
            experience_years: resume.experience_years,
            education: resume.education,
            matched_skills,
            suggestions,
        },
    }
}

/// Union of the declared required skills and the skills auto-extracted from
/// the job text: lower-cased, trimmed, empties discarded, deduplicated with
/// declared skills first.
fn effective_required_skills(required: &[String], job_skills: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut effective = Vec::new();

    for skill in required.iter().chain(job_skills.iter()) {
        let normalized = skill.trim().to_lowercase();
        if normalized.is_empty() {
            continue;
        }
        if seen.insert(normalized.clone()) {
            effective.push(normalized);
        }
    }
    effective
}

fn experience_score(resume_years: u32, required_years: u32) -> f64 {
    if required_years == 0 {
        return NEUTRAL_EXPERIENCE_SCORE;
    }
    let resume = resume_years as f64;
    let required = required_years as f64;

    if resume >= required {
        100.0
    } else if resume >= required * 0.7 {
        80.0
    } else if resume_years > 0 {
        resume / required * 70.0
    } else {
        NO_EXPERIENCE_SCORE
    }
}

fn education_score(resume_education: &[String], job_education: &[String]) -> f64 {
    if job_education.is_empty() {
        return NEUTRAL_EDUCATION_SCORE;
    }

    let matches = resume_education
        .iter()
        .filter(|term| {
            let term = term.to_lowercase();
            job_education.iter().any(|job_term| {
                let job_term = job_term.to_lowercase();
                term.contains(&job_term) || job_term.contains(&term)
            })
        })
        .count();

    if matches > 0 {
        (matches as f64 / job_education.len() as f64 * 100.0).min(100.0)
    } else {
        UNMATCHED_EDUCATION_SCORE
    }
}

fn section_completeness(sections: &ResumeSections) -> f64 {
    let weighted = [
        (&sections.experience, 30.0),
        (&sections.skills, 25.0),
        (&sections.education, 20.0),
        (&sections.summary, 15.0),
        (&sections.contact, 10.0),
    ];

    weighted
        .iter()
        .filter(|(text, _)| text.chars().count() > SECTION_CONTENT_MIN_CHARS)
        .map(|(_, weight)| weight)
        .sum()
}

/// Fixed order: skill gaps first, then the experience gap, then thin-skill
/// advice. At most one suggestion per category.
fn build_suggestions(
    required: &[String],
    matched: &[String],
    resume_skills: &[String],
    required_years: u32,
    resume_years: u32,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    let missing: Vec<&str> = required
        .iter()
        .filter(|req| !matched.iter().any(|m| m.to_lowercase().contains(req.as_str())))
        .map(String::as_str)
        .take(MAX_SKILL_GAP_SUGGESTIONS)
        .collect();

    if !missing.is_empty() {
        suggestions.push(format!(
            "Consider highlighting these skills: {}",
            missing.join(", ")
        ));
    }

    if required_years > resume_years {
        suggestions.push(format!(
            "Job requires {required_years} years experience, emphasize relevant projects"
        ));
    }

    if resume_skills.len() < MIN_RESUME_SKILLS {
        suggestions.push("Add more technical skills to your resume".to_string());
    }

    suggestions
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
