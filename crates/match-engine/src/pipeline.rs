//! The matching orchestrator: for one job and its applications, assemble the
//! job text, recover each resume, score, and return exactly one result per
//! application in iteration order.
//!
//! Failure policy: a missing resume gets the fixed missing-resume score, and
//! any failure while evaluating a single application is contained and gets
//! the fixed (lower) failure score. The batch itself never aborts; loading
//! the job or its application list is the caller's problem and happens
//! before this function is invoked.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::MatchPolicy;
use crate::extract::recover::{recover, RecoveredText, TextOrigin};
use crate::models::application::Application;
use crate::models::job::JobPosting;
use crate::models::result::{MatchOutcome, MatchResult};
use crate::scoring::score_match;
use crate::store::DocumentStore;

/// Scores every application against the job. One result per application,
/// same order. Evaluations run sequentially; each one is isolated in its own
/// task so a panic downgrades that application instead of killing the run.
pub async fn run_matching(
    job: &JobPosting,
    applications: &[Application],
    store: Arc<dyn DocumentStore>,
    policy: &MatchPolicy,
) -> Vec<MatchResult> {
    info!(job = %job.title, applications = applications.len(), "starting matching run");

    let job_text = assemble_job_text(job, store.as_ref()).await;
    let job_degraded = job_text.is_degraded();

    let mut results = Vec::with_capacity(applications.len());
    for application in applications {
        let Some(locator) = application.resume_document.clone() else {
            info!(application = %application.id, "no resume attached, assigning missing-resume score");
            results.push(MatchResult::missing_resume(
                application.id,
                policy.missing_resume_score,
            ));
            continue;
        };

        let store = Arc::clone(&store);
        let job_text = job_text.text.clone();
        let required_skills = job.required_skills.clone();
        let policy_for_task = policy.clone();

        let evaluated = tokio::spawn(async move {
            let resume = recover(store.as_ref(), &locator).await;
            let evaluation = score_match(&job_text, &resume.text, &required_skills, &policy_for_task);
            (evaluation, resume.is_degraded())
        })
        .await;

        match evaluated {
            Ok((evaluation, resume_degraded)) => {
                info!(application = %application.id, score = evaluation.score, "application scored");
                results.push(MatchResult {
                    application_id: application.id,
                    score: evaluation.score,
                    outcome: MatchOutcome::Scored,
                    breakdown: evaluation.breakdown,
                    details: evaluation.details,
                    degraded_input: job_degraded || resume_degraded,
                });
            }
            Err(err) => {
                warn!(
                    application = %application.id,
                    error = %err,
                    "application evaluation failed, assigning failure score"
                );
                results.push(MatchResult::failed(application.id, policy.failure_score));
            }
        }
    }

    results
}

/// Job text is the description field plus any recovered document text. When
/// both are blank, metadata pseudo-text keeps the scorer fed; its origin
/// marks every result of the run as degraded.
async fn assemble_job_text(job: &JobPosting, store: &dyn DocumentStore) -> RecoveredText {
    let mut text = job.description.clone().unwrap_or_default();
    let mut origin = TextOrigin::Provided;

    if let Some(locator) = &job.description_document {
        let recovered = recover(store, locator).await;
        if !recovered.text.trim().is_empty() {
            // Origin tracks the weakest contributing source.
            origin = origin.max(recovered.origin);
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&recovered.text);
        }
    }

    if text.trim().is_empty() {
        warn!(job = %job.title, "no job description text available, using metadata pseudo-text");
        return RecoveredText {
            text: job.metadata_text(),
            origin: TextOrigin::JobMetadata,
        };
    }

    RecoveredText { text, origin }
}
