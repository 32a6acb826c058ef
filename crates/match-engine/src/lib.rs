//! Applicant/job matching engine.
//!
//! Given a job posting and its applications, the engine recovers best-effort
//! text from attached documents, parses resumes into sections and structured
//! features, and produces a reproducible weighted match score per
//! application with a breakdown and improvement suggestions.
//!
//! The crate is a pure computation library around one I/O seam, the
//! [`DocumentStore`] trait; authentication, storage, and persistence of
//! results belong to the surrounding system. Scoring is deterministic:
//! identical inputs yield identical results, and independent applications
//! can safely be evaluated in parallel by the caller.

pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod pipeline;
pub mod scoring;
pub mod store;

pub use config::{MatchPolicy, ScoreWeights};
pub use errors::EngineError;
pub use extract::recover::{RecoveredText, TextOrigin};
pub use models::application::Application;
pub use models::job::JobPosting;
pub use models::result::{MatchBreakdown, MatchDetails, MatchOutcome, MatchResult};
pub use models::resume::{JobFeatures, ResumeFeatures, ResumeSections};
pub use pipeline::run_matching;
pub use scoring::{score_match, MatchEvaluation};
pub use store::{DocumentStore, HttpDocumentStore};
