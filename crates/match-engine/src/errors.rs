use thiserror::Error;

/// Engine-level error type.
///
/// Only the document fetch seam and caller-side glue produce errors; the
/// scoring pipeline itself masks every recoverable failure into a fallback
/// path and a fixed policy score instead of propagating.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Document fetch failed: {0}")]
    Fetch(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
