//! Best-effort document text recovery.
//!
//! The primary strategy is a low-confidence literal-run scan over the raw
//! bytes, not a document-format parser: printable runs between `(` and `)`
//! byte pairs cover the common literal text operator encoding of many binary
//! document formats. When the scan yields too little, or the document cannot
//! be fetched at all, recovery degrades to a bag of words derived from the
//! locator so downstream scoring never collapses to zero. A real parser can
//! replace the scan behind [`recover`] without touching the scorer.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::store::DocumentStore;

/// Where a piece of recovered text came from, ordered from most to least
/// trustworthy. The later fallback origins mark pseudo-text that must not be
/// mistaken for genuine document content.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum TextOrigin {
    /// Caller-supplied plain text (a job's description field).
    Provided,
    /// Literal-run scan over fetched document bytes.
    LiteralScan,
    /// Bag of words derived from the document locator.
    LocatorFallback,
    /// Pseudo-text assembled from job metadata.
    JobMetadata,
}

/// Recovered text plus its provenance. Transient; never cached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecoveredText {
    pub text: String,
    pub origin: TextOrigin,
}

impl RecoveredText {
    /// True when the text is pseudo-content rather than something actually
    /// read out of a document or supplied by the caller.
    pub fn is_degraded(&self) -> bool {
        matches!(self.origin, TextOrigin::LocatorFallback | TextOrigin::JobMetadata)
    }
}

/// Generic vocabulary appended to locator-derived fallback text so keyword
/// and skill scoring still has something to chew on.
const FALLBACK_VOCABULARY: &str = "resume cv curriculum vitae professional experience skills \
education background developer engineer manager analyst designer programmer software technology";

const PRINTABLE_LOW: u8 = 0x20;
const PRINTABLE_HIGH: u8 = 0x7e;
/// A run ends after this many scanned bytes even without a closing paren.
const MAX_RUN_BYTES: usize = 200;
/// Runs at or below this length are noise.
const MIN_RUN_CHARS: usize = 3;
/// The scan result is only trusted above this length. Heuristic: short
/// output is as likely to be garbage as legitimately short text.
const MIN_SCAN_CHARS: usize = 50;

/// Extracts runs of printable ASCII appearing after `(` bytes, each run
/// ending at the next `)` or after [`MAX_RUN_BYTES`]. Surviving runs are
/// joined with single spaces. Overlapping runs are all emitted; the scan
/// advances one byte at a time.
pub fn scan_literal_runs(bytes: &[u8]) -> String {
    let mut out = String::new();

    for (i, &byte) in bytes.iter().enumerate() {
        if byte != b'(' {
            continue;
        }
        let mut run = String::new();
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] != b')' && j - i < MAX_RUN_BYTES {
            let b = bytes[j];
            if (PRINTABLE_LOW..=PRINTABLE_HIGH).contains(&b) {
                run.push(b as char);
            }
            j += 1;
        }
        if run.len() > MIN_RUN_CHARS {
            out.push_str(&run);
            out.push(' ');
        }
    }

    out
}

/// Bag-of-words pseudo-text from a locator: final path segment, extension
/// stripped, separators spaced, digits removed, generic vocabulary appended.
pub fn locator_fallback(locator: &str) -> String {
    let file_name = locator.rsplit('/').next().unwrap_or("");
    let stem = file_name
        .rsplit_once('.')
        .map(|(stem, _ext)| stem)
        .unwrap_or(file_name);

    let cleaned: String = stem
        .chars()
        .filter_map(|c| match c {
            '_' | '-' => Some(' '),
            c if c.is_ascii_digit() => None,
            c => Some(c),
        })
        .collect();
    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.is_empty() {
        FALLBACK_VOCABULARY.to_string()
    } else {
        format!("{cleaned} {FALLBACK_VOCABULARY}")
    }
}

/// Recovery from already-fetched bytes: accept the literal-run scan only
/// above the confidence threshold, otherwise fall back to the locator.
pub fn recover_from_bytes(locator: &str, bytes: &[u8]) -> RecoveredText {
    let scanned = scan_literal_runs(bytes);
    if scanned.chars().count() > MIN_SCAN_CHARS {
        debug!(locator, chars = scanned.len(), "recovered text via literal-run scan");
        return RecoveredText {
            text: scanned,
            origin: TextOrigin::LiteralScan,
        };
    }

    debug!(locator, "literal-run scan below confidence threshold, using locator fallback");
    RecoveredText {
        text: locator_fallback(locator),
        origin: TextOrigin::LocatorFallback,
    }
}

/// Fetches a document and recovers its text. Never fails and never returns
/// an empty string: transport errors degrade to the locator fallback.
pub async fn recover(store: &dyn DocumentStore, locator: &str) -> RecoveredText {
    match store.fetch(locator).await {
        Ok(bytes) => recover_from_bytes(locator, &bytes),
        Err(err) => {
            warn!(locator, error = %err, "document fetch failed, using locator fallback");
            RecoveredText {
                text: locator_fallback(locator),
                origin: TextOrigin::LocatorFallback,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bytes::Bytes;

    use super::*;
    use crate::errors::EngineError;

    /// Wraps each sentence in parens the way literal text operators would
    /// appear in a binary document stream.
    fn document_bytes(sentences: &[&str]) -> Vec<u8> {
        let mut bytes = vec![0u8, 1, 2];
        for sentence in sentences {
            bytes.extend_from_slice(format!("({sentence})").as_bytes());
            bytes.extend_from_slice(&[0xff, 0x03]);
        }
        bytes
    }

    struct FailingStore;

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn fetch(&self, locator: &str) -> Result<Bytes, EngineError> {
            Err(EngineError::Fetch(format!("no route to {locator}")))
        }
    }

    #[test]
    fn test_scan_extracts_parenthesized_runs() {
        let bytes = document_bytes(&["Senior backend engineer", "Ten years of Rust"]);
        let text = scan_literal_runs(&bytes);
        assert!(text.contains("Senior backend engineer"));
        assert!(text.contains("Ten years of Rust"));
    }

    #[test]
    fn test_scan_discards_short_runs() {
        let text = scan_literal_runs(b"(ab) (abc) (abcd)");
        assert!(!text.contains("ab "));
        assert!(text.contains("abcd"));
    }

    #[test]
    fn test_scan_skips_unprintable_bytes_inside_runs() {
        let text = scan_literal_runs(b"(ab\x01cd)");
        assert!(text.contains("abcd"));
    }

    #[test]
    fn test_scan_caps_runaway_runs() {
        let mut bytes = vec![b'('];
        bytes.extend(std::iter::repeat(b'a').take(400));
        let text = scan_literal_runs(&bytes);
        assert_eq!(text.trim_end().len(), MAX_RUN_BYTES - 1);
    }

    #[test]
    fn test_scan_empty_input() {
        assert_eq!(scan_literal_runs(b""), "");
    }

    #[test]
    fn test_recover_accepts_long_scan() {
        let bytes = document_bytes(&[
            "Senior backend engineer with ten years of experience",
            "Rust and PostgreSQL in production",
        ]);
        let recovered = recover_from_bytes("resumes/jane.pdf", &bytes);
        assert_eq!(recovered.origin, TextOrigin::LiteralScan);
        assert!(!recovered.is_degraded());
        assert!(recovered.text.contains("PostgreSQL"));
    }

    #[test]
    fn test_recover_rejects_short_scan() {
        let recovered = recover_from_bytes("resumes/jane_doe.pdf", b"(short text)");
        assert_eq!(recovered.origin, TextOrigin::LocatorFallback);
        assert!(recovered.is_degraded());
        assert!(recovered.text.starts_with("jane doe"));
    }

    #[test]
    fn test_locator_fallback_cleans_file_name() {
        let text = locator_fallback("https://cdn.example.com/uploads/john_doe-2021.pdf");
        assert!(text.starts_with("john doe"));
        assert!(!text.contains("2021"));
        assert!(text.contains("resume"));
        assert!(text.contains("experience"));
    }

    #[test]
    fn test_locator_fallback_never_empty() {
        let text = locator_fallback("");
        assert!(!text.is_empty());
        assert!(text.contains("curriculum vitae"));
    }

    #[test]
    fn test_locator_fallback_strips_last_extension_only() {
        let text = locator_fallback("cv.v2.pdf");
        assert!(text.starts_with("cv.v"));
    }

    #[tokio::test]
    async fn test_fetch_failure_masked_to_fallback() {
        let recovered = recover(&FailingStore, "s3://bucket/maria_garcia.pdf").await;
        assert_eq!(recovered.origin, TextOrigin::LocatorFallback);
        assert!(recovered.text.starts_with("maria garcia"));
        assert!(!recovered.text.is_empty());
    }
}
