//! Deterministic run transcript: canonical bytes plus a content digest.
//!
//! The transcript is the machine-readable record of a scenario run. Fields
//! are listed explicitly and `serde_json`'s default map ordering keeps keys
//! sorted, so identical reports produce identical bytes. The log path never
//! enters the byte surface — paths are machine-specific and must not move
//! the digest.

use sha2::{Digest, Sha256};

use crate::runner::{RunOutcomeV1, ScenarioReportV1};

/// Domain prefix for transcript digests (null-terminated).
pub const DOMAIN_TRANSCRIPT: &[u8] = b"CREST::TRANSCRIPT::V1\0";

/// Schema identifier embedded in every transcript.
pub const TRANSCRIPT_SCHEMA_VERSION: &str = "crest.transcript.v1";

/// Error building transcript bytes.
#[derive(Debug)]
pub enum TranscriptError {
    /// JSON serialization failed.
    SerializeFailed { detail: String },
}

impl std::fmt::Display for TranscriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SerializeFailed { detail } => write!(f, "serialization failed: {detail}"),
        }
    }
}

impl std::error::Error for TranscriptError {}

/// Serialize a report to deterministic JSON bytes.
///
/// # Errors
///
/// Returns [`TranscriptError::SerializeFailed`] if serialization fails.
pub fn transcript_bytes(report: &ScenarioReportV1) -> Result<Vec<u8>, TranscriptError> {
    let records: Vec<serde_json::Value> = report
        .records
        .iter()
        .map(|record| {
            let outcome = match &record.outcome {
                RunOutcomeV1::Found { value, index } => serde_json::json!({
                    "index": index,
                    "status": "found",
                    "value": value,
                }),
                RunOutcomeV1::Failed { message } => serde_json::json!({
                    "message": message,
                    "status": "failed",
                }),
            };
            serde_json::json!({
                "outcome": outcome,
                "sample_index": record.sample_index,
                "strategy": record.strategy.label(),
            })
        })
        .collect();

    let value = serde_json::json!({
        "records": records,
        "schema_version": TRANSCRIPT_SCHEMA_VERSION,
    });
    serde_json::to_vec(&value).map_err(|e| TranscriptError::SerializeFailed {
        detail: e.to_string(),
    })
}

/// Compute the domain-separated digest of transcript bytes.
///
/// Result format: `"sha256:<hex_digest>"`.
#[must_use]
pub fn transcript_digest(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TRANSCRIPT);
    hasher.update(bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}
