//! Presentation of operation outcomes for stdout.

use crate::api::Outcome;
use serde_json::json;

/// Text output: the fingerprint in hash-only mode, a confirmation after a rename.
pub fn format_outcome_text(outcome: &Outcome) -> String {
    match &outcome.renamed_to {
        Some(to) => format!("Renamed -> {}", to.display()),
        None => outcome.fingerprint.clone(),
    }
}

/// JSON output: a single object describing the operation.
pub fn format_outcome_json(outcome: &Outcome) -> String {
    json!({
        "path": outcome.path.to_string_lossy(),
        "kind": outcome.kind,
        "fingerprint": outcome.fingerprint,
        "digest": outcome.digest,
        "renamed_to": outcome.renamed_to.as_ref().map(|p| p.to_string_lossy()),
    })
    .to_string()
}
