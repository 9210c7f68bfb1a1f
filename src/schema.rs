//! Wire schema of the `/check` response and its validation.

use serde::Deserialize;

use crate::error::EvaluationError;
use crate::types::{EvaluationResult, StrengthCategory};

#[derive(Deserialize)]
struct WireResponse {
    strength: String,
    ai_msg: String,
    pwned: bool,
    #[serde(default)]
    pwned_count: Option<u64>,
    remarks: Vec<String>,
    #[serde(default)]
    entropy: Option<f64>,
    #[serde(default)]
    crack_time: Option<String>,
}

/// Parses and validates a response body.
///
/// # Errors
///
/// Returns `EvaluationError::MalformedResponse` if:
/// - The body is not JSON, or a required field is missing or mistyped
/// - `strength` is not one of `Weak`, `Medium`, `Strong`
/// - `pwned` is true but `pwned_count` is absent
pub fn parse_response(body: &[u8]) -> Result<EvaluationResult, EvaluationError> {
    let wire: WireResponse = serde_json::from_slice(body)
        .map_err(|e| EvaluationError::MalformedResponse(e.to_string()))?;

    let strength = StrengthCategory::from_label(&wire.strength).ok_or_else(|| {
        EvaluationError::MalformedResponse(format!("unknown strength {:?}", wire.strength))
    })?;

    let breach_count = if wire.pwned {
        Some(wire.pwned_count.ok_or_else(|| {
            EvaluationError::MalformedResponse("`pwned` is true but `pwned_count` is missing".into())
        })?)
    } else {
        None
    };

    Ok(EvaluationResult {
        strength,
        advisory_message: wire.ai_msg,
        breached: wire.pwned,
        breach_count,
        remarks: wire.remarks,
        entropy_bits: wire.entropy,
        crack_time: wire.crack_time,
    })
}
