//! Data model shared by the client, the renderer and the watcher.

use serde::Serialize;
use std::fmt;

/// Closed, ordered classification returned by the evaluation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthCategory {
    Weak,
    Medium,
    Strong,
}

impl StrengthCategory {
    /// Wire and display label.
    pub fn label(self) -> &'static str {
        match self {
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Medium => "Medium",
            StrengthCategory::Strong => "Strong",
        }
    }

    /// Width of the strength indicator, in percent.
    pub fn fill_percent(self) -> u8 {
        match self {
            StrengthCategory::Weak => 33,
            StrengthCategory::Medium => 66,
            StrengthCategory::Strong => 100,
        }
    }

    /// Exact, case-sensitive match against the wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Weak" => Some(StrengthCategory::Weak),
            "Medium" => Some(StrengthCategory::Medium),
            "Strong" => Some(StrengthCategory::Strong),
            _ => None,
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Body of a single `POST /check`.
///
/// Borrows the exposed password only for the duration of serialization.
#[derive(Serialize)]
pub struct EvaluationRequest<'a> {
    pub password: &'a str,
}

/// Validated server response.
///
/// Replaced wholesale on every successful check; never merged with a
/// previous result.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    pub strength: StrengthCategory,
    pub advisory_message: String,
    pub breached: bool,
    /// `Some` iff `breached` is true.
    pub breach_count: Option<u64>,
    pub remarks: Vec<String>,
    pub entropy_bits: Option<f64>,
    pub crack_time: Option<String>,
}

impl EvaluationResult {
    /// Breach count, only when the password was actually found in a breach.
    pub fn breach(&self) -> Option<u64> {
        if self.breached { self.breach_count } else { None }
    }
}
