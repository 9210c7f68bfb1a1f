//! Remarks section - breach warning followed by the server's suggestions.

use super::ViewState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemarkKind {
    Normal,
    /// Visually flagged entry.
    BreachWarning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Remark {
    pub text: String,
    pub kind: RemarkKind,
}

impl Remark {
    pub fn normal(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: RemarkKind::Normal }
    }
}

pub fn breach_warning(count: u64) -> Remark {
    Remark {
        text: format!("Found in {count} known breaches. Avoid using this password!"),
        kind: RemarkKind::BreachWarning,
    }
}

/// Builds the remarks list.
///
/// Server order is preserved. The breach warning, when present, is always
/// first; empty input and failed checks yield an empty list.
pub fn remarks_section(state: &ViewState<'_>) -> Vec<Remark> {
    let ViewState::Evaluated(result) = state else {
        return Vec::new();
    };

    let mut remarks = Vec::with_capacity(result.remarks.len() + 1);
    if let Some(count) = result.breach() {
        remarks.push(breach_warning(count));
    }
    remarks.extend(result.remarks.iter().map(Remark::normal));
    remarks
}
