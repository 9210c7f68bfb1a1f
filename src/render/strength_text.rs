//! Strength text section - category label plus advisory message.

use super::ViewState;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StrengthText {
    #[default]
    Blank,
    /// `label` is the emphasized segment, followed by `advisory`.
    Evaluated { label: String, advisory: String },
    Error { message: String },
}

impl StrengthText {
    /// Flattened text without emphasis.
    pub fn plain(&self) -> String {
        match self {
            StrengthText::Blank => String::new(),
            StrengthText::Evaluated { label, advisory } if advisory.is_empty() => label.clone(),
            StrengthText::Evaluated { label, advisory } => format!("{label} — {advisory}"),
            StrengthText::Error { message } => message.clone(),
        }
    }
}

pub fn strength_text_section(state: &ViewState<'_>) -> StrengthText {
    match state {
        ViewState::Empty => StrengthText::Blank,
        ViewState::Evaluated(result) => StrengthText::Evaluated {
            label: result.strength.label().to_string(),
            advisory: result.advisory_message.clone(),
        },
        ViewState::Failed(err) => StrengthText::Error { message: err.user_message().to_string() },
    }
}
