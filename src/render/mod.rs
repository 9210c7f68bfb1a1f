//! Result rendering
//!
//! Maps an evaluation outcome onto the three UI regions. Each region is
//! computed by its own section; `ResultRenderer` writes all of them on every
//! render so nothing from a previous render survives.

mod indicator;
mod remarks;
mod strength_text;
mod surface;

pub use indicator::{Indicator, indicator_section};
pub use remarks::{Remark, RemarkKind, breach_warning, remarks_section};
pub use strength_text::{StrengthText, strength_text_section};
pub use surface::{MemorySurface, RenderTarget};

use crate::error::EvaluationError;
use crate::types::EvaluationResult;

/// What the UI should currently reflect.
#[derive(Debug, Clone, Copy)]
pub enum ViewState<'a> {
    /// Empty password field.
    Empty,
    Evaluated(&'a EvaluationResult),
    Failed(&'a EvaluationError),
}

/// Full contents of the three regions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub indicator: Indicator,
    pub strength_text: StrengthText,
    pub remarks: Vec<Remark>,
}

impl UiState {
    /// True if every region is in its zero/blank state.
    pub fn is_blank(&self) -> bool {
        *self == UiState::default()
    }
}

/// Pure mapping from view state to UI state.
pub fn render(state: &ViewState<'_>) -> UiState {
    UiState {
        indicator: indicator_section(state),
        strength_text: strength_text_section(state),
        remarks: remarks_section(state),
    }
}

/// Writes rendered state into an injected target.
#[derive(Debug)]
pub struct ResultRenderer<T> {
    target: T,
}

impl<T: RenderTarget> ResultRenderer<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn show(&mut self, state: &ViewState<'_>) -> UiState {
        let ui = render(state);
        self.apply(&ui);
        ui
    }

    /// Overwrites all three regions.
    pub fn apply(&mut self, ui: &UiState) {
        self.target.set_indicator(&ui.indicator);
        self.target.set_strength_text(&ui.strength_text);
        self.target.set_remarks(&ui.remarks);
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }
}
