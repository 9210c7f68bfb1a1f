//! Indicator section - proportional strength bar.

use super::ViewState;

/// Fill of the strength bar. Zero means empty/unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Indicator {
    pub fill_percent: u8,
}

impl Indicator {
    /// CSS-style width, e.g. `"66%"`.
    pub fn width(&self) -> String {
        format!("{}%", self.fill_percent)
    }
}

/// Computes the bar fill.
///
/// # Returns
/// - The category proportion for an evaluated password
/// - An empty bar for empty input or a failed check
pub fn indicator_section(state: &ViewState<'_>) -> Indicator {
    match state {
        ViewState::Evaluated(result) => Indicator { fill_percent: result.strength.fill_percent() },
        ViewState::Empty | ViewState::Failed(_) => Indicator::default(),
    }
}
