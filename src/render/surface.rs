//! Render targets.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Indicator, Remark, StrengthText, UiState};

/// The UI surface: one setter per region.
///
/// Injected at construction; the renderer is its only writer.
pub trait RenderTarget: Send {
    fn set_indicator(&mut self, indicator: &Indicator);
    fn set_strength_text(&mut self, text: &StrengthText);
    fn set_remarks(&mut self, remarks: &[Remark]);
}

#[derive(Debug, Default)]
struct SurfaceState {
    ui: UiState,
    renders: usize,
}

/// In-memory surface. Clones share the same regions, so a handle can be kept
/// while another is moved into a watcher.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    state: Arc<Mutex<SurfaceState>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of all three regions.
    pub fn snapshot(&self) -> UiState {
        self.lock().ui.clone()
    }

    /// Number of indicator writes, i.e. one per render.
    pub fn renders(&self) -> usize {
        self.lock().renders
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderTarget for MemorySurface {
    fn set_indicator(&mut self, indicator: &Indicator) {
        let mut state = self.lock();
        state.ui.indicator = *indicator;
        state.renders += 1;
    }

    fn set_strength_text(&mut self, text: &StrengthText) {
        self.lock().ui.strength_text = text.clone();
    }

    fn set_remarks(&mut self, remarks: &[Remark]) {
        self.lock().ui.remarks = remarks.to_vec();
    }
}
