//! Live password strength meter client
//!
//! This library keeps a password strength UI in sync with a remote
//! evaluation service: every edit of the password field is sent to
//! `POST /check`, and the latest answer is mapped onto three regions
//! (strength bar, strength text, remarks list).
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate. Passwords are never logged.
//!
//! # Environment Variables
//!
//! - `PWD_CHECK_ENDPOINT`: URL of the check route
//!   (default: `http://127.0.0.1:5000/check`)
//! - `PWD_CHECK_TIMEOUT_MS`: request timeout (default: `5000`)
//! - `PWD_CHECK_DEBOUNCE_MS`: delay before a request is sent (default: `0`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_meter::{CheckOutcome, InputWatcher, MemoryField, MemorySurface};
//!
//! # async fn run() -> Result<(), pwd_meter::ConfigError> {
//! let field = MemoryField::new();
//! let surface = MemorySurface::new();
//! let watcher = InputWatcher::from_env(field.clone(), surface.clone())?;
//!
//! field.set("hunter2");
//! if let CheckOutcome::Rendered { .. } = watcher.on_change().await {
//!     let ui = surface.snapshot();
//!     println!("{} {}", ui.indicator.width(), ui.strength_text.plain());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod render;
mod schema;
mod tracker;
mod types;
mod watcher;

// Public API
pub use client::{EvaluationClient, HttpEvaluationClient};
pub use config::CheckerConfig;
pub use error::{ConfigError, EvaluationError, FALLBACK_MESSAGE, NetworkError};
pub use render::{
    Indicator, MemorySurface, Remark, RemarkKind, RenderTarget, ResultRenderer, StrengthText,
    UiState, ViewState, breach_warning, render,
};
pub use schema::parse_response;
pub use tracker::{RequestTicket, RequestTracker};
pub use types::{EvaluationRequest, EvaluationResult, StrengthCategory};
pub use watcher::{CheckOutcome, InputWatcher, MemoryField, PasswordField};
