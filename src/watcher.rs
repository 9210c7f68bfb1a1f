//! Input watcher - drives a check on every edit of the password field.

use secrecy::{ExposeSecret, SecretString};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;

use crate::client::{EvaluationClient, HttpEvaluationClient};
use crate::config::CheckerConfig;
use crate::error::ConfigError;
use crate::render::{RenderTarget, ResultRenderer, ViewState};
use crate::tracker::{RequestTicket, RequestTracker};

/// Source of the current password value.
pub trait PasswordField: Send + Sync {
    fn value(&self) -> SecretString;
}

/// In-memory password field. Clones share the same value.
#[derive(Clone)]
pub struct MemoryField {
    value: Arc<Mutex<SecretString>>,
    reads: Arc<AtomicUsize>,
}

impl Default for MemoryField {
    fn default() -> Self {
        Self {
            value: Arc::new(Mutex::new(SecretString::new(String::new().into()))),
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl MemoryField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, value: &str) {
        let mut current = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        *current = SecretString::new(value.to_string().into());
    }

    /// Number of times the value has been read.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl PasswordField for MemoryField {
    fn value(&self) -> SecretString {
        self.reads.fetch_add(1, Ordering::SeqCst);
        let current = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        SecretString::new(current.expose_secret().to_string().into())
    }
}

/// What a single `on_change` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Empty input; regions cleared, no request sent.
    Cleared { seq: u64 },
    Rendered { seq: u64 },
    /// The check failed and the error state was rendered.
    Failed { seq: u64 },
    /// A response arrived after a newer edit and was dropped.
    Stale { seq: u64 },
    /// A newer edit arrived before the response; nothing was rendered.
    Superseded { seq: u64 },
}

pub struct InputWatcher<F, C, T> {
    field: F,
    client: C,
    renderer: AsyncMutex<ResultRenderer<T>>,
    tracker: RequestTracker,
    debounce: Duration,
    cancel_superseded: bool,
}

impl<F, T> InputWatcher<F, HttpEvaluationClient, T>
where
    F: PasswordField,
    T: RenderTarget,
{
    /// Wires an HTTP client configured from the environment.
    ///
    /// See [`CheckerConfig::from_env`] for the variables read.
    pub fn from_env(field: F, target: T) -> Result<Self, ConfigError> {
        let config = CheckerConfig::from_env()?;
        let client = HttpEvaluationClient::new(&config);
        Ok(Self::new(field, client, target, &config))
    }
}

impl<F, C, T> InputWatcher<F, C, T>
where
    F: PasswordField,
    C: EvaluationClient,
    T: RenderTarget,
{
    pub fn new(field: F, client: C, target: T, config: &CheckerConfig) -> Self {
        Self {
            field,
            client,
            renderer: AsyncMutex::new(ResultRenderer::new(target)),
            tracker: RequestTracker::new(),
            debounce: config.debounce,
            cancel_superseded: true,
        }
    }

    /// Whether in-flight requests are abandoned when a newer edit arrives.
    /// On by default. Stale responses are dropped either way.
    pub fn cancel_superseded(mut self, enabled: bool) -> Self {
        self.cancel_superseded = enabled;
        self
    }

    pub fn tracker(&self) -> &RequestTracker {
        &self.tracker
    }

    /// Handles one modification of the password field.
    ///
    /// Reads the field once. Empty input clears the UI without contacting
    /// the service. Otherwise the evaluation is awaited and rendered only if
    /// no newer edit has been seen in the meantime.
    pub async fn on_change(&self) -> CheckOutcome {
        let password = self.field.value();
        let ticket = self.tracker.issue();
        let seq = ticket.seq();

        if password.expose_secret().is_empty() {
            return self.clear(&ticket).await;
        }

        if !self.debounce.is_zero() && !self.wait_quiet(&ticket).await {
            #[cfg(feature = "tracing")]
            tracing::debug!("Check #{} superseded during debounce", seq);
            return CheckOutcome::Superseded { seq };
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Check #{} sent", seq);

        let result = if self.cancel_superseded {
            tokio::select! {
                biased;
                _ = ticket.token().cancelled() => None,
                result = self.client.evaluate(&password) => Some(result),
            }
        } else {
            Some(self.client.evaluate(&password).await)
        };
        drop(password);

        let Some(result) = result else {
            #[cfg(feature = "tracing")]
            tracing::debug!("Check #{} cancelled in flight", seq);
            return CheckOutcome::Superseded { seq };
        };

        let mut renderer = self.renderer.lock().await;
        if !self.tracker.is_latest(&ticket) {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Check #{} discarded, latest is #{}",
                seq,
                self.tracker.latest_seq()
            );
            return CheckOutcome::Stale { seq };
        }

        match &result {
            Ok(evaluation) => {
                renderer.show(&ViewState::Evaluated(evaluation));
                #[cfg(feature = "tracing")]
                tracing::debug!("Check #{} rendered: {}", seq, evaluation.strength);
                CheckOutcome::Rendered { seq }
            }
            Err(e) => {
                renderer.show(&ViewState::Failed(e));
                #[cfg(feature = "tracing")]
                tracing::warn!("Check #{} failed: {}", seq, e);
                CheckOutcome::Failed { seq }
            }
        }
    }

    async fn clear(&self, ticket: &RequestTicket) -> CheckOutcome {
        let seq = ticket.seq();
        let mut renderer = self.renderer.lock().await;
        if !self.tracker.is_latest(ticket) {
            return CheckOutcome::Superseded { seq };
        }
        renderer.show(&ViewState::Empty);
        CheckOutcome::Cleared { seq }
    }

    /// Returns false if a newer edit arrived before the debounce elapsed.
    async fn wait_quiet(&self, ticket: &RequestTicket) -> bool {
        tokio::select! {
            _ = ticket.token().cancelled() => false,
            _ = tokio::time::sleep(self.debounce) => self.tracker.is_latest(ticket),
        }
    }
}
