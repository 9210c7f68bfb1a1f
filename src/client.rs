//! Evaluation client - one `POST` to the remote check endpoint per call.

use async_trait::async_trait;
use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use std::time::Duration;

use crate::config::CheckerConfig;
use crate::error::{EvaluationError, NetworkError};
use crate::schema::parse_response;
use crate::types::{EvaluationRequest, EvaluationResult};

/// Remote password evaluation.
///
/// Implementations perform a single request/response exchange and never
/// retry; retry policy belongs to the caller.
#[async_trait]
pub trait EvaluationClient: Send + Sync {
    async fn evaluate(&self, password: &SecretString) -> Result<EvaluationResult, EvaluationError>;
}

#[async_trait]
impl<C: EvaluationClient + ?Sized> EvaluationClient for Arc<C> {
    async fn evaluate(&self, password: &SecretString) -> Result<EvaluationResult, EvaluationError> {
        (**self).evaluate(password).await
    }
}

/// `reqwest`-backed client for the `/check` endpoint.
#[derive(Clone, Debug)]
pub struct HttpEvaluationClient {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl HttpEvaluationClient {
    pub fn new(config: &CheckerConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    /// Reuses an existing connection pool.
    pub fn with_http_client(http: reqwest::Client, config: &CheckerConfig) -> Self {
        Self {
            http,
            endpoint: config.endpoint.clone(),
            timeout: config.timeout,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl EvaluationClient for HttpEvaluationClient {
    async fn evaluate(&self, password: &SecretString) -> Result<EvaluationResult, EvaluationError> {
        let request = EvaluationRequest { password: password.expose_secret() };

        let resp = self
            .http
            .post(self.endpoint.clone())
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await
            .map_err(classify)?;

        let status = resp.status();
        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Evaluation service responded with status code {}", status);
            return Err(NetworkError::Status(status.as_u16()).into());
        }

        let body = resp.bytes().await.map_err(classify)?;
        let result = parse_response(&body);

        #[cfg(feature = "tracing")]
        {
            if let Err(e) = &result {
                tracing::warn!("Rejected evaluation response: {}", e);
            }
        }

        result
    }
}

fn classify(err: reqwest::Error) -> NetworkError {
    if err.is_timeout() {
        NetworkError::Timeout
    } else if err.is_connect() {
        NetworkError::Connect
    } else {
        NetworkError::Transport(err.without_url().to_string())
    }
}
