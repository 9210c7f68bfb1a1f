//! Error types.

use thiserror::Error;

/// Shown to the user for every failed check, whatever the cause.
pub const FALLBACK_MESSAGE: &str = "Could not check password strength right now";

/// The transport call could not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("connection to evaluation service failed")]
    Connect,
    #[error("evaluation request timed out")]
    Timeout,
    #[error("evaluation service responded with status code {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    #[error("malformed evaluation response: {0}")]
    MalformedResponse(String),
}

impl EvaluationError {
    /// Text safe to put in front of the user. Diagnostics stay in `Display`.
    pub fn user_message(&self) -> &'static str {
        match self {
            EvaluationError::Network(_) | EvaluationError::MalformedResponse(_) => FALLBACK_MESSAGE,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("invalid evaluation endpoint: {0}")]
    InvalidEndpoint(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_hides_diagnostics() {
        let errors = [
            EvaluationError::Network(NetworkError::Transport("tcp reset by 10.0.0.7".into())),
            EvaluationError::Network(NetworkError::Status(502)),
            EvaluationError::MalformedResponse("missing field `pwned`".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), FALLBACK_MESSAGE);
            assert!(!err.user_message().contains("10.0.0.7"));
        }
    }

    #[test]
    fn test_network_error_converts() {
        let err: EvaluationError = NetworkError::Timeout.into();
        assert_eq!(err, EvaluationError::Network(NetworkError::Timeout));
        assert!(err.to_string().contains("timed out"));
    }
}
