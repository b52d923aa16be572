// src/infra/errors.rs — Error types for embedscope

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaygroundError {
    // Scoring service errors
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response from scoring service: {0}")]
    Decode(String),

    #[error("Scoring service rejected the request: {0}")]
    Service(String),

    // Caught before anything is sent
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Infra
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlaygroundError {
    /// Short label for the results pane.
    pub fn kind(&self) -> &'static str {
        match self {
            PlaygroundError::Network(_) => "network",
            PlaygroundError::Decode(_) => "decode",
            PlaygroundError::Service(_) => "service",
            PlaygroundError::InvalidRequest(_) => "invalid request",
            PlaygroundError::Config(_) => "config",
        }
    }

    /// Whether the failure came from talking to the scoring service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            PlaygroundError::Network(_) | PlaygroundError::Decode(_) | PlaygroundError::Service(_)
        )
    }
}
