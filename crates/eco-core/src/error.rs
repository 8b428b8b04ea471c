use thiserror::Error;

/// Errors raised around the responder. The responder itself never fails.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The incoming message was rejected before reaching the responder.
    #[error("{0}")]
    Validation(String),

    /// Configuration could not be loaded or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
