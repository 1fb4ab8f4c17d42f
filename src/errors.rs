use thiserror::Error;

/// Error type that captures submission failures.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Request timed out after {0}s")]
    Timeout(u64),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Submission rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Advertisement already submitted (id {0})")]
    AlreadySubmitted(u64),
}

impl GatewayError {
    /// Best human-readable message for the user, preferring the
    /// server-provided one with a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Rejected { message, .. } if !message.trim().is_empty() => {
                message.clone()
            }
            GatewayError::Timeout(secs) => {
                format!("The submission timed out after {secs} seconds.")
            }
            GatewayError::AlreadySubmitted(_) => {
                "This advertisement was already submitted.".into()
            }
            _ => "Failed to submit the advertisement. Please try again.".into(),
        }
    }
}

/// Error type for configuration persistence failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("No configuration directory available on this platform")]
    NoConfigDir,
}
