//! Error Types

use thiserror::Error;

/// Result type alias for provider operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Provider error types
#[derive(Error, Debug)]
pub enum LlmError {
    /// The provider rejected the request
    #[error("Provider error: {0}")]
    Provider(String),

    /// Provider unreachable or failing on its side
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// Credential missing, invalid or revoked
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Rate limited
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response decoded but carried no usable text
    #[error("Empty response from {0}")]
    EmptyResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LlmError {
    /// Convert to a message suitable for showing to the operator
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Provider(msg) => format!("The AI service encountered an error: {msg}"),
            Self::ProviderUnavailable(_) => {
                "The AI service is currently unavailable. Please check your internet connection."
                    .into()
            }
            Self::Auth(_) => "Authentication failed. Please check your API key.".into(),
            Self::RateLimited(_) => {
                "The AI service is rate limiting requests. Please wait a moment.".into()
            }
            Self::InvalidResponse(_) | Self::EmptyResponse(_) => {
                "The AI service returned an unexpected response.".into()
            }
            Self::Config(msg) => format!("The AI service is misconfigured: {msg}"),
        }
    }
}
