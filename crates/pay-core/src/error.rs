//! # Payment Error Types
//!
//! Typed error handling for the payment relay.
//! All gateway operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PaymentError {
    /// Configuration errors (HTTP client setup, malformed settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Missing or invalid caller input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure reaching the gateway (connect, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// Gateway answered with a non-success HTTP status
    #[error("Gateway error [{status}]: {message}")]
    Gateway { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns true for failures on the way to or back from the gateway.
    pub fn is_gateway_failure(&self) -> bool {
        matches!(
            self,
            PaymentError::Network(_)
                | PaymentError::Gateway { .. }
                | PaymentError::Serialization(_)
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Validation(_) => 400,
            PaymentError::Configuration(_)
            | PaymentError::Network(_)
            | PaymentError::Gateway { .. }
            | PaymentError::Serialization(_) => 500,
        }
    }

    /// The underlying message, without the variant prefix.
    ///
    /// This is what callers see in the `details` field of a failure response.
    pub fn message(&self) -> &str {
        match self {
            PaymentError::Configuration(msg)
            | PaymentError::Validation(msg)
            | PaymentError::Network(msg)
            | PaymentError::Serialization(msg) => msg,
            PaymentError::Gateway { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for PaymentError {
    fn from(err: serde_json::Error) -> Self {
        PaymentError::Serialization(err.to_string())
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
