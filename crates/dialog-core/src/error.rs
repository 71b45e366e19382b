//! Error Types

use thiserror::Error;

/// Result type alias for dialog operations
pub type Result<T> = std::result::Result<T, DialogError>;

/// Errors surfaced to the hosting platform.
///
/// None of these are user-facing validation failures; those travel back as
/// `ElicitSlot` responses instead.
#[derive(Error, Debug)]
pub enum DialogError {
    /// No handler is registered for the intent
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    /// A slot the handler needs was not filled
    #[error("Required slot missing: {0}")]
    MissingSlot(String),

    /// The event did not match the expected request shape
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Handler-specific failure
    #[error("Handler error: {0}")]
    Handler(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DialogError {
    /// Whether the caller sent something malformed, as opposed to a server-side fault
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    /// Check if error is retryable
    ///
    /// Handlers are deterministic over the request, so resending the same
    /// event fails the same way.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::UnsupportedIntent(_)
            | Self::MissingSlot(_)
            | Self::InvalidRequest(_)
            | Self::Handler(_)
            | Self::Json(_) => false,
        }
    }

    /// Convert to a user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            Self::UnsupportedIntent(name) => format!("Sorry, I can't help with '{name}' yet."),
            Self::MissingSlot(slot) => format!("I still need your {slot} before I can continue."),
            Self::InvalidRequest(_) => "The request could not be understood.".into(),
            Self::Handler(_) | Self::Json(_) => "An unexpected error occurred.".into(),
        }
    }
}
