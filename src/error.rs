//! Error handling for the NGO CRM client

use std::fmt;
use thiserror::Error;

/// Unified error type for the NGO CRM client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// The backend answered with a failed envelope or a non-2xx status.
    ///
    /// `message` is only set when the envelope carried one.
    #[error(
        "API error ({}): {}",
        status.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
        message.as_deref().unwrap_or("no message")
    )]
    Api {
        status: Option<u16>,
        message: Option<String>,
    },

    /// A form failed client-side validation; no request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or malformed configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new API error carrying the backend's message
    pub fn api<T: fmt::Display>(status: Option<u16>, msg: T) -> Self {
        Error::Api {
            status,
            message: Some(msg.to_string()),
        }
    }

    /// An API failure the backend did not explain
    pub fn api_status(status: Option<u16>) -> Self {
        Error::Api {
            status,
            message: None,
        }
    }

    /// Turn an envelope's optional message into an API error
    pub(crate) fn from_envelope(status: Option<u16>, message: Option<String>) -> Self {
        match message {
            Some(message) if !message.trim().is_empty() => Error::api(status, message),
            _ => Error::api_status(status),
        }
    }

    /// Create a new validation error
    pub fn validation<T: fmt::Display>(msg: T) -> Self {
        Error::Validation(msg.to_string())
    }

    /// Create a new configuration error
    pub fn config<T: fmt::Display>(msg: T) -> Self {
        Error::Config(msg.to_string())
    }

    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }

    /// The text a view shows for this error.
    ///
    /// Backend and validation messages are shown verbatim. Anything else,
    /// including a failure the backend gave no message for, falls back to
    /// the page's generic string.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Error::Validation(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether this error was raised before any request went out
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_text() {
        let err = Error::api(Some(400), "Email already registered");
        assert_eq!(err.user_message("Something went wrong"), "Email already registered");
    }

    #[test]
    fn user_message_falls_back_for_transport_errors() {
        let err = Error::general("socket closed");
        assert_eq!(err.user_message("Failed to fetch events"), "Failed to fetch events");

        let silent = Error::api_status(Some(502));
        assert_eq!(silent.user_message("Failed to fetch events"), "Failed to fetch events");
    }

    #[test]
    fn blank_envelope_message_counts_as_missing() {
        let err = Error::from_envelope(Some(500), Some("  ".to_string()));
        assert!(matches!(err, Error::Api { message: None, .. }));
        assert_eq!(err.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn api_error_display_includes_status() {
        let err = Error::api(Some(404), "not found");
        assert_eq!(err.to_string(), "API error (404): not found");
        let err = Error::api(None, "rejected");
        assert_eq!(err.to_string(), "API error (-): rejected");
        let err = Error::api_status(Some(502));
        assert_eq!(err.to_string(), "API error (502): no message");
    }
}
