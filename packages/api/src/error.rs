//! Errors returned by the remote API layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 401: the session token was refused.
    #[error("authorization denied")]
    Unauthorized { message: Option<String> },

    /// 404: for searches this means "nothing matched".
    #[error("not found")]
    NotFound { message: Option<String> },

    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// Login answered successfully but without a usable token.
    #[error("response carried no session token")]
    MissingToken,

    #[error("invalid form: {0}")]
    InvalidForm(String),
}

impl ApiError {
    /// Classify a non-success response, keeping the body's `message` if it has one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message")?.as_str().map(str::to_string))
            .filter(|m| !m.trim().is_empty());
        match status {
            401 => ApiError::Unauthorized { message },
            404 => ApiError::NotFound { message },
            _ => ApiError::Status { status, message },
        }
    }

    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::NotFound { message }
            | ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user: the server's message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}
