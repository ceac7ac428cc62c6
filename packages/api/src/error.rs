//! Client error taxonomy.
//!
//! Every failed API call resolves to one of three [`ErrorKind`]s, which is all a
//! page needs to decide what to show:
//!
//! | Kind | Cause | What the user sees |
//! |------|-------|--------------------|
//! | `Network` | No response reached the client. | "check your connection" |
//! | `Server` | A failure status other than 401, or an undecodable body. | "action failed, retry" |
//! | `Auth` | 401: missing, invalid or expired credential. | Redirect to login; the session is already cleared. |

use thiserror::Error;

/// Coarse classification used by views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Server,
    Auth,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("not authenticated: {message}")]
    Auth { message: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Network(_) => ErrorKind::Network,
            ApiError::Server { .. } | ApiError::Decode(_) => ErrorKind::Server,
            ApiError::Auth { .. } => ErrorKind::Auth,
        }
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Auth { .. } => Some(401),
            ApiError::Network(_) | ApiError::Decode(_) => None,
        }
    }

    /// Backend-provided message, when there is one.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(msg) | ApiError::Decode(msg) => msg,
            ApiError::Server { message, .. } | ApiError::Auth { message } => message,
        }
    }

    /// Short text for the page-level notice.
    pub fn user_message(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Network => "Could not reach the server. Please check your connection.",
            ErrorKind::Server => "The action failed. Please try again.",
            ErrorKind::Auth => "Your session has expired. Please log in again.",
        }
    }
}
