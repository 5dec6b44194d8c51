//! Error handling for the warehouse TUI
//!
//! Uses thiserror for error definitions and anyhow for propagation at the
//! binary boundary. User-facing validation failures live in a separate enum
//! (`inventory::validation::ValidationError`) so the modals can surface them
//! without touching `AppError`.

use thiserror::Error;

/// Application result type alias
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Main application error enum
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors when talking to the stock backend
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend responded with a non-success status
    #[error("Backend error: {endpoint} returned status {status}")]
    Backend { endpoint: String, status: u16 },

    /// Application state errors
    #[error("State error: {message}")]
    State { message: String },

    /// Generic application errors
    #[error("Application error: {message}")]
    Application { message: String },
}

impl AppError {
    /// Create a new Backend error
    pub fn backend<S: Into<String>>(endpoint: S, status: u16) -> Self {
        Self::Backend {
            endpoint: endpoint.into(),
            status,
        }
    }

    /// Create a new State error
    pub fn state<S: Into<String>>(message: S) -> Self {
        Self::State {
            message: message.into(),
        }
    }

    /// Create a new Application error
    pub fn application<S: Into<String>>(message: S) -> Self {
        Self::Application {
            message: message.into(),
        }
    }
}
