//! Gudang TUI - terminal client for warehouse stock movement tracking
//!
//! Talks to a small stock backend and records inventory movements through
//! two modal forms: goods in (barang masuk) and goods out (barang keluar).
//!
//! # Architecture
//!
//! - **Presentation layer**: TUI components built with ratatui; modals own
//!   their lifecycle phase and form state.
//! - **Application layer**: main loop, state, and the channel-based event
//!   system that background fetches and submissions report back through.
//! - **Domain layer**: inventory models, the form/validation rules, and the
//!   HTTP backend client.

pub mod app;
pub mod config;
pub mod error;
pub mod inventory;
pub mod ui;

pub use app::App;
pub use error::{AppError, AppResult};

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system with structured logging
///
/// Log levels are configurable via the RUST_LOG environment variable.
pub fn initialize_logging() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gudang_tui=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
