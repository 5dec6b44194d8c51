//! Application state management
//!
//! Centralized state for the parent view: the receipts table, the
//! notification feed, and the quit flag. Modal instances own their form and
//! lifecycle state themselves; the parent only decides when they mount and
//! unmount.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::inventory::models::StockReceipt;

/// Central application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application lifecycle state
    pub lifecycle: LifecyclePhase,

    /// Recent goods-in records shown in the main table
    pub receipts: Vec<StockReceipt>,

    /// When the table data was last replaced
    pub last_refresh: DateTime<Utc>,

    /// Whether a table refetch is in flight
    pub refreshing: bool,

    /// Notification feed (the status bar shows the latest entry)
    pub notifications: Vec<Notification>,
}

impl AppState {
    /// Create a new application state
    pub fn new() -> Self {
        Self {
            lifecycle: LifecyclePhase::Running,
            receipts: Vec::new(),
            last_refresh: Utc::now(),
            refreshing: false,
            notifications: Vec::new(),
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        matches!(self.lifecycle, LifecyclePhase::Quitting)
    }

    /// Set the quit flag
    pub fn set_should_quit(&mut self) {
        self.lifecycle = LifecyclePhase::Quitting;
    }

    /// Replace the table data wholesale
    pub fn update_receipts(&mut self, receipts: Vec<StockReceipt>) {
        self.receipts = receipts;
        self.last_refresh = Utc::now();
        self.refreshing = false;
    }

    /// Drop the table data ahead of a full refetch
    ///
    /// The success side effect of a submission is a blunt cache
    /// invalidation: everything is refetched from scratch.
    pub fn begin_refresh(&mut self) {
        self.receipts.clear();
        self.refreshing = true;
    }

    /// Add an error to the notification feed
    pub fn add_error<S: Into<String>>(&mut self, message: S) {
        self.push_notification(Severity::Error, message);
    }

    /// Add an informational message to the notification feed
    pub fn add_info<S: Into<String>>(&mut self, message: S) {
        self.push_notification(Severity::Info, message);
    }

    /// Add a success message to the notification feed
    pub fn add_success<S: Into<String>>(&mut self, message: S) {
        self.push_notification(Severity::Success, message);
    }

    fn push_notification<S: Into<String>>(&mut self, severity: Severity, message: S) {
        self.notifications.push(Notification {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
            timestamp: Utc::now(),
        });
    }

    /// The most recent notification, if any
    pub fn latest_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Application lifecycle phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Running,
    Quitting,
}

/// A user-facing notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}
