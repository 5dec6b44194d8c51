//! Modal components for recording inventory movements
//!
//! Each modal is self-contained: it owns its form state, its reference list,
//! and its lifecycle phase. The parent only mounts it, ticks it, routes
//! events in, and unmounts it when the lifecycle reports Closed.

pub mod goods_in;
pub mod goods_out;
pub mod lifecycle;

pub use goods_in::GoodsInModal;
pub use goods_out::GoodsOutModal;
pub use lifecycle::{ModalLifecycle, ModalPhase};

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::{
    error::AppResult,
    inventory::models::{MovementDirection, MovementRecord},
    ui::theme::Theme,
};

/// Trait for the movement modals
pub trait Modal {
    /// Render the modal over the given area
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Handle a key event, possibly producing a validated submission
    fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<ModalAction>;

    /// Advance time-driven phases; true means the parent should unmount
    fn tick(&mut self, now: Instant) -> bool;

    /// Begin the close sequence
    fn request_close(&mut self);
}

/// Result from modal interaction
#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    /// No action taken
    None,
    /// Validation passed; the parent should issue this create request
    Submit(MovementDraft),
}

/// A validated, fully built record ready to POST
#[derive(Debug, Clone, PartialEq)]
pub struct MovementDraft {
    pub direction: MovementDirection,
    pub record: MovementRecord,
}

/// Submission state of one modal, per attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Whether a new submit attempt may start
    ///
    /// Submitting blocks the double-submit race; Succeeded blocks a resubmit
    /// while the close sequence plays.
    pub fn can_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle | SubmissionState::Failed)
    }
}

/// In-modal notice standing in for the page-level alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    pub fn success<S: Into<String>>(message: S) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error<S: Into<String>>(message: S) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Calculate a centered rectangle for a modal popup
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
