//! Status bar component
//!
//! Shows the latest notification and the key hints.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::{
    app::state::{AppState, Severity},
    ui::theme::Theme,
};

const KEY_HINTS: &str = " i: Barang Masuk | o: Barang Keluar | r: Muat Ulang | q: Keluar";

/// Bottom status bar
pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let notification_line = match state.latest_notification() {
            Some(notification) => {
                let style = match notification.severity {
                    Severity::Info => theme.info_style(),
                    Severity::Success => theme.success_style(),
                    Severity::Error => theme.error_style(),
                };
                Line::from(Span::styled(format!(" {}", notification.message), style))
            }
            None => Line::default(),
        };

        frame.render_widget(Paragraph::new(notification_line), chunks[0]);
        frame.render_widget(
            Paragraph::new(KEY_HINTS).style(theme.muted_style()),
            chunks[1],
        );
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}
