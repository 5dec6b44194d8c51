//! User Interface module
//!
//! ratatui-based rendering: a header, the movement table, and a status bar.
//! Modals are rendered on top by the application, which owns them.

pub mod components;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::debug;

use crate::{app::state::AppState, config::UIConfig, error::AppResult};
use components::{MovementTable, StatusBar};
use theme::Theme;

/// Main UI renderer
pub struct UI {
    theme: Theme,
    movement_table: MovementTable,
    status_bar: StatusBar,
}

impl UI {
    /// Create a new UI instance
    pub fn new(config: &UIConfig) -> AppResult<Self> {
        debug!("Initializing UI with theme: {}", config.theme);

        Ok(Self {
            theme: Theme::load(&config.theme),
            movement_table: MovementTable::new(),
            status_bar: StatusBar::new(),
        })
    }

    /// The active theme, shared with the modals
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Render the base view (everything below the modal layer)
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Movement table
                Constraint::Length(2), // Status bar
            ])
            .split(frame.size());

        let header = Paragraph::new(" GUDANG - Pencatatan Stok").block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.border_style()),
        );
        frame.render_widget(header, chunks[0]);

        self.movement_table
            .render(frame, chunks[1], state, &self.theme);
        self.status_bar.render(frame, chunks[2], state, &self.theme);
    }
}
