//! Movement table component
//!
//! The parent view: recent goods-in records. Kept deliberately thin; the
//! modals are the interesting part of this application.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::{app::state::AppState, ui::theme::Theme};

/// Table of recent goods-in records
pub struct MovementTable;

impl MovementTable {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let block = Block::default()
            .title(" BARANG MASUK ")
            .borders(Borders::ALL)
            .border_style(theme.border_style());

        if state.receipts.is_empty() {
            let message = if state.refreshing {
                "Memuat data..."
            } else {
                "Data belum tersedia"
            };
            let placeholder = Paragraph::new(message)
                .block(block)
                .style(theme.muted_style())
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, area);
            return;
        }

        let header = Row::new(vec![
            Cell::from("ID"),
            Cell::from("Nama Barang"),
            Cell::from("Jumlah"),
        ])
        .style(theme.highlight_style());

        let rows: Vec<Row> = state
            .receipts
            .iter()
            .map(|receipt| {
                Row::new(vec![
                    Cell::from(receipt.idbarang.clone()),
                    Cell::from(receipt.nama_barang.clone()),
                    Cell::from(receipt.jumlah.to_string()),
                ])
                .style(theme.text_style())
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(12),
                Constraint::Min(20),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(block);

        frame.render_widget(table, area);
    }
}

impl Default for MovementTable {
    fn default() -> Self {
        Self::new()
    }
}
