//! Goods-in modal (tambah barang masuk)
//!
//! Records a received movement: typed item name (capitalization-guarded),
//! double-entry quantity, recipient, supplier pick list, optional note.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use tracing::{debug, warn};

use crate::{
    error::AppResult,
    inventory::{
        form::{EntryForm, SelectionField},
        models::{MovementDirection, ReferenceEntity, Supplier},
        validation::{self, SubmissionCheck},
    },
    ui::theme::Theme,
};

use super::{
    centered_rect,
    lifecycle::{ModalLifecycle, ModalPhase},
    Modal, ModalAction, MovementDraft, Notice, SubmissionState,
};

/// Focusable fields, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    ItemName,
    Quantity,
    ConfirmedQuantity,
    Recipient,
    Supplier,
    Note,
}

const FIELD_ORDER: [Field; 6] = [
    Field::ItemName,
    Field::Quantity,
    Field::ConfirmedQuantity,
    Field::Recipient,
    Field::Supplier,
    Field::Note,
];

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::ItemName => "Nama Barang",
            Field::Quantity => "Jumlah",
            Field::ConfirmedQuantity => "Konfirmasi Jumlah",
            Field::Recipient => "Penerima",
            Field::Supplier => "Supplier",
            Field::Note => "Keterangan (opsional)",
        }
    }

    fn next(&self) -> Field {
        let index = FIELD_ORDER.iter().position(|f| f == self).unwrap_or(0);
        FIELD_ORDER[(index + 1) % FIELD_ORDER.len()]
    }

    fn prev(&self) -> Field {
        let index = FIELD_ORDER.iter().position(|f| f == self).unwrap_or(0);
        FIELD_ORDER[index.checked_sub(1).unwrap_or(FIELD_ORDER.len() - 1)]
    }
}

/// The goods-in modal instance
pub struct GoodsInModal {
    generation: u64,
    lifecycle: ModalLifecycle,
    form: EntryForm,
    suppliers: SelectionField,
    focus: Field,
    submission: SubmissionState,
    notice: Option<Notice>,
}

impl GoodsInModal {
    /// Mount a new instance; the supplier fetch is spawned by the parent
    pub fn new(generation: u64) -> Self {
        Self::with_lifecycle(generation, ModalLifecycle::new(Instant::now()))
    }

    /// Construct with an explicit lifecycle (tests inject short delays)
    pub fn with_lifecycle(generation: u64, lifecycle: ModalLifecycle) -> Self {
        Self {
            generation,
            lifecycle,
            form: EntryForm::goods_in(),
            suppliers: SelectionField::new(),
            focus: Field::ItemName,
            submission: SubmissionState::Idle,
            notice: None,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> ModalPhase {
        self.lifecycle.phase()
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn form(&self) -> &EntryForm {
        &self.form
    }

    pub fn selection(&self) -> &SelectionField {
        &self.suppliers
    }

    pub fn selection_mut(&mut self) -> &mut SelectionField {
        &mut self.suppliers
    }

    /// Apply the supplier fetch result
    ///
    /// A result from a previous mount (generation mismatch) or one arriving
    /// after the close sequence began is a silent no-op.
    pub fn apply_suppliers(&mut self, generation: u64, result: Result<Vec<Supplier>, String>) {
        if generation != self.generation || !self.lifecycle.accepts_updates() {
            debug!(generation, "discarding stale supplier response");
            return;
        }
        match result {
            Ok(list) => {
                let entries: Vec<ReferenceEntity> =
                    list.iter().map(ReferenceEntity::from).collect();
                debug!(count = entries.len(), "supplier list loaded");
                self.suppliers.set_entries(entries);
            }
            Err(message) => {
                // Degraded state: the pick list stays empty and renders the
                // disabled placeholder.
                warn!(message, "failed to load supplier list");
            }
        }
    }

    /// Apply the create-request result
    ///
    /// Success starts the close sequence; failure leaves the modal open and
    /// fully editable for a retry.
    pub fn apply_submission_result(&mut self, result: Result<(), String>) {
        if self.submission != SubmissionState::Submitting || !self.lifecycle.accepts_updates() {
            return;
        }
        match result {
            Ok(()) => {
                self.submission = SubmissionState::Succeeded;
                self.notice = Some(Notice::success("Data berhasil ditambah"));
                self.lifecycle.request_close(Instant::now());
            }
            Err(message) => {
                self.submission = SubmissionState::Failed;
                self.notice = Some(Notice::error(message));
            }
        }
    }

    /// Validate and, on pass, hand the built record to the parent
    fn submit(&mut self) -> ModalAction {
        if !self.submission.can_submit() {
            return ModalAction::None;
        }

        if self.form.item_name.is_empty() || self.form.recipient.is_empty() {
            self.notice = Some(Notice::error("Lengkapi semua field yang wajib diisi"));
            return ModalAction::None;
        }

        let check = SubmissionCheck {
            selected_id: self.suppliers.selected_id(),
            entries: self.suppliers.entries(),
            quantity: self.form.quantity,
            confirmed_quantity: self.form.confirmed_quantity,
            reference_subject: "Supplier",
        };
        if let Err(rejection) = validation::validate_submission(&check) {
            self.notice = Some(Notice::error(rejection.to_string()));
            return ModalAction::None;
        }

        let record = self
            .form
            .build_record(&self.form.item_name, self.suppliers.selected_name());
        self.submission = SubmissionState::Submitting;
        self.notice = None;
        ModalAction::Submit(MovementDraft {
            direction: MovementDirection::In,
            record,
        })
    }

    fn insert_char(&mut self, c: char) {
        match self.focus {
            Field::ItemName => {
                let mut candidate = self.form.item_name.clone();
                candidate.push(c);
                if let Err(alert) = self.form.set_item_name(&candidate) {
                    self.notice = Some(Notice::error(alert.to_string()));
                }
            }
            Field::Quantity => {
                if let Some(digit) = c.to_digit(10) {
                    self.form.push_quantity_digit(digit);
                }
            }
            Field::ConfirmedQuantity => {
                if let Some(digit) = c.to_digit(10) {
                    self.form.push_confirmed_digit(digit);
                }
            }
            Field::Recipient => self.form.recipient.push(c),
            Field::Note => self.form.note.push(c),
            Field::Supplier => {}
        }
    }

    fn delete_char(&mut self) {
        match self.focus {
            Field::ItemName => {
                let mut candidate = self.form.item_name.clone();
                candidate.pop();
                if let Err(alert) = self.form.set_item_name(&candidate) {
                    self.notice = Some(Notice::error(alert.to_string()));
                }
            }
            Field::Quantity => self.form.pop_quantity_digit(),
            Field::ConfirmedQuantity => self.form.pop_confirmed_digit(),
            Field::Recipient => {
                self.form.recipient.pop();
            }
            Field::Note => {
                self.form.note.pop();
            }
            Field::Supplier => {}
        }
    }

    fn field_line<'a>(&self, field: Field, value: String, theme: &Theme) -> Line<'a> {
        let label_style = if self.focus == field {
            theme.highlight_style()
        } else {
            theme.text_style()
        };
        Line::from(vec![
            Span::styled(format!(" {:<22}", field.label()), label_style),
            Span::styled(value, theme.text_style()),
        ])
    }

    // Returns the pick-list display text and whether it renders muted
    // (placeholder or the disabled empty-list entry).
    fn supplier_value(&self) -> (String, bool) {
        if let Some(name) = self.suppliers.selected_name() {
            (name.to_string(), false)
        } else if self.suppliers.is_empty() {
            ("Data belum tersedia".to_string(), true)
        } else {
            ("Pilih Supplier".to_string(), true)
        }
    }
}

impl Modal for GoodsInModal {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.lifecycle.phase() == ModalPhase::Closed {
            return;
        }

        let modal_area = centered_rect(60, 70, area);
        frame.render_widget(Clear, modal_area);

        // Entering/Closing render dimmed, the TUI stand-in for opacity.
        let border_style = if self.lifecycle.is_visible() {
            theme.border_style()
        } else {
            theme.muted_style()
        };

        let block = Block::default()
            .title(" TAMBAH BARANG ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Fields
                Constraint::Length(1), // Notice
                Constraint::Length(1), // Help
            ])
            .split(inner);

        let quantity = self.form.quantity.map(|v| v.to_string()).unwrap_or_default();
        let confirmed = self
            .form
            .confirmed_quantity
            .map(|v| v.to_string())
            .unwrap_or_default();
        let (supplier_value, supplier_muted) = self.supplier_value();

        let mut lines = vec![
            self.field_line(Field::ItemName, self.form.item_name.clone(), theme),
            self.field_line(Field::Quantity, quantity, theme),
            self.field_line(Field::ConfirmedQuantity, confirmed, theme),
            self.field_line(Field::Recipient, self.form.recipient.clone(), theme),
        ];
        let supplier_label_style = if self.focus == Field::Supplier {
            theme.highlight_style()
        } else {
            theme.text_style()
        };
        let supplier_value_style = if supplier_muted {
            theme.muted_style()
        } else {
            theme.text_style()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<22}", Field::Supplier.label()), supplier_label_style),
            Span::styled(supplier_value, supplier_value_style),
        ]));
        lines.push(self.field_line(Field::Note, self.form.note.clone(), theme));

        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let notice_line = if self.submission == SubmissionState::Submitting {
            Line::from(Span::styled(" Menyimpan...", theme.info_style()))
        } else if let Some(notice) = &self.notice {
            let style = match notice.kind {
                super::NoticeKind::Success => theme.success_style(),
                super::NoticeKind::Error => theme.error_style(),
            };
            Line::from(Span::styled(format!(" {}", notice.message), style))
        } else {
            Line::default()
        };
        frame.render_widget(Paragraph::new(notice_line), chunks[1]);

        let help = Paragraph::new("Enter: Simpan | Esc: Batal | Tab: Pindah field | ↑/↓: Pilih")
            .style(theme.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(help, chunks[2]);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<ModalAction> {
        if !self.lifecycle.accepts_updates() {
            return Ok(ModalAction::None);
        }

        match key.code {
            KeyCode::Esc => self.request_close(),
            KeyCode::Enter => return Ok(self.submit()),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Up if self.focus == Field::Supplier => self.suppliers.cycle_prev(),
            KeyCode::Down if self.focus == Field::Supplier => self.suppliers.cycle_next(),
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char(),
            _ => {}
        }

        Ok(ModalAction::None)
    }

    fn tick(&mut self, now: Instant) -> bool {
        self.lifecycle.tick(now)
    }

    fn request_close(&mut self) {
        self.lifecycle.request_close(Instant::now());
    }
}
