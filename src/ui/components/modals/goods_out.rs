//! Goods-out modal (tambah barang keluar)
//!
//! Records an issued movement: the item comes from the pick list of
//! previously received stock, so the hidden item id is always resolved from
//! the current list. Submits symmetrically to the goods-in modal.

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
        models::{MovementDirection, ReferenceEntity, StockReceipt},
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
    Item,
    Quantity,
    ConfirmedQuantity,
    Recipient,
    Note,
}

const FIELD_ORDER: [Field; 5] = [
    Field::Item,
    Field::Quantity,
    Field::ConfirmedQuantity,
    Field::Recipient,
    Field::Note,
];

impl Field {
    fn label(&self) -> &'static str {
        match self {
            Field::Item => "Nama Barang",
            Field::Quantity => "Jumlah",
            Field::ConfirmedQuantity => "Konfirmasi Jumlah",
            Field::Recipient => "Penerima",
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

/// The goods-out modal instance
pub struct GoodsOutModal {
    generation: u64,
    lifecycle: ModalLifecycle,
    form: EntryForm,
    items: SelectionField,
    focus: Field,
    submission: SubmissionState,
    notice: Option<Notice>,
}

impl GoodsOutModal {
    /// Mount a new instance; the receipts fetch is spawned by the parent
    pub fn new(generation: u64) -> Self {
        Self::with_lifecycle(generation, ModalLifecycle::new(Instant::now()))
    }

    /// Construct with an explicit lifecycle (tests inject short delays)
    pub fn with_lifecycle(generation: u64, lifecycle: ModalLifecycle) -> Self {
        Self {
            generation,
            lifecycle,
            form: EntryForm::goods_out(),
            items: SelectionField::new(),
            focus: Field::Item,
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
        &self.items
    }

    pub fn selection_mut(&mut self) -> &mut SelectionField {
        &mut self.items
    }

    /// Apply the prior-receipts fetch result
    ///
    /// A result from a previous mount (generation mismatch) or one arriving
    /// after the close sequence began is a silent no-op.
    pub fn apply_receipts(&mut self, generation: u64, result: Result<Vec<StockReceipt>, String>) {
        if generation != self.generation || !self.lifecycle.accepts_updates() {
            debug!(generation, "discarding stale receipts response");
            return;
        }
        match result {
            Ok(list) => {
                let entries: Vec<ReferenceEntity> =
                    list.iter().map(ReferenceEntity::from).collect();
                debug!(count = entries.len(), "item list loaded");
                self.items.set_entries(entries);
            }
            Err(message) => {
                warn!(message, "failed to load item list");
            }
        }
    }

    /// Apply the create-request result
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

        if self.form.recipient.is_empty() {
            self.notice = Some(Notice::error("Lengkapi semua field yang wajib diisi"));
            return ModalAction::None;
        }

        let check = SubmissionCheck {
            selected_id: self.items.selected_id(),
            entries: self.items.entries(),
            quantity: self.form.quantity,
            confirmed_quantity: self.form.confirmed_quantity,
            reference_subject: "Barang",
        };
        if let Err(rejection) = validation::validate_submission(&check) {
            self.notice = Some(Notice::error(rejection.to_string()));
            return ModalAction::None;
        }

        // The reference rule guarantees a resolved selection here.
        let nama_barang = self.items.selected_name().unwrap_or_default().to_string();
        let record = self.form.build_record(&nama_barang, None);
        self.submission = SubmissionState::Submitting;
        self.notice = None;
        ModalAction::Submit(MovementDraft {
            direction: MovementDirection::Out,
            record,
        })
    }

    fn insert_char(&mut self, c: char) {
        match self.focus {
            Field::Item => {}
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
        }
    }

    fn delete_char(&mut self) {
        match self.focus {
            Field::Item => {}
            Field::Quantity => self.form.pop_quantity_digit(),
            Field::ConfirmedQuantity => self.form.pop_confirmed_digit(),
            Field::Recipient => {
                self.form.recipient.pop();
            }
            Field::Note => {
                self.form.note.pop();
            }
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

    fn item_value(&self) -> (String, bool) {
        if let Some(name) = self.items.selected_name() {
            (name.to_string(), false)
        } else if self.items.is_empty() {
            ("Data belum tersedia".to_string(), true)
        } else {
            ("Pilih Barang".to_string(), true)
        }
    }
}

impl Modal for GoodsOutModal {
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if self.lifecycle.phase() == ModalPhase::Closed {
            return;
        }

        let modal_area = centered_rect(50, 60, area);
        frame.render_widget(Clear, modal_area);

        let border_style = if self.lifecycle.is_visible() {
            theme.border_style()
        } else {
            theme.muted_style()
        };

        let block = Block::default()
            .title(" TAMBAH BARANG KELUAR ")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Fields
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
        let (item_value, item_muted) = self.item_value();

        let item_label_style = if self.focus == Field::Item {
            theme.highlight_style()
        } else {
            theme.text_style()
        };
        let item_value_style = if item_muted {
            theme.muted_style()
        } else {
            theme.text_style()
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(format!(" {:<22}", Field::Item.label()), item_label_style),
                Span::styled(item_value, item_value_style),
            ]),
            self.field_line(Field::Quantity, quantity, theme),
            self.field_line(Field::ConfirmedQuantity, confirmed, theme),
            self.field_line(Field::Recipient, self.form.recipient.clone(), theme),
            self.field_line(Field::Note, self.form.note.clone(), theme),
        ];

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
            KeyCode::Up if self.focus == Field::Item => self.items.cycle_prev(),
            KeyCode::Down if self.focus == Field::Item => self.items.cycle_next(),
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
