//! Entry form state shared by the movement modals
//!
//! Numeric fields are `Option` so an untouched field is never mistaken for a
//! valid entry of zero; digit editing keeps values at minimum 1 or unset.

use tracing::debug;

use super::models::{MovementRecord, ReferenceEntity};
use super::timezone;
use super::validation::{self, ValidationError};

/// Largest quantity the digit editor will grow to
const MAX_QUANTITY: u32 = 1_000_000;

/// Single-choice control bound to the loaded reference list
///
/// Selecting a display name resolves and stores the entity's internal
/// identifier; the identifier is never entered directly, so an id that does
/// not come from the current list cannot be submitted.
#[derive(Debug, Clone, Default)]
pub struct SelectionField {
    entries: Vec<ReferenceEntity>,
    selected_name: Option<String>,
    selected_id: Option<String>,
    cursor: usize,
}

impl SelectionField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the reference list wholesale
    ///
    /// Re-resolves any current selection against the new list so the derived
    /// id never outlives the entries it came from.
    pub fn set_entries(&mut self, entries: Vec<ReferenceEntity>) {
        self.entries = entries;
        self.cursor = 0;
        if let Some(name) = self.selected_name.clone() {
            self.select_name(&name);
        }
    }

    /// Select by display name, resolving the id from the current list
    ///
    /// A name with no matching entry clears the stored id.
    pub fn select_name(&mut self, name: &str) {
        self.selected_id = self
            .entries
            .iter()
            .find(|entry| entry.display_name == name)
            .map(|entry| entry.id.clone());
        self.selected_name = Some(name.to_string());
        debug!(name, id = ?self.selected_id, "selection resolved");
    }

    /// Move the selection to the next entry
    pub fn cycle_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.selected_name.is_some() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
        self.select_cursor();
    }

    /// Move the selection to the previous entry
    pub fn cycle_prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        if self.selected_name.is_some() {
            self.cursor = self.cursor.checked_sub(1).unwrap_or(self.entries.len() - 1);
        }
        self.select_cursor();
    }

    fn select_cursor(&mut self) {
        let name = self.entries[self.cursor].display_name.clone();
        self.select_name(&name);
    }

    pub fn entries(&self) -> &[ReferenceEntity] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected_name.as_deref()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }
}

/// User-entered field values for one movement
#[derive(Debug, Clone)]
pub struct EntryForm {
    pub item_name: String,
    pub quantity: Option<u32>,
    pub confirmed_quantity: Option<u32>,
    pub recipient: String,
    pub note: String,
    guard_capitalization: bool,
}

impl EntryForm {
    /// Form for the goods-in modal: the typed item name is guarded
    pub fn goods_in() -> Self {
        Self::new(true)
    }

    /// Form for the goods-out modal: the item comes from the pick list
    pub fn goods_out() -> Self {
        Self::new(false)
    }

    fn new(guard_capitalization: bool) -> Self {
        Self {
            item_name: String::new(),
            quantity: None,
            confirmed_quantity: None,
            recipient: String::new(),
            note: String::new(),
            guard_capitalization,
        }
    }

    /// Apply an edit to the item name
    ///
    /// For the goods-in variant every edit is guarded: a candidate whose
    /// first character is lowercase is rejected wholesale and the stored
    /// value stays unchanged. The caller raises the alert.
    pub fn set_item_name(&mut self, candidate: &str) -> Result<(), ValidationError> {
        if self.guard_capitalization {
            validation::guard_item_name(candidate)?;
        }
        self.item_name = candidate.to_string();
        Ok(())
    }

    /// Append a digit to the quantity field
    pub fn push_quantity_digit(&mut self, digit: u32) {
        Self::push_digit(&mut self.quantity, digit);
    }

    /// Remove the last digit of the quantity field
    pub fn pop_quantity_digit(&mut self) {
        Self::pop_digit(&mut self.quantity);
    }

    /// Append a digit to the confirmation quantity field
    pub fn push_confirmed_digit(&mut self, digit: u32) {
        Self::push_digit(&mut self.confirmed_quantity, digit);
    }

    /// Remove the last digit of the confirmation quantity field
    pub fn pop_confirmed_digit(&mut self) {
        Self::pop_digit(&mut self.confirmed_quantity);
    }

    // Digit editing enforces the minimum-1 input constraint: a value that
    // would land at zero is stored as unset instead.
    fn push_digit(field: &mut Option<u32>, digit: u32) {
        debug_assert!(digit < 10);
        let current = field.unwrap_or(0);
        let grown = current.saturating_mul(10).saturating_add(digit);
        if grown >= 1 && grown <= MAX_QUANTITY {
            *field = Some(grown);
        }
    }

    fn pop_digit(field: &mut Option<u32>) {
        let shrunk = field.unwrap_or(0) / 10;
        *field = if shrunk >= 1 { Some(shrunk) } else { None };
    }

    /// Build the outbound record
    ///
    /// Called only after validation passes; the timestamp is generated here,
    /// at submission time, in Asia/Jakarta wall clock.
    pub fn build_record(&self, nama_barang: &str, nama_supplier: Option<&str>) -> MovementRecord {
        MovementRecord {
            nama_barang: nama_barang.to_string(),
            jumlah: self.quantity.unwrap_or(0),
            konfir_jumlah: self.confirmed_quantity.unwrap_or(0),
            penerima: self.recipient.clone(),
            nama_supplier: nama_supplier.map(str::to_string),
            tanggal: timezone::server_timestamp(),
            keterangan: self.note.clone(),
        }
    }
}
