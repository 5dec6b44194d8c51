//! Submission validation rules
//!
//! An ordered list of named rules, evaluated top-to-bottom with
//! short-circuit. Each rule yields pass or a tagged rejection; the tag maps
//! to the user-facing (Indonesian) message the modal displays. All rules run
//! synchronously before any network call.

use thiserror::Error;

use super::models::ReferenceEntity;

/// User-facing validation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The selection does not resolve against the loaded reference list
    #[error("{subject} tidak ditemukan")]
    ReferenceNotFound { subject: &'static str },

    /// Quantity and confirmation quantity disagree (or one is unset)
    #[error("Konfirmasi Jumlah tidak sesuai")]
    ConfirmationMismatch,

    /// Item name must begin with an uppercase letter
    #[error("Gunakan huruf kapital pada huruf depan")]
    CapitalizationRequired,
}

/// Everything the submission rules inspect, borrowed from the modal
#[derive(Debug)]
pub struct SubmissionCheck<'a> {
    /// Identifier derived from the selection field, if any
    pub selected_id: Option<&'a str>,
    /// The currently loaded reference list
    pub entries: &'a [ReferenceEntity],
    pub quantity: Option<u32>,
    pub confirmed_quantity: Option<u32>,
    /// What the reference list holds ("Supplier" or "Barang"), for messages
    pub reference_subject: &'static str,
}

type Rule = (
    &'static str,
    fn(&SubmissionCheck<'_>) -> Result<(), ValidationError>,
);

/// Submission rules in evaluation order; the first failure wins
pub const SUBMISSION_RULES: &[Rule] = &[
    ("reference-resolves", reference_resolves),
    ("quantities-confirmed", quantities_confirmed),
];

/// Run all submission rules, stopping at the first failure
pub fn validate_submission(check: &SubmissionCheck<'_>) -> Result<(), ValidationError> {
    for (name, rule) in SUBMISSION_RULES {
        if let Err(rejection) = rule(check) {
            tracing::debug!(rule = name, %rejection, "submission rejected");
            return Err(rejection);
        }
    }
    Ok(())
}

/// The derived identifier must match an entry in the current list
fn reference_resolves(check: &SubmissionCheck<'_>) -> Result<(), ValidationError> {
    let resolved = check
        .selected_id
        .map(|id| check.entries.iter().any(|entry| entry.id == id))
        .unwrap_or(false);

    if resolved {
        Ok(())
    } else {
        Err(ValidationError::ReferenceNotFound {
            subject: check.reference_subject,
        })
    }
}

/// Both quantities must be entered and agree
///
/// The double entry exists to catch operator typos; an unset quantity counts
/// as a mismatch so a blank field can never slip through as zero.
fn quantities_confirmed(check: &SubmissionCheck<'_>) -> Result<(), ValidationError> {
    match (check.quantity, check.confirmed_quantity) {
        (Some(quantity), Some(confirmed)) if quantity == confirmed => Ok(()),
        _ => Err(ValidationError::ConfirmationMismatch),
    }
}

/// Keystroke guard for the goods-in item name field
///
/// Rejects any edit whose resulting first character is lowercase; the caller
/// leaves the stored value unchanged and raises an alert. Non-letter first
/// characters pass.
pub fn guard_item_name(value: &str) -> Result<(), ValidationError> {
    match value.chars().next() {
        Some(first) if first.is_lowercase() => Err(ValidationError::CapitalizationRequired),
        _ => Ok(()),
    }
}
