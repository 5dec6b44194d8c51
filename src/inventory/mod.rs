//! Inventory domain module
//!
//! Models for the stock backend's wire contract, the entry form and its
//! validation rules, and the HTTP client the modals submit through.

pub mod client;
pub mod form;
pub mod models;
pub mod timezone;
pub mod validation;

pub use client::{HttpInventoryClient, InventoryApi};
pub use form::{EntryForm, SelectionField};
pub use models::{MovementDirection, MovementRecord, ReferenceEntity, StockReceipt, Supplier};
pub use validation::ValidationError;
