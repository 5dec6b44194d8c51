//! Inventory data models
//!
//! Field names mirror the stock backend's JSON contract exactly; the backend
//! is Indonesian-language and so is its schema.

use serde::{Deserialize, Serialize};

/// A supplier record from `GET /supplier`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    pub idsupplier: String,
    pub nama_supplier: String,
}

/// A prior goods-in record from `GET /masuk`
///
/// Doubles as the pick list for the goods-out modal: only previously
/// received items can be issued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReceipt {
    pub idbarang: String,
    pub nama_barang: String,
    pub jumlah: u32,
}

/// A normalized pick-list option
///
/// Both modals select over this shape; the concrete id is resolved from the
/// display name against the currently loaded list, never entered directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntity {
    pub id: String,
    pub display_name: String,
}

impl ReferenceEntity {
    pub fn new<S: Into<String>>(id: S, display_name: S) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

impl From<&Supplier> for ReferenceEntity {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.idsupplier.clone(),
            display_name: supplier.nama_supplier.clone(),
        }
    }
}

impl From<&StockReceipt> for ReferenceEntity {
    fn from(receipt: &StockReceipt) -> Self {
        Self {
            id: receipt.idbarang.clone(),
            display_name: receipt.nama_barang.clone(),
        }
    }
}

/// Direction of an inventory movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    /// Goods in (barang masuk)
    In,
    /// Goods out (barang keluar)
    Out,
}

impl MovementDirection {
    /// Backend endpoint path for creating a movement in this direction
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            MovementDirection::In => "/masuk",
            MovementDirection::Out => "/keluar",
        }
    }

    /// Display name for logging and notifications
    pub fn display_name(&self) -> &'static str {
        match self {
            MovementDirection::In => "barang masuk",
            MovementDirection::Out => "barang keluar",
        }
    }
}

/// The outbound movement payload
///
/// Constructed only at submission time; `tanggal` is generated at
/// construction as `YYYY-MM-DD HH:mm:ss` Asia/Jakarta wall clock. Goods-out
/// records carry no supplier, so the field is skipped when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub nama_barang: String,
    pub jumlah: u32,
    pub konfir_jumlah: u32,
    pub penerima: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama_supplier: Option<String>,
    pub tanggal: String,
    pub keterangan: String,
}
