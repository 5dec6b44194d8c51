//! HTTP client for the stock backend
//!
//! The modals never talk to the network themselves; the app spawns tasks
//! that call through [`InventoryApi`] and report back over the event
//! channel. The trait exists so submission coordination can be tested with
//! a mock backend.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};

use crate::config::BackendConfig;
use crate::error::{AppError, AppResult};

use super::models::{MovementDirection, MovementRecord, StockReceipt, Supplier};

/// Backend operations the application depends on
#[async_trait]
pub trait InventoryApi: Send + Sync {
    /// Fetch the supplier pick list (`GET /supplier`)
    async fn fetch_suppliers(&self) -> AppResult<Vec<Supplier>>;

    /// Fetch prior goods-in records (`GET /masuk`)
    async fn fetch_receipts(&self) -> AppResult<Vec<StockReceipt>>;

    /// Create a movement record (`POST /masuk` or `POST /keluar`)
    ///
    /// Any 2xx response is success; no response body is relied upon.
    async fn create_movement(
        &self,
        direction: MovementDirection,
        record: &MovementRecord,
    ) -> AppResult<()>;
}

/// reqwest-backed implementation of [`InventoryApi`]
pub struct HttpInventoryClient {
    client: Client,
    config: BackendConfig,
}

impl HttpInventoryClient {
    /// Create a new client against the configured backend
    pub fn new(config: BackendConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("gudang-tui/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::application(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, config })
    }

    /// Backend configuration this client was built with
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Full URL for an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn fetch_list<T: serde::de::DeserializeOwned>(&self, path: &str) -> AppResult<Vec<T>> {
        let url = self.endpoint_url(path);
        debug!(url, "fetching reference data");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::backend(path, status.as_u16()));
        }

        let items: Vec<T> = response.json().await?;
        debug!(url, count = items.len(), "reference data loaded");
        Ok(items)
    }
}

#[async_trait]
impl InventoryApi for HttpInventoryClient {
    #[instrument(skip(self))]
    async fn fetch_suppliers(&self) -> AppResult<Vec<Supplier>> {
        self.fetch_list("/supplier").await
    }

    #[instrument(skip(self))]
    async fn fetch_receipts(&self) -> AppResult<Vec<StockReceipt>> {
        self.fetch_list("/masuk").await
    }

    #[instrument(skip(self, record), fields(direction = direction.display_name()))]
    async fn create_movement(
        &self,
        direction: MovementDirection,
        record: &MovementRecord,
    ) -> AppResult<()> {
        let path = direction.endpoint_path();
        let url = self.endpoint_url(path);
        info!(url, nama_barang = %record.nama_barang, "submitting movement");

        let response = self.client.post(&url).json(record).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::backend(path, status.as_u16()));
        }

        info!(url, "movement created");
        Ok(())
    }
}
