//! Application event system
//!
//! Background tasks (reference fetches, submissions, table refreshes) run as
//! spawned tokio tasks and report back over an unbounded channel; all state
//! mutation happens on the main loop when the events are drained.

use tokio::sync::mpsc;

use crate::{
    error::{AppError, AppResult},
    inventory::models::{MovementDirection, StockReceipt, Supplier},
};

/// Event handler for async operations
pub struct EventHandler {
    event_sender: mpsc::UnboundedSender<AppEvent>,
    event_receiver: mpsc::UnboundedReceiver<AppEvent>,
}

impl EventHandler {
    /// Create a new event handler
    pub fn new() -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        Self {
            event_sender,
            event_receiver,
        }
    }

    /// Send an event to the application
    pub fn send_event(&self, event: AppEvent) -> AppResult<()> {
        self.event_sender
            .send(event)
            .map_err(|_| AppError::state("Failed to send application event"))?;
        Ok(())
    }

    /// Try to receive an event (non-blocking)
    pub fn try_receive_event(&mut self) -> Option<AppEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Get a cloned sender for background tasks
    pub fn get_sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.event_sender.clone()
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Application events for async communication
///
/// Fetch results carry the generation of the modal mount that requested
/// them so a late response can be matched against the current instance and
/// discarded when stale.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Supplier pick list loaded (or failed) for the goods-in modal
    SuppliersLoaded {
        generation: u64,
        result: Result<Vec<Supplier>, String>,
    },

    /// Prior-receipts pick list loaded (or failed) for the goods-out modal
    ReceiptsLoaded {
        generation: u64,
        result: Result<Vec<StockReceipt>, String>,
    },

    /// A movement create request finished
    MovementSubmitted {
        direction: MovementDirection,
        result: Result<(), String>,
    },

    /// The parent table refetch finished
    TableRefreshed {
        result: Result<Vec<StockReceipt>, String>,
    },
}
