//! Application core module
//!
//! Owns the main loop, the active modal instance, and the background tasks.
//! The modals never touch the network themselves: submit and fetch work is
//! spawned here and the results are routed back into whichever modal is
//! still mounted; a result that outlives its modal is dropped.

pub mod events;
pub mod state;

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{AppError, AppResult},
    inventory::{
        client::{HttpInventoryClient, InventoryApi},
        models::MovementDirection,
    },
    ui::{
        components::modals::{GoodsInModal, GoodsOutModal, Modal, ModalAction, MovementDraft},
        UI,
    },
};
use events::{AppEvent, EventHandler};
use state::AppState;

/// The currently mounted modal, if any
///
/// At most one modal is open at a time; the parent owns mount and unmount.
pub enum ActiveModal {
    GoodsIn(GoodsInModal),
    GoodsOut(GoodsOutModal),
}

impl ActiveModal {
    fn as_modal(&mut self) -> &mut dyn Modal {
        match self {
            ActiveModal::GoodsIn(modal) => modal,
            ActiveModal::GoodsOut(modal) => modal,
        }
    }
}

/// Main application struct
pub struct App {
    /// Application state
    state: AppState,
    /// Event handler for async operations
    event_handler: EventHandler,
    /// Stock backend client shared with spawned tasks
    client: Arc<dyn InventoryApi>,
    /// UI renderer
    ui: UI,
    /// Application configuration
    config: Config,
    /// Currently mounted modal
    active_modal: Option<ActiveModal>,
    /// Counter distinguishing modal mounts, for stale-response detection
    modal_generation: u64,
}

impl App {
    /// Create a new application instance with configuration from disk
    pub async fn new() -> AppResult<Self> {
        let config = Config::load().await?;
        Self::with_config(config)
    }

    /// Create an application instance from an explicit configuration
    pub fn with_config(config: Config) -> AppResult<Self> {
        let client = HttpInventoryClient::new(config.backend.clone())?;
        Self::with_client(config, Arc::new(client))
    }

    /// Create an application instance with an explicit backend client
    ///
    /// This is the seam tests use to observe the fetch and submission
    /// traffic the event handling produces.
    pub fn with_client(config: Config, client: Arc<dyn InventoryApi>) -> AppResult<Self> {
        info!("Initializing Gudang TUI application");

        let ui = UI::new(&config.ui)?;

        Ok(Self {
            state: AppState::new(),
            event_handler: EventHandler::new(),
            client,
            ui,
            config,
            active_modal: None,
            modal_generation: 0,
        })
    }

    /// Read access to the application state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue an event as a background task would
    pub fn send_event(&self, event: AppEvent) -> AppResult<()> {
        self.event_handler.send_event(event)
    }

    /// Run the main application loop
    pub async fn run(mut self) -> AppResult<()> {
        info!("Starting application main loop");

        self.setup_terminal()?;

        let result = self.main_loop().await;

        self.cleanup_terminal()?;

        result
    }

    /// Setup terminal for TUI
    fn setup_terminal(&self) -> AppResult<()> {
        enable_raw_mode().map_err(AppError::Io)?;
        let mut stdout = std::io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(AppError::Io)?;
        } else {
            execute!(stdout, EnterAlternateScreen).map_err(AppError::Io)?;
        }
        Ok(())
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal(&self) -> AppResult<()> {
        disable_raw_mode()?;
        let mut stdout = std::io::stdout();
        if self.config.ui.enable_mouse {
            execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;
        } else {
            execute!(stdout, LeaveAlternateScreen)?;
        }
        Ok(())
    }

    /// Main application event loop
    async fn main_loop(&mut self) -> AppResult<()> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);

        // Populate the table on startup.
        self.spawn_table_refresh();

        loop {
            terminal.draw(|frame| {
                self.ui.render(frame, &self.state);
                if let Some(modal) = self.active_modal.as_mut() {
                    let area = frame.size();
                    modal.as_modal().render(frame, area, self.ui.theme());
                }
            })?;

            if event::poll(Duration::from_millis(0))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key)?,
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            // Advance modal phase deadlines; Closed unmounts the instance.
            self.tick_modal();

            self.process_background_tasks()?;

            if self.state.should_quit() {
                info!("Application quit requested");
                break;
            }

            sleep(tick_rate).await;
        }

        Ok(())
    }

    /// Handle input events
    fn handle_key_event(&mut self, key: KeyEvent) -> AppResult<()> {
        // An open modal captures all input, including Esc for its own close.
        if let Some(modal) = self.active_modal.as_mut() {
            let action = modal.as_modal().handle_key_event(key)?;
            if let ModalAction::Submit(draft) = action {
                self.spawn_submission(draft);
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.state.set_should_quit();
                info!("Quit requested by user");
            }
            KeyCode::Char('i') => self.open_goods_in(),
            KeyCode::Char('o') => self.open_goods_out(),
            KeyCode::Char('r') => {
                info!("Refresh requested");
                self.state.add_info("Memuat ulang data...");
                self.spawn_table_refresh();
            }
            _ => {}
        }

        Ok(())
    }

    /// Mount the goods-in modal and fetch its supplier pick list
    fn open_goods_in(&mut self) {
        if self.active_modal.is_some() {
            return;
        }
        self.modal_generation += 1;
        let generation = self.modal_generation;
        info!(generation, "opening goods-in modal");
        self.active_modal = Some(ActiveModal::GoodsIn(GoodsInModal::new(generation)));

        let client = Arc::clone(&self.client);
        let sender = self.event_handler.get_sender();
        tokio::spawn(async move {
            let result = client.fetch_suppliers().await.map_err(|e| e.to_string());
            let _ = sender.send(AppEvent::SuppliersLoaded { generation, result });
        });
    }

    /// Mount the goods-out modal and fetch its item pick list
    fn open_goods_out(&mut self) {
        if self.active_modal.is_some() {
            return;
        }
        self.modal_generation += 1;
        let generation = self.modal_generation;
        info!(generation, "opening goods-out modal");
        self.active_modal = Some(ActiveModal::GoodsOut(GoodsOutModal::new(generation)));

        let client = Arc::clone(&self.client);
        let sender = self.event_handler.get_sender();
        tokio::spawn(async move {
            let result = client.fetch_receipts().await.map_err(|e| e.to_string());
            let _ = sender.send(AppEvent::ReceiptsLoaded { generation, result });
        });
    }

    /// Issue the create request for a validated draft
    fn spawn_submission(&mut self, draft: MovementDraft) {
        let client = Arc::clone(&self.client);
        let sender = self.event_handler.get_sender();
        tokio::spawn(async move {
            let result = client
                .create_movement(draft.direction, &draft.record)
                .await
                .map_err(submission_error_message);
            let _ = sender.send(AppEvent::MovementSubmitted {
                direction: draft.direction,
                result,
            });
        });
    }

    /// Refetch the table data from scratch
    fn spawn_table_refresh(&mut self) {
        self.state.begin_refresh();
        let client = Arc::clone(&self.client);
        let sender = self.event_handler.get_sender();
        tokio::spawn(async move {
            let result = client.fetch_receipts().await.map_err(|e| e.to_string());
            let _ = sender.send(AppEvent::TableRefreshed { result });
        });
    }

    /// Advance the modal lifecycle; unmount on Closed
    fn tick_modal(&mut self) {
        if let Some(modal) = self.active_modal.as_mut() {
            if modal.as_modal().tick(Instant::now()) {
                debug!("modal close sequence finished, unmounting");
                self.active_modal = None;
            }
        }
    }

    /// Drain completed background tasks
    pub fn process_background_tasks(&mut self) -> AppResult<()> {
        while let Some(event) = self.event_handler.try_receive_event() {
            self.handle_app_event(event)?;
        }
        Ok(())
    }

    /// Handle application events from background tasks
    fn handle_app_event(&mut self, event: AppEvent) -> AppResult<()> {
        match event {
            AppEvent::SuppliersLoaded { generation, result } => {
                if let Some(ActiveModal::GoodsIn(modal)) = self.active_modal.as_mut() {
                    modal.apply_suppliers(generation, result);
                } else {
                    // The requesting modal is gone; a late response is a no-op.
                    debug!(generation, "supplier response with no goods-in modal mounted");
                }
            }
            AppEvent::ReceiptsLoaded { generation, result } => {
                if let Some(ActiveModal::GoodsOut(modal)) = self.active_modal.as_mut() {
                    modal.apply_receipts(generation, result);
                } else {
                    debug!(generation, "receipts response with no goods-out modal mounted");
                }
            }
            AppEvent::MovementSubmitted { direction, result } => {
                let succeeded = result.is_ok();
                match (self.active_modal.as_mut(), direction) {
                    (Some(ActiveModal::GoodsIn(modal)), MovementDirection::In) => {
                        modal.apply_submission_result(result);
                    }
                    (Some(ActiveModal::GoodsOut(modal)), MovementDirection::Out) => {
                        modal.apply_submission_result(result);
                    }
                    _ => debug!("submission result with no matching modal mounted"),
                }
                if succeeded {
                    self.state.add_success("Data berhasil ditambah");
                    self.spawn_table_refresh();
                }
            }
            AppEvent::TableRefreshed { result } => match result {
                Ok(receipts) => {
                    debug!(count = receipts.len(), "table data refreshed");
                    self.state.update_receipts(receipts);
                }
                Err(message) => {
                    warn!(message, "table refresh failed");
                    self.state.refreshing = false;
                    self.state.add_error("Terjadi kesalahan saat mengambil data");
                }
            },
        }
        Ok(())
    }
}

/// User-facing message for a failed create request
///
/// A backend rejection and a transport failure read differently, matching
/// the two failure alerts the operators know.
fn submission_error_message(error: AppError) -> String {
    match error {
        AppError::Backend { .. } => "Data gagal ditambah".to_string(),
        _ => "Terjadi kesalahan saat menambah data".to_string(),
    }
}
