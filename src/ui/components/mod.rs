//! UI components

pub mod modals;
pub mod movement_table;
pub mod status_bar;

pub use movement_table::MovementTable;
pub use status_bar::StatusBar;
