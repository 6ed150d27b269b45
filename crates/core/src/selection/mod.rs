//! Selection module - grid cell selection reconciled into a single scope.

mod selection_controller;
mod selection_model;


pub use selection_controller::{RefreshTicket, SelectionController};
pub use selection_model::{CellSelection, GridFilter, SelectionState, FUND_NAME_PROP, LEDGER_NAME_PROP};
