//! Burndown Core - Domain entities, services, and traits.
//!
//! This crate contains the burndown projection logic, the selection state
//! machine and the chart renderer of the budget dashboard. It is
//! database-agnostic and defines traits that are implemented by the
//! `storage-sqlite` crate.

pub mod burndown;
pub mod chart;
pub mod client;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod funds;
pub mod orders;
pub mod projection;
pub mod refresh;
pub mod scope;
pub mod selection;
pub mod table;
pub mod utils;

pub use burndown::{DailyAggregate, DateRange, Series};
pub use scope::Scope;
pub use table::{ColumnMeta, TableData, TableRow};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
