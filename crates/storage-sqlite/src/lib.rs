//! SQLite storage for the budget burndown dashboard.
//!
//! This crate is the only place where Diesel dependencies exist. It
//! implements the repository traits defined in `burndown-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations for the externally loaded tables
//! - Repository implementations for funds, orders, refresh times and burndown aggregates
//! - Database-specific model types (with Diesel derives)
//!
//! ```text
//! core (domain)
//!       │
//!       ▼
//! storage-sqlite (this crate)
//!       │
//!       ▼
//!   SQLite DB
//! ```
//!
//! The tables are filled by an external loader; this crate only reads them.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod burndown;
pub mod funds;
pub mod orders;
pub mod refresh;

#[cfg(test)]
mod test_fixtures;

pub use db::{
    create_pool, get_connection, init, ping, run_migrations, DbConnection, DbPool,
};
pub use errors::{IntoCore, StorageError};

pub use burndown::BurndownRepository;
pub use funds::FundRepository;
pub use orders::OrderRepository;
pub use refresh::RefreshRepository;
