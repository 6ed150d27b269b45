//! Scope module - the dimension a burndown is aggregated over.

mod scope_model;

pub use scope_model::{BurndownQuery, Scope, ScopeType};
