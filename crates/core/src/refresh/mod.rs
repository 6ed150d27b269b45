//! Refresh module - when each source table was last loaded.

mod refresh_model;
mod refresh_service;
mod refresh_traits;

pub use refresh_model::{RefreshTimestamp, SourceTable};
pub use refresh_service::RefreshService;
pub use refresh_traits::{RefreshRepositoryTrait, RefreshServiceTrait};
