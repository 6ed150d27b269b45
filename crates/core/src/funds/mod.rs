//! Funds module - per-fund balances shown in the funds grid.

mod funds_model;
mod funds_service;
mod funds_traits;

pub use funds_model::FundBalance;
pub use funds_service::FundService;
pub use funds_traits::{FundRepositoryTrait, FundServiceTrait};
