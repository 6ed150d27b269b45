//! Burndown module - daily aggregates, series and the aggregate data provider.

mod burndown_model;
mod burndown_service;
mod burndown_traits;

#[cfg(test)]
mod burndown_service_tests;

pub use burndown_model::{DailyAggregate, DateRange, Series};
pub use burndown_service::BurndownService;
pub use burndown_traits::{BurndownRepositoryTrait, BurndownServiceTrait};
