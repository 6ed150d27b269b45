use crate::burndown::burndown_model::{DailyAggregate, DateRange, Series};
use crate::errors::Result;
use crate::scope::Scope;

/// Trait for the aggregate query backing the burndown.
///
/// Implementations return one row per calendar day, ascending, with
/// cumulative expenditure and encumbrance restricted to `scope`.
pub trait BurndownRepositoryTrait: Send + Sync {
    fn get_daily_aggregates(&self, scope: &Scope) -> Result<Vec<DailyAggregate>>;
}

/// Trait for burndown service operations
pub trait BurndownServiceTrait: Send + Sync {
    fn fetch_series(&self, scope: &Scope) -> Result<Series>;
    /// Observed range of the all-funds series, used as the fixed chart axis.
    fn date_range(&self) -> Result<DateRange>;
}
