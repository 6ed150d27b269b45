use async_trait::async_trait;

use crate::burndown::Series;
use crate::errors::Result;
use crate::scope::Scope;

/// Where a dashboard session gets burndown series from.
#[async_trait]
pub trait BurndownSource: Send + Sync {
    async fn fetch_series(&self, scope: &Scope) -> Result<Series>;
}
