use std::sync::Arc;

use log::{debug, error};

use crate::burndown::burndown_model::{DateRange, Series};
use crate::burndown::burndown_traits::{BurndownRepositoryTrait, BurndownServiceTrait};
use crate::errors::{Error, Result};
use crate::scope::Scope;

pub struct BurndownService {
    repository: Arc<dyn BurndownRepositoryTrait>,
}

impl BurndownService {
    pub fn new(repository: Arc<dyn BurndownRepositoryTrait>) -> Self {
        BurndownService { repository }
    }
}

impl BurndownServiceTrait for BurndownService {
    fn fetch_series(&self, scope: &Scope) -> Result<Series> {
        let rows = self.repository.get_daily_aggregates(scope).map_err(|e| {
            error!("Burndown query for {} failed: {}", scope, e);
            match e {
                Error::Database(db) => Error::DataUnavailable(db.to_string()),
                other => other,
            }
        })?;
        debug!("Loaded {} burndown rows for {}", rows.len(), scope);
        Ok(Series::new(scope.clone(), rows)?)
    }

    fn date_range(&self) -> Result<DateRange> {
        Ok(self.fetch_series(&Scope::All)?.date_range()?)
    }
}
