use std::sync::Arc;

use log::error;

use crate::errors::{Error, Result};
use crate::refresh::refresh_model::RefreshTimestamp;
use crate::refresh::refresh_traits::{RefreshRepositoryTrait, RefreshServiceTrait};
use crate::table::TableData;

pub struct RefreshService {
    repository: Arc<dyn RefreshRepositoryTrait>,
}

impl RefreshService {
    pub fn new(repository: Arc<dyn RefreshRepositoryTrait>) -> Self {
        RefreshService { repository }
    }
}

impl RefreshServiceTrait for RefreshService {
    fn get_timestamps_table(&self) -> Result<TableData<RefreshTimestamp>> {
        let mut rows = self.repository.list_refresh_timestamps().map_err(|e| {
            error!("Failed to load refresh timestamps: {}", e);
            Error::DataUnavailable(e.to_string())
        })?;
        rows.sort_by_key(|r| (r.table_name as u8, r.timestamp));
        Ok(TableData::new(rows))
    }
}
