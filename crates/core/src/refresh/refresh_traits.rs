use crate::errors::Result;
use crate::refresh::refresh_model::RefreshTimestamp;
use crate::table::TableData;

/// Trait defining the contract for refresh timestamp repository operations.
pub trait RefreshRepositoryTrait: Send + Sync {
    /// Distinct load timestamps of every source table.
    fn list_refresh_timestamps(&self) -> Result<Vec<RefreshTimestamp>>;
}

pub trait RefreshServiceTrait: Send + Sync {
    fn get_timestamps_table(&self) -> Result<TableData<RefreshTimestamp>>;
}
