use crate::errors::Result;
use crate::funds::funds_model::FundBalance;
use crate::table::TableData;

/// Trait defining the contract for fund balance repository operations.
pub trait FundRepositoryTrait: Send + Sync {
    fn list_fund_balances(&self) -> Result<Vec<FundBalance>>;
}

/// Trait defining the contract for fund service operations.
pub trait FundServiceTrait: Send + Sync {
    fn get_funds_table(&self) -> Result<TableData<FundBalance>>;
}
