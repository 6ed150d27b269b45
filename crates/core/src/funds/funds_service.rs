use std::sync::Arc;

use log::{debug, error};

use crate::errors::{Error, Result};
use crate::funds::funds_model::FundBalance;
use crate::funds::funds_traits::{FundRepositoryTrait, FundServiceTrait};
use crate::table::TableData;

pub struct FundService {
    repository: Arc<dyn FundRepositoryTrait>,
}

impl FundService {
    pub fn new(repository: Arc<dyn FundRepositoryTrait>) -> Self {
        FundService { repository }
    }
}

impl FundServiceTrait for FundService {
    fn get_funds_table(&self) -> Result<TableData<FundBalance>> {
        let rows = self.repository.list_fund_balances().map_err(|e| {
            error!("Failed to load fund balances: {}", e);
            Error::DataUnavailable(e.to_string())
        })?;
        debug!("Loaded {} fund balances", rows.len());
        Ok(TableData::new(rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DatabaseError;

    struct MockFundRepository {
        rows: Vec<FundBalance>,
        fail: bool,
    }

    impl FundRepositoryTrait for MockFundRepository {
        fn list_fund_balances(&self) -> Result<Vec<FundBalance>> {
            if self.fail {
                return Err(DatabaseError::QueryFailed("no such table: funds_table".into()).into());
            }
            Ok(self.rows.clone())
        }
    }

    fn fund(code: &str, balance: f64, wishlist_balance: f64) -> FundBalance {
        FundBalance {
            ledger_name: "Humanities".to_string(),
            fund_ledger_name: format!("{} Fund", code),
            fund_ledger_code: code.to_string(),
            parent_fund_ledger_name: None,
            balance_available: balance,
            transaction_encumbrance_amount: 0.0,
            transaction_expenditure_amount: 0.0,
            fiscal_period_description: Some("FY2024".to_string()),
            wishlist_balance_available: wishlist_balance,
        }
    }

    #[test]
    fn wraps_rows_with_columns() {
        let service = FundService::new(Arc::new(MockFundRepository {
            rows: vec![fund("HUM-01", 500.0, 450.0)],
            fail: false,
        }));

        let table = service.get_funds_table().unwrap();

        assert_eq!(table.rows[0].wishlist_allocated(), 50.0);
        assert!(table.column_names().contains(&"wishlistBalanceAvailable"));
    }

    #[test]
    fn query_failure_is_data_unavailable() {
        let service = FundService::new(Arc::new(MockFundRepository {
            rows: Vec::new(),
            fail: true,
        }));

        assert!(matches!(
            service.get_funds_table(),
            Err(Error::DataUnavailable(_))
        ));
    }
}
