use std::sync::Arc;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sqlite::SqliteConnection;

use burndown_core::funds::{FundBalance, FundRepositoryTrait};
use burndown_core::Result;

use super::model::FundBalanceDB;
use crate::db::get_connection;
use crate::errors::StorageError;

/// Funds without a wishlist entry keep their full balance as wishlist balance.
const FUNDS_QUERY: &str = "
    SELECT
        f.ledger_name,
        f.fund_ledger_name,
        f.fund_ledger_code,
        f.parent_fund_ledger_name,
        CAST(f.balance_available AS REAL) AS balance_available,
        CAST(f.transaction_encumbrance_amount AS REAL) AS transaction_encumbrance_amount,
        CAST(f.transaction_expenditure_amount AS REAL) AS transaction_expenditure_amount,
        f.fiscal_period_description,
        CAST(f.balance_available - COALESCE(a.total_allocated, 0.0) AS REAL)
            AS wishlist_balance_available
    FROM funds_table f
    LEFT JOIN airtable_funds a ON a.fund_ledger_code = f.fund_ledger_code
    ORDER BY f.ledger_name, f.fund_ledger_name";

pub struct FundRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl FundRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        FundRepository { pool }
    }
}

impl FundRepositoryTrait for FundRepository {
    fn list_fund_balances(&self) -> Result<Vec<FundBalance>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = sql_query(FUNDS_QUERY)
            .load::<FundBalanceDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(FundBalance::from).collect())
    }
}
