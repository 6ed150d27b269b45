use std::sync::Arc;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sql_query;
use diesel::sql_types::Text;
use diesel::sqlite::{Sqlite, SqliteConnection};
use log::debug;

use burndown_core::burndown::{BurndownRepositoryTrait, DailyAggregate};
use burndown_core::constants::{ENCUMBRANCE_SUB_TYPES, EXPENDITURE_SUB_TYPES};
use burndown_core::scope::Scope;
use burndown_core::Result;

use super::model::DailyAggregateDB;
use crate::db::get_connection;
use crate::errors::StorageError;
use crate::utils::sql_string_list;

/// Number of places the scope filter appears in the burndown query.
const SCOPE_FILTER_SLOTS: usize = 3;

/// Row filter on `fund_ledger_code` for a scope, with at most one `?` placeholder.
fn scope_filter(scope: &Scope) -> &'static str {
    match scope {
        Scope::All => "1 = 1",
        Scope::Fund(_) => "fund_ledger_code = ?",
        Scope::Ledger(_) => {
            "fund_ledger_code IN (SELECT fund_ledger_code FROM funds_table WHERE ledger_name = ?)"
        }
    }
}

/// The daily burndown query.
///
/// The calendar runs day by day from the first to the last day of the
/// `dates` dimension, so the result has no gaps even when the dimension has.
/// Days without transactions contribute zero to the running totals. Stored
/// days and transaction dates are cut to their date part before joining.
fn burndown_sql(scope: &Scope) -> String {
    let filter = scope_filter(scope);
    format!(
        "
        WITH RECURSIVE calendar(day) AS (
            SELECT day FROM (SELECT date(MIN(day)) AS day FROM dates) WHERE day IS NOT NULL
            UNION ALL
            SELECT date(day, '+1 day') FROM calendar
            WHERE day < (SELECT date(MAX(day)) FROM dates)
        ),
        scoped_transactions AS (
            SELECT date(transaction_date) AS transaction_day, transaction_item_sub_type, transaction_amount
            FROM transactions_table
            WHERE {filter}
        ),
        daily_expenditure AS (
            SELECT transaction_day AS day, SUM(transaction_amount) AS amount
            FROM scoped_transactions
            WHERE transaction_item_sub_type IN ({expenditure})
            GROUP BY transaction_day
        ),
        daily_encumbrance AS (
            SELECT transaction_day AS day, SUM(transaction_amount) AS amount
            FROM scoped_transactions
            WHERE transaction_item_sub_type IN ({encumbrance})
            GROUP BY transaction_day
        )
        SELECT
            calendar.day AS day,
            CAST(SUM(COALESCE(spent.amount, 0.0)) OVER (ORDER BY calendar.day) AS REAL)
                AS cumulative_expenditure,
            CAST(SUM(COALESCE(committed.amount, 0.0)) OVER (ORDER BY calendar.day) AS REAL)
                AS cumulative_encumbrance,
            CAST((SELECT COALESCE(SUM(transaction_allocation_amount), 0.0)
                  FROM funds_table WHERE {filter}) AS REAL) AS total_allocation,
            CAST((SELECT COALESCE(SUM(total_allocated), 0.0)
                  FROM airtable_funds WHERE {filter}) AS REAL) AS wishlist_proposed
        FROM calendar
        LEFT JOIN daily_expenditure spent ON spent.day = calendar.day
        LEFT JOIN daily_encumbrance committed ON committed.day = calendar.day
        ORDER BY calendar.day",
        filter = filter,
        expenditure = sql_string_list(EXPENDITURE_SUB_TYPES),
        encumbrance = sql_string_list(ENCUMBRANCE_SUB_TYPES),
    )
}

pub struct BurndownRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl BurndownRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        BurndownRepository { pool }
    }
}

impl BurndownRepositoryTrait for BurndownRepository {
    fn get_daily_aggregates(&self, scope: &Scope) -> Result<Vec<DailyAggregate>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query_builder = sql_query(burndown_sql(scope)).into_boxed::<Sqlite>();
        if let Some(parameter) = scope.parameter() {
            for _ in 0..SCOPE_FILTER_SLOTS {
                query_builder = query_builder.bind::<Text, _>(parameter.to_string());
            }
        }

        let rows = query_builder
            .load::<DailyAggregateDB>(&mut conn)
            .map_err(StorageError::from)?;
        debug!("Burndown query for {} returned {} rows", scope, rows.len());

        rows.into_iter()
            .map(|row| DailyAggregate::try_from(row).map_err(Into::into))
            .collect()
    }
}
