use std::sync::Arc;

use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;

use burndown_core::refresh::{RefreshRepositoryTrait, RefreshTimestamp, SourceTable};
use burndown_core::Result;

use crate::db::get_connection;
use crate::errors::StorageError;
use crate::schema::{airtable_funds, funds_table, pol_table};
use crate::utils::parse_datetime;

pub struct RefreshRepository {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl RefreshRepository {
    pub fn new(pool: Arc<Pool<ConnectionManager<SqliteConnection>>>) -> Self {
        RefreshRepository { pool }
    }
}

/// Distinct load timestamps of one source table.
fn distinct_timestamps(
    conn: &mut SqliteConnection,
    table: SourceTable,
) -> std::result::Result<Vec<String>, StorageError> {
    let stamps = match table {
        SourceTable::Funds => funds_table::table
            .select(funds_table::timestamp)
            .distinct()
            .load::<String>(conn)?,
        SourceTable::Orders => pol_table::table
            .select(pol_table::timestamp)
            .distinct()
            .load::<String>(conn)?,
        SourceTable::Wishlist => airtable_funds::table
            .select(airtable_funds::timestamp)
            .distinct()
            .load::<String>(conn)?,
    };
    Ok(stamps)
}

impl RefreshRepositoryTrait for RefreshRepository {
    fn list_refresh_timestamps(&self) -> Result<Vec<RefreshTimestamp>> {
        let mut conn = get_connection(&self.pool)?;
        let mut result = Vec::new();
        for table in SourceTable::ALL {
            for raw in distinct_timestamps(&mut conn, table)? {
                result.push(RefreshTimestamp {
                    timestamp: parse_datetime(table.table_name(), &raw)?,
                    table_name: table,
                });
            }
        }
        Ok(result)
    }
}
