use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::table::TableRow;
use crate::utils::format_display_date;

/// Externally loaded table whose refresh time is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceTable {
    Funds,
    Orders,
    Wishlist,
}

impl SourceTable {
    pub const ALL: [SourceTable; 3] = [SourceTable::Funds, SourceTable::Orders, SourceTable::Wishlist];

    pub fn label(&self) -> &'static str {
        match self {
            SourceTable::Funds => "Funds",
            SourceTable::Orders => "Orders",
            SourceTable::Wishlist => "Wishlist",
        }
    }

    /// Table holding the `timestamp` column for this source.
    pub fn table_name(&self) -> &'static str {
        match self {
            SourceTable::Funds => "funds_table",
            SourceTable::Orders => "pol_table",
            SourceTable::Wishlist => "airtable_funds",
        }
    }
}

impl fmt::Display for SourceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTimestamp {
    pub timestamp: NaiveDateTime,
    pub table_name: SourceTable,
}

impl RefreshTimestamp {
    /// e.g. `Funds refreshed on 09-03-2024.`
    pub fn display_line(&self) -> String {
        format!(
            "{} refreshed on {}.",
            self.table_name,
            format_display_date(self.timestamp.date())
        )
    }
}

impl TableRow for RefreshTimestamp {
    fn columns() -> &'static [&'static str] {
        &["timestamp", "tableName"]
    }
}
