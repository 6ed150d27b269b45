//! Database model for daily burndown aggregates.

use diesel::prelude::*;
use diesel::sql_types::{Double, Text};

use burndown_core::burndown::DailyAggregate;

use crate::errors::StorageError;
use crate::utils::parse_date;

/// One row of the burndown query.
#[derive(Debug, Clone, QueryableByName)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct DailyAggregateDB {
    #[diesel(sql_type = Text)]
    pub day: String,
    #[diesel(sql_type = Double)]
    pub cumulative_expenditure: f64,
    #[diesel(sql_type = Double)]
    pub cumulative_encumbrance: f64,
    #[diesel(sql_type = Double)]
    pub total_allocation: f64,
    #[diesel(sql_type = Double)]
    pub wishlist_proposed: f64,
}

impl TryFrom<DailyAggregateDB> for DailyAggregate {
    type Error = StorageError;

    fn try_from(db: DailyAggregateDB) -> Result<Self, Self::Error> {
        Ok(DailyAggregate {
            day: parse_date("day", &db.day)?,
            cumulative_expenditure: db.cumulative_expenditure,
            cumulative_encumbrance: db.cumulative_encumbrance,
            total_allocation: db.total_allocation,
            wishlist_proposed: db.wishlist_proposed,
        })
    }
}
