//! Burndown domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::SeriesError;
use crate::scope::Scope;
use crate::table::TableRow;

/// Cumulative figures for one calendar day of a scope.
///
/// Expenditure and encumbrance are running totals up to and including `day`,
/// not daily deltas. `total_allocation` and `wishlist_proposed` are the same
/// on every record of a scope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyAggregate {
    pub day: NaiveDate,
    pub cumulative_expenditure: f64,
    pub cumulative_encumbrance: f64,
    pub total_allocation: f64,
    pub wishlist_proposed: f64,
}

impl TableRow for DailyAggregate {
    fn columns() -> &'static [&'static str] {
        &[
            "day",
            "cumulativeExpenditure",
            "cumulativeEncumbrance",
            "totalAllocation",
            "wishlistProposed",
        ]
    }
}

/// Inclusive `[start, end]` span of observed days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            DateRange { start, end }
        } else {
            DateRange { start: end, end: start }
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days between the endpoints (0 for a single-day range).
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Day-ordered aggregates of one scope.
///
/// A series is validated on construction and never modified afterwards; a
/// scope change produces a new series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    scope: Scope,
    records: Vec<DailyAggregate>,
}

impl Series {
    /// Builds a series, requiring strictly ascending days with no gaps.
    pub fn new(scope: Scope, records: Vec<DailyAggregate>) -> Result<Self, SeriesError> {
        for pair in records.windows(2) {
            let (previous, next) = (pair[0].day, pair[1].day);
            if next <= previous {
                return Err(SeriesError::NotAscending { previous, next });
            }
            if previous.succ_opt() != Some(next) {
                return Err(SeriesError::Gap { previous, next });
            }
        }
        Ok(Series { scope, records })
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn records(&self) -> &[DailyAggregate] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Allocation of the scope, read from the first record.
    pub fn total_allocation(&self) -> Option<f64> {
        self.records.first().map(|r| r.total_allocation)
    }

    pub fn date_range(&self) -> Result<DateRange, SeriesError> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Ok(DateRange::new(first.day, last.day)),
            _ => Err(SeriesError::Empty),
        }
    }

    pub fn into_records(self) -> Vec<DailyAggregate> {
        self.records
    }
}
