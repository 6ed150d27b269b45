use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::burndown::{
    BurndownRepositoryTrait, BurndownService, BurndownServiceTrait, DailyAggregate, DateRange,
};
use crate::errors::{DatabaseError, Error, Result, SeriesError};
use crate::scope::Scope;

// --- Mock BurndownRepository ---
#[derive(Default)]
struct MockBurndownRepository {
    rows: HashMap<Scope, Vec<DailyAggregate>>,
    unreachable: bool,
    calls: Mutex<Vec<Scope>>,
}

impl BurndownRepositoryTrait for MockBurndownRepository {
    fn get_daily_aggregates(&self, scope: &Scope) -> Result<Vec<DailyAggregate>> {
        self.calls.lock().unwrap().push(scope.clone());
        if self.unreachable {
            return Err(Error::Database(DatabaseError::ConnectionFailed(
                "unable to open database file".to_string(),
            )));
        }
        Ok(self.rows.get(scope).cloned().unwrap_or_default())
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
}

fn rows(days: &[u32], allocation: f64) -> Vec<DailyAggregate> {
    days.iter()
        .enumerate()
        .map(|(i, d)| DailyAggregate {
            day: day(*d),
            cumulative_expenditure: 10.0 * i as f64,
            cumulative_encumbrance: 5.0 * i as f64,
            total_allocation: allocation,
            wishlist_proposed: 0.0,
        })
        .collect()
}

#[test]
fn fetch_series_passes_scope_through() {
    let fund = Scope::Fund("HUM-01".to_string());
    let mut repo = MockBurndownRepository::default();
    repo.rows.insert(Scope::All, rows(&[1, 2, 3], 9000.0));
    repo.rows.insert(fund.clone(), rows(&[1, 2, 3], 1200.0));
    let repo = Arc::new(repo);
    let service = BurndownService::new(repo.clone());

    let series = service.fetch_series(&fund).unwrap();

    assert_eq!(series.scope(), &fund);
    assert_eq!(series.total_allocation(), Some(1200.0));
    assert_eq!(*repo.calls.lock().unwrap(), vec![fund]);
}

#[test]
fn unreachable_store_is_data_unavailable() {
    let repo = MockBurndownRepository {
        unreachable: true,
        ..Default::default()
    };
    let service = BurndownService::new(Arc::new(repo));

    let err = service.fetch_series(&Scope::All).unwrap_err();

    assert!(matches!(err, Error::DataUnavailable(_)));
    assert!(err.is_data_unavailable());
}

#[test]
fn gapped_rows_are_rejected() {
    let mut repo = MockBurndownRepository::default();
    repo.rows.insert(Scope::All, rows(&[1, 2, 4], 100.0));
    let service = BurndownService::new(Arc::new(repo));

    let err = service.fetch_series(&Scope::All).unwrap_err();

    assert!(matches!(err, Error::Series(SeriesError::Gap { .. })));
}

#[test]
fn date_range_comes_from_all_funds() {
    let mut repo = MockBurndownRepository::default();
    repo.rows.insert(Scope::All, rows(&[3, 4, 5, 6], 100.0));
    repo.rows
        .insert(Scope::Ledger("Sciences".to_string()), rows(&[1, 2], 100.0));
    let service = BurndownService::new(Arc::new(repo));

    assert_eq!(service.date_range().unwrap(), DateRange::new(day(3), day(6)));
}

#[test]
fn date_range_of_empty_store_is_an_error() {
    let service = BurndownService::new(Arc::new(MockBurndownRepository::default()));

    let err = service.date_range().unwrap_err();

    assert!(matches!(err, Error::Series(SeriesError::Empty)));
}
