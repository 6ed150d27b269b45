use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

use crate::burndown::{DailyAggregate, Series};
use crate::chart::ChartLayout;
use crate::dashboard::{BurndownSource, Clock, DashboardSession, RefreshOutcome};
use crate::errors::{Error, Result};
use crate::funds::FundBalance;
use crate::orders::{OrderRow, WishlistOrder};
use crate::projection::CurveKind;
use crate::scope::Scope;
use crate::selection::{CellSelection, GridFilter, FUND_NAME_PROP, LEDGER_NAME_PROP};

struct FixedClock(NaiveDate);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        Local
            .from_local_datetime(&self.0.and_hms_opt(12, 0, 0).unwrap())
            .unwrap()
    }
}

// --- Mock BurndownSource ---
#[derive(Default)]
struct MockSource {
    series: HashMap<Scope, Series>,
    delays: HashMap<Scope, Duration>,
    failing: Mutex<bool>,
    calls: Mutex<Vec<Scope>>,
}

#[async_trait]
impl BurndownSource for MockSource {
    async fn fetch_series(&self, scope: &Scope) -> Result<Series> {
        self.calls.lock().unwrap().push(scope.clone());
        if let Some(delay) = self.delays.get(scope) {
            tokio::time::sleep(*delay).await;
        }
        if *self.failing.lock().unwrap() {
            return Err(Error::DataUnavailable("connection refused".to_string()));
        }
        self.series
            .get(scope)
            .cloned()
            .ok_or_else(|| Error::DataUnavailable(format!("no data for {}", scope)))
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
}

fn series(scope: Scope, allocation: f64) -> Series {
    let records = (1..=10)
        .map(|d| DailyAggregate {
            day: day(d),
            cumulative_expenditure: allocation / 100.0 * d as f64,
            cumulative_encumbrance: 0.0,
            total_allocation: allocation,
            wishlist_proposed: 0.0,
        })
        .collect();
    Series::new(scope, records).unwrap()
}

fn humanities() -> Scope {
    Scope::Ledger("Humanities".to_string())
}

fn history() -> Scope {
    Scope::Fund("HIS-01".to_string())
}

fn source() -> MockSource {
    let mut source = MockSource::default();
    source.series.insert(Scope::All, series(Scope::All, 12_345.67 + 0.1 + 0.2));
    source.series.insert(history(), series(history(), 800.0));
    source.series.insert(humanities(), series(humanities(), 3_000.0));
    source
}

fn funds() -> Vec<FundBalance> {
    vec![FundBalance {
        ledger_name: "Humanities".to_string(),
        fund_ledger_name: "History".to_string(),
        fund_ledger_code: "HIS-01".to_string(),
        parent_fund_ledger_name: None,
        balance_available: 800.0,
        transaction_encumbrance_amount: 0.0,
        transaction_expenditure_amount: 0.0,
        fiscal_period_description: None,
        wishlist_balance_available: 800.0,
    }]
}

async fn session(source: MockSource) -> (DashboardSession, Arc<MockSource>) {
    let source = Arc::new(source);
    let session = DashboardSession::initialize(
        source.clone(),
        Arc::new(FixedClock(day(4))),
        ChartLayout::default(),
    )
    .await
    .unwrap();
    (session, source)
}

#[tokio::test]
async fn initialize_draws_all_funds() {
    let (session, source) = session(source()).await;

    let view = session.view();
    assert_eq!(view.scope, Scope::All);
    assert_eq!(view.grid_filter, GridFilter::None);
    assert_eq!(session.date_range().start, day(1));
    assert_eq!(session.date_range().end, day(10));
    assert_eq!(*source.calls.lock().unwrap(), vec![Scope::All]);

    let renderer = session.renderer();
    assert_eq!(renderer.path(CurveKind::Actual).unwrap().point_count, 4);
    assert_eq!(renderer.path(CurveKind::Projected).unwrap().point_count, 10);
}

#[tokio::test]
async fn initialize_fails_without_data() {
    let source = MockSource::default();
    let result = DashboardSession::initialize(
        Arc::new(source),
        Arc::new(FixedClock(day(4))),
        ChartLayout::default(),
    )
    .await;

    assert!(matches!(result, Err(Error::DataUnavailable(_))));
}

#[tokio::test]
async fn fund_selection_drives_chart_and_grid() {
    let (session, _) = session(source()).await;
    assert!(session.select_cell(&CellSelection::single(0, FUND_NAME_PROP), &funds()));

    assert!(matches!(session.refresh().await, RefreshOutcome::Applied));

    let view = session.view();
    assert_eq!(view.scope, history());
    assert_eq!(view.series.total_allocation(), Some(800.0));
    assert_eq!(view.grid_filter, GridFilter::FundCodeContains("HIS-01".to_string()));
    assert_eq!(session.renderer().y_scale().domain(), (0.0, 800.0));

    let orders: Vec<OrderRow> = [vec!["HIS-01".to_string()], vec!["ART-03".to_string()]]
        .into_iter()
        .enumerate()
        .map(|(i, codes)| {
            OrderRow::from_wishlist_order(WishlistOrder {
                order_id: i as i64,
                fund_codes: codes,
                ..Default::default()
            })
        })
        .collect();
    let visible = session.filter_orders(&orders);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].po_line_reference, "0-wishlist");
}

#[tokio::test]
async fn later_selection_wins_when_completed_out_of_order() {
    let (session, _) = session(source()).await;
    session.select_cell(&CellSelection::single(0, FUND_NAME_PROP), &funds());
    let fund_ticket = session.begin_refresh();
    session.select_cell(&CellSelection::single(0, LEDGER_NAME_PROP), &funds());
    let ledger_ticket = session.begin_refresh();

    assert!(matches!(
        session.complete_refresh(ledger_ticket).await,
        RefreshOutcome::Applied
    ));
    assert!(matches!(
        session.complete_refresh(fund_ticket).await,
        RefreshOutcome::Stale
    ));

    assert_eq!(session.view().scope, humanities());
    assert_eq!(session.renderer().y_scale().domain(), (0.0, 3_000.0));
}

#[tokio::test]
async fn later_selection_wins_when_completed_in_order() {
    let (session, _) = session(source()).await;
    session.select_cell(&CellSelection::single(0, FUND_NAME_PROP), &funds());
    let fund_ticket = session.begin_refresh();
    session.select_cell(&CellSelection::single(0, LEDGER_NAME_PROP), &funds());
    let ledger_ticket = session.begin_refresh();

    assert!(matches!(
        session.complete_refresh(fund_ticket).await,
        RefreshOutcome::Stale
    ));
    assert!(matches!(
        session.complete_refresh(ledger_ticket).await,
        RefreshOutcome::Applied
    ));

    let view = session.view();
    assert_eq!(view.scope, humanities());
    assert_eq!(view.grid_filter, GridFilter::FundCodeContains("Humanities".to_string()));
}

#[tokio::test]
async fn concurrent_refreshes_settle_on_latest_selection() {
    let mut source = source();
    source.delays.insert(history(), Duration::from_millis(60));
    source.delays.insert(humanities(), Duration::from_millis(5));
    let (session, _) = session(source).await;

    session.select_cell(&CellSelection::single(0, FUND_NAME_PROP), &funds());
    let fund_ticket = session.begin_refresh();
    session.select_cell(&CellSelection::single(0, LEDGER_NAME_PROP), &funds());
    let ledger_ticket = session.begin_refresh();

    let (fund_outcome, ledger_outcome) = tokio::join!(
        session.complete_refresh(fund_ticket),
        session.complete_refresh(ledger_ticket)
    );

    assert!(matches!(fund_outcome, RefreshOutcome::Stale));
    assert!(matches!(ledger_outcome, RefreshOutcome::Applied));
    assert_eq!(session.view().scope, humanities());
}

#[tokio::test]
async fn reset_restores_identical_all_funds_total() {
    let (session, _) = session(source()).await;
    let initial = session.view().series.total_allocation().unwrap();

    session.select_cell(&CellSelection::single(0, FUND_NAME_PROP), &funds());
    session.refresh().await;
    session.reset();
    assert!(matches!(session.refresh().await, RefreshOutcome::Applied));

    let after = session.view().series.total_allocation().unwrap();
    assert_eq!(after.to_bits(), initial.to_bits());
    assert_eq!(session.view().grid_filter, GridFilter::None);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_view() {
    let (session, source) = session(source()).await;
    let before_svg = session.chart_svg();
    *source.failing.lock().unwrap() = true;

    session.select_cell(&CellSelection::single(0, FUND_NAME_PROP), &funds());
    let outcome = session.refresh().await;

    assert!(matches!(outcome, RefreshOutcome::Failed(Error::DataUnavailable(_))));
    assert_eq!(session.view().scope, Scope::All);
    assert_eq!(session.chart_svg(), before_svg);
}
