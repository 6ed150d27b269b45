//! A dashboard session owns the selection, the displayed series and the chart.
//!
//! Applying a selection is split in two: [`DashboardSession::begin_refresh`]
//! captures the scope under a new generation, and
//! [`DashboardSession::complete_refresh`] fetches the series and applies it
//! only if no newer refresh has started in the meantime. The grid filter and
//! the chart always change together.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};

use crate::burndown::{DateRange, Series};
use crate::chart::{ChartLayout, ChartRenderer};
use crate::dashboard::clock::Clock;
use crate::dashboard::source::BurndownSource;
use crate::errors::{Error, Result};
use crate::funds::FundBalance;
use crate::orders::OrderRow;
use crate::scope::Scope;
use crate::selection::{CellSelection, GridFilter, RefreshTicket, SelectionController, SelectionState};

/// What is currently displayed: one scope, its series and the matching grid filter.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub scope: Scope,
    pub grid_filter: GridFilter,
    pub series: Series,
}

#[derive(Debug)]
pub enum RefreshOutcome {
    Applied,
    /// A newer refresh started before this one finished; its result was dropped.
    Stale,
    /// The fetch failed; the previous view is still displayed.
    Failed(Error),
}

struct SessionState {
    controller: SelectionController,
    view: DashboardView,
    renderer: ChartRenderer,
}

pub struct DashboardSession {
    source: Arc<dyn BurndownSource>,
    clock: Arc<dyn Clock>,
    date_range: DateRange,
    state: Mutex<SessionState>,
}

impl DashboardSession {
    /// Loads the all-funds series, fixes the x axis to its date range and
    /// draws the first chart.
    pub async fn initialize(
        source: Arc<dyn BurndownSource>,
        clock: Arc<dyn Clock>,
        layout: ChartLayout,
    ) -> Result<Self> {
        let series = source.fetch_series(&Scope::All).await?;
        let date_range = series.date_range()?;
        let mut renderer = ChartRenderer::setup(layout, date_range);
        renderer.redraw(&series, clock.today());
        info!(
            "Dashboard initialized over {} to {}",
            date_range.start, date_range.end
        );

        Ok(DashboardSession {
            source,
            clock,
            date_range,
            state: Mutex::new(SessionState {
                controller: SelectionController::new(),
                view: DashboardView {
                    scope: Scope::All,
                    grid_filter: GridFilter::None,
                    series,
                },
                renderer,
            }),
        })
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn date_range(&self) -> DateRange {
        self.date_range
    }

    pub fn selection(&self) -> SelectionState {
        self.lock().controller.state().clone()
    }

    /// Forwards a funds-grid selection event; see [`SelectionController::handle_cell_selection`].
    pub fn select_cell(&self, cell: &CellSelection, funds: &[FundBalance]) -> bool {
        self.lock().controller.handle_cell_selection(cell, funds)
    }

    pub fn reset(&self) {
        self.lock().controller.reset();
    }

    pub fn begin_refresh(&self) -> RefreshTicket {
        let ticket = self.lock().controller.begin_apply();
        debug!("Refresh {} started for {}", ticket.generation, ticket.scope);
        ticket
    }

    pub async fn complete_refresh(&self, ticket: RefreshTicket) -> RefreshOutcome {
        // The lock is not held across the fetch.
        let fetched = self.source.fetch_series(&ticket.scope).await;

        let mut state = self.lock();
        if !state.controller.is_current(&ticket) {
            debug!("Dropping stale refresh {} for {}", ticket.generation, ticket.scope);
            return RefreshOutcome::Stale;
        }

        match fetched {
            Ok(series) => {
                state.renderer.redraw(&series, self.clock.today());
                state.view = DashboardView {
                    scope: ticket.scope,
                    grid_filter: ticket.grid_filter,
                    series,
                };
                RefreshOutcome::Applied
            }
            Err(e) => {
                warn!("Refresh for {} failed, keeping previous view: {}", ticket.scope, e);
                RefreshOutcome::Failed(e)
            }
        }
    }

    /// Applies the current selection.
    pub async fn refresh(&self) -> RefreshOutcome {
        let ticket = self.begin_refresh();
        self.complete_refresh(ticket).await
    }

    pub fn view(&self) -> DashboardView {
        self.lock().view.clone()
    }

    pub fn chart_svg(&self) -> String {
        self.lock().renderer.to_svg()
    }

    pub fn renderer(&self) -> ChartRenderer {
        self.lock().renderer.clone()
    }

    /// Orders matching the displayed scope.
    pub fn filter_orders(&self, rows: &[OrderRow]) -> Vec<OrderRow> {
        let filter = self.lock().view.grid_filter.clone();
        filter.apply(rows).into_iter().cloned().collect()
    }
}
