//! Grid and burndown endpoints.
//!
//! Services run blocking diesel queries, so every handler hops onto the
//! blocking pool.

use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    main_lib::AppState,
};
use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use burndown_core::{
    chart::ChartRenderer,
    dashboard::{Clock, SystemClock},
    funds::FundBalance,
    orders::OrderRow,
    refresh::RefreshTimestamp,
    scope::BurndownQuery,
    DailyAggregate, TableData,
};
use tokio::task;

async fn run_blocking<T, F>(f: F) -> ApiResult<T>
where
    F: FnOnce() -> burndown_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to execute query task: {}", e)))?
        .map_err(ApiError::from)
}

#[utoipa::path(
    get,
    path = "/orders-data",
    responses(
        (status = 200, description = "Purchase order lines followed by wishlist orders"),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn get_orders_data(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TableData<OrderRow>>> {
    let service = state.order_service.clone();
    let table = run_blocking(move || service.get_orders_table()).await?;
    Ok(Json(table))
}

#[utoipa::path(
    get,
    path = "/funds-data",
    responses(
        (status = 200, description = "Fund balances ordered by ledger and fund name"),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn get_funds_data(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TableData<FundBalance>>> {
    let service = state.fund_service.clone();
    let table = run_blocking(move || service.get_funds_table()).await?;
    Ok(Json(table))
}

#[utoipa::path(
    get,
    path = "/timestamp-data",
    responses(
        (status = 200, description = "Load times of the source tables"),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn get_timestamp_data(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TableData<RefreshTimestamp>>> {
    let service = state.refresh_service.clone();
    let table = run_blocking(move || service.get_timestamps_table()).await?;
    Ok(Json(table))
}

#[utoipa::path(
    get,
    path = "/burndown-data",
    params(
        ("type" = String, Query, description = "all-funds, single-fund or single-ledger"),
        ("ledger" = Option<String>, Query, description = "Ledger name for single-ledger"),
        ("fundCode" = Option<String>, Query, description = "Fund code for single-fund")
    ),
    responses(
        (status = 200, description = "One cumulative record per day, ascending"),
        (status = 400, description = "Unknown type or missing scope parameter", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn get_burndown_data(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BurndownQuery>,
) -> ApiResult<Json<TableData<DailyAggregate>>> {
    let scope = query.to_scope()?;
    let service = state.burndown_service.clone();
    let series = run_blocking(move || service.fetch_series(&scope)).await?;
    Ok(Json(TableData::new(series.into_records())))
}

/// Same scope parameters as `/burndown-data`, drawn against the all-funds date axis.
#[utoipa::path(
    get,
    path = "/burndown-chart.svg",
    params(
        ("type" = String, Query, description = "all-funds, single-fund or single-ledger"),
        ("ledger" = Option<String>, Query, description = "Ledger name for single-ledger"),
        ("fundCode" = Option<String>, Query, description = "Fund code for single-fund")
    ),
    responses(
        (status = 200, description = "SVG burndown chart", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Unknown type or missing scope parameter", body = ErrorBody),
        (status = 404, description = "No burndown data loaded", body = ErrorBody),
        (status = 503, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn get_burndown_chart(
    State(state): State<Arc<AppState>>,
    Query(query): Query<BurndownQuery>,
) -> ApiResult<impl IntoResponse> {
    let scope = query.to_scope()?;
    let service = state.burndown_service.clone();
    let layout = state.chart_layout;
    let svg = run_blocking(move || {
        let date_range = service.date_range()?;
        let series = service.fetch_series(&scope)?;
        let mut renderer = ChartRenderer::setup(layout, date_range);
        renderer.redraw(&series, SystemClock.today());
        Ok(renderer.to_svg())
    })
    .await?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/orders-data", get(get_orders_data))
        .route("/funds-data", get(get_funds_data))
        .route("/timestamp-data", get(get_timestamp_data))
        .route("/burndown-data", get(get_burndown_data))
        .route("/burndown-chart.svg", get(get_burndown_chart))
}
