use std::sync::Arc;

use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    main_lib::AppState,
};
use axum::{extract::State, routing::get, Router};
use burndown_storage_sqlite::db;
use tokio::task;

#[utoipa::path(get, path = "/healthz", responses((status = 200, description = "Process is up")))]
pub async fn healthz() -> &'static str {
    "ok"
}

/// Ready once a pooled connection can answer a trivial query.
#[utoipa::path(
    get,
    path = "/readyz",
    responses(
        (status = 200, description = "Database reachable"),
        (status = 503, description = "Database unreachable", body = ErrorBody)
    )
)]
pub async fn readyz(State(state): State<Arc<AppState>>) -> ApiResult<&'static str> {
    let pool = state.pool.clone();
    task::spawn_blocking(move || db::ping(&pool))
        .await
        .map_err(|e| ApiError::Internal(format!("Readiness check task failed: {}", e)))??;
    Ok("ok")
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
