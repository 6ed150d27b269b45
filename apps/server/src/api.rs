use std::sync::Arc;

use crate::{config::Config, error::ErrorBody, main_lib::AppState};
use axum::{http::HeaderValue, routing::get, Json, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod dashboard;
pub mod health;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        dashboard::get_orders_data,
        dashboard::get_funds_data,
        dashboard::get_timestamp_data,
        dashboard::get_burndown_data,
        dashboard::get_burndown_chart,
    ),
    components(schemas(ErrorBody)),
    tags((name = "burndown"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(origin) => Some(origin),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", o, e);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(origins)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    Router::new()
        .merge(health::router())
        .merge(dashboard::router())
        .route("/openapi.json", get(|| async { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
