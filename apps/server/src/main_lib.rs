use std::sync::Arc;

use crate::config::{Config, LogFormat};
use burndown_core::{
    burndown::{BurndownService, BurndownServiceTrait},
    chart::ChartLayout,
    funds::{FundService, FundServiceTrait},
    orders::{OrderService, OrderServiceTrait},
    refresh::{RefreshService, RefreshServiceTrait},
};
use burndown_storage_sqlite::{
    db::{self, DbPool},
    BurndownRepository, FundRepository, OrderRepository, RefreshRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub pool: Arc<DbPool>,
    pub burndown_service: Arc<dyn BurndownServiceTrait + Send + Sync>,
    pub fund_service: Arc<dyn FundServiceTrait + Send + Sync>,
    pub order_service: Arc<dyn OrderServiceTrait + Send + Sync>,
    pub refresh_service: Arc<dyn RefreshServiceTrait + Send + Sync>,
    pub chart_layout: ChartLayout,
}

/// Installs the global subscriber. `log` records from the library crates are
/// forwarded through the subscriber's log bridge.
pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;

    let burndown_repository = Arc::new(BurndownRepository::new(pool.clone()));
    let burndown_service = Arc::new(BurndownService::new(burndown_repository));

    let fund_repository = Arc::new(FundRepository::new(pool.clone()));
    let fund_service = Arc::new(FundService::new(fund_repository));

    let order_repository = Arc::new(OrderRepository::new(pool.clone()));
    let order_service = Arc::new(OrderService::new(order_repository));

    let refresh_repository = Arc::new(RefreshRepository::new(pool.clone()));
    let refresh_service = Arc::new(RefreshService::new(refresh_repository));

    Ok(Arc::new(AppState {
        pool,
        burndown_service,
        fund_service,
        order_service,
        refresh_service,
        chart_layout: ChartLayout::default(),
    }))
}
