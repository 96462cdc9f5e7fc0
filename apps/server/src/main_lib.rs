use std::sync::Arc;

use budgetflow_core::portfolio::{AnalyticsService, AnalyticsServiceTrait};
use budgetflow_storage_sqlite::{
    accounts::AccountRepository,
    accruals::AccrualRepository,
    assets::AssetRepository,
    db,
    market_data::MarketPriceRepository,
    portfolio::snapshot::SnapshotRepository,
    trades::TradeRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub analytics_service: Arc<dyn AnalyticsServiceTrait>,
}

/// Installs the global subscriber. Records emitted through `log` by the
/// core and storage crates are bridged into it.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let account_repository = Arc::new(AccountRepository::new(pool.clone(), writer.clone()));
    let asset_repository = Arc::new(AssetRepository::new(pool.clone(), writer.clone()));
    let trade_repository = Arc::new(TradeRepository::new(pool.clone(), writer.clone()));
    let accrual_repository = Arc::new(AccrualRepository::new(pool.clone(), writer.clone()));
    let price_repository = Arc::new(MarketPriceRepository::new(pool.clone(), writer.clone()));
    let snapshot_repository = Arc::new(SnapshotRepository::new(pool.clone(), writer.clone()));

    let analytics_service: Arc<dyn AnalyticsServiceTrait> = Arc::new(AnalyticsService::new(
        account_repository,
        asset_repository,
        trade_repository,
        accrual_repository,
        price_repository,
        snapshot_repository,
        config.analytics.clone(),
    ));
    tracing::info!(
        "Analytics configured: currency={}, risk lookback={} months, cost basis={}",
        config.analytics.reporting_currency,
        config.analytics.risk_lookback_months,
        config.analytics.cost_basis_mode
    );

    Ok(Arc::new(AppState { analytics_service }))
}
