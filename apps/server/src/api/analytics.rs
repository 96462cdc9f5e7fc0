use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use budgetflow_core::portfolio::{
    DividendCalendar, PortfolioAnalytics, PortfolioSnapshot, RebalanceRecommendation,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividendQuery {
    pub months_ahead: Option<i32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotCreated {
    pub id: String,
    pub snapshot_date: NaiveDate,
}

fn require_user_id(user_id: &str) -> ApiResult<&str> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(ApiError::BadRequest("userId must not be blank".to_string()));
    }
    Ok(trimmed)
}

async fn get_portfolio_analytics(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<PortfolioAnalytics>> {
    let user_id = require_user_id(&user_id)?;
    let analytics = state.analytics_service.get_portfolio_analytics(user_id)?;
    Ok(Json(analytics))
}

async fn get_dividend_calendar(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    query: Result<Query<DividendQuery>, QueryRejection>,
) -> ApiResult<Json<DividendCalendar>> {
    let user_id = require_user_id(&user_id)?;
    let Query(q) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let calendar = state
        .analytics_service
        .get_dividend_calendar(user_id, q.months_ahead)?;
    Ok(Json(calendar))
}

async fn calculate_rebalance(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    body: Result<Json<HashMap<String, Decimal>>, JsonRejection>,
) -> ApiResult<Json<RebalanceRecommendation>> {
    let user_id = require_user_id(&user_id)?;
    let Json(target_allocation) =
        body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let recommendation = state
        .analytics_service
        .calculate_rebalance(user_id, &target_allocation)?;
    Ok(Json(recommendation))
}

async fn create_snapshot(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<SnapshotCreated>> {
    let user_id = require_user_id(&user_id)?;
    let snapshot = state.analytics_service.create_snapshot(user_id).await?;
    Ok(Json(SnapshotCreated {
        id: snapshot.id,
        snapshot_date: snapshot.snapshot_date,
    }))
}

async fn get_snapshot_history(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<PortfolioSnapshot>>> {
    let user_id = require_user_id(&user_id)?;
    let snapshots = state.analytics_service.get_snapshot_history(user_id)?;
    Ok(Json(snapshots))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/analytics/portfolio/{user_id}",
            get(get_portfolio_analytics),
        )
        .route("/analytics/dividends/{user_id}", get(get_dividend_calendar))
        .route("/analytics/rebalance/{user_id}", post(calculate_rebalance))
        .route("/analytics/snapshot/{user_id}", post(create_snapshot))
        .route("/analytics/snapshots/{user_id}", get(get_snapshot_history))
}
