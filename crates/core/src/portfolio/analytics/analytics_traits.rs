use std::collections::HashMap;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::analytics_model::PortfolioAnalytics;
use crate::errors::Result;
use crate::portfolio::allocation::RebalanceRecommendation;
use crate::portfolio::income::DividendCalendar;
use crate::portfolio::snapshot::PortfolioSnapshot;

/// Trait defining the contract for portfolio analytics operations.
#[async_trait]
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Values every held asset of the user and aggregates totals, return,
    /// Sharpe ratio and allocation breakdowns.
    fn get_portfolio_analytics(&self, user_id: &str) -> Result<PortfolioAnalytics>;

    /// Income events strictly between today and `months_ahead` months from
    /// today. `None` uses the configured default horizon; a horizon of zero or
    /// less gives an empty calendar.
    fn get_dividend_calendar(
        &self,
        user_id: &str,
        months_ahead: Option<i32>,
    ) -> Result<DividendCalendar>;

    /// Money deltas that move each requested asset type to its target
    /// percentage of the portfolio value.
    fn calculate_rebalance(
        &self,
        user_id: &str,
        target_allocation: &HashMap<String, Decimal>,
    ) -> Result<RebalanceRecommendation>;

    /// Computes analytics now and persists them as today's snapshot.
    async fn create_snapshot(&self, user_id: &str) -> Result<PortfolioSnapshot>;

    /// Stored snapshots of the user, newest first.
    fn get_snapshot_history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>>;
}
