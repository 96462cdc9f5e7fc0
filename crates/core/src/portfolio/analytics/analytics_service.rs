//! Portfolio analytics service implementation.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, error, info, warn};
use rayon::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

use super::analytics_model::{AssetAnalytics, PortfolioAnalytics};
use super::analytics_traits::AnalyticsServiceTrait;
use crate::accounts::{Account, AccountRepositoryTrait};
use crate::accruals::AccrualRepositoryTrait;
use crate::assets::{Asset, AssetRepositoryTrait};
use crate::errors::Result;
use crate::market_data::MarketPriceRepositoryTrait;
use crate::portfolio::allocation::{
    calculate_rebalance_deltas, AllocationBreakdown, RebalanceRecommendation,
};
use crate::portfolio::income::{project_dividend_events, DividendCalendar, IncomeWindow};
use crate::portfolio::performance::{sharpe_ratio, total_return_pct};
use crate::portfolio::snapshot::{NewPortfolioSnapshot, PortfolioSnapshot, SnapshotRepositoryTrait};
use crate::portfolio::valuation::{value_asset, AssetValuation};
use crate::settings::AnalyticsSettings;
use crate::trades::TradeRepositoryTrait;
use crate::utils::time_utils::{subtract_months, Clock, SystemClock};

/// Service computing portfolio analytics from the account, position, trade,
/// accrual, price and snapshot stores.
pub struct AnalyticsService {
    account_repository: Arc<dyn AccountRepositoryTrait>,
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    accrual_repository: Arc<dyn AccrualRepositoryTrait>,
    price_repository: Arc<dyn MarketPriceRepositoryTrait>,
    snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
    settings: AnalyticsSettings,
    clock: Arc<dyn Clock>,
}

impl AnalyticsService {
    /// Creates a new AnalyticsService reading time from the system clock.
    pub fn new(
        account_repository: Arc<dyn AccountRepositoryTrait>,
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        accrual_repository: Arc<dyn AccrualRepositoryTrait>,
        price_repository: Arc<dyn MarketPriceRepositoryTrait>,
        snapshot_repository: Arc<dyn SnapshotRepositoryTrait>,
        settings: AnalyticsSettings,
    ) -> Self {
        Self {
            account_repository,
            asset_repository,
            trade_repository,
            accrual_repository,
            price_repository,
            snapshot_repository,
            settings,
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn settings(&self) -> &AnalyticsSettings {
        &self.settings
    }

    fn list_assets(&self, accounts: &[Account]) -> Result<Vec<Asset>> {
        let mut assets = Vec::new();
        for account in accounts {
            assets.extend(self.asset_repository.list_by_account(&account.id)?);
        }
        Ok(assets)
    }

    fn value_held_asset(
        &self,
        asset: &Asset,
        as_of: NaiveDateTime,
    ) -> Result<Option<AssetValuation>> {
        let buys = self.trade_repository.list_buys_by_asset(&asset.id)?;
        let latest = self.price_repository.get_latest_price(&asset.ticker, as_of)?;
        if latest.is_none() {
            warn!(
                "No market price for {} as of {}; valuing at average cost",
                asset.ticker, as_of
            );
        }
        Ok(value_asset(
            asset,
            &buys,
            latest.as_ref(),
            self.settings.cost_basis_mode,
        ))
    }

    fn calculate_sharpe_ratio(&self, user_id: &str, today: NaiveDate) -> Result<Decimal> {
        let since = subtract_months(today, self.settings.risk_lookback_months);
        let snapshots = self
            .snapshot_repository
            .list_snapshots_since(user_id, since)?;
        let returns: Vec<Decimal> = snapshots
            .iter()
            .map(|snapshot| snapshot.total_return_pct)
            .collect();
        Ok(sharpe_ratio(&returns))
    }

    fn compute_analytics(&self, user_id: &str, now: NaiveDateTime) -> Result<PortfolioAnalytics> {
        let accounts = self.account_repository.list_by_user(user_id)?;
        if accounts.is_empty() {
            debug!("User {} has no accounts; returning empty analytics", user_id);
            return Ok(PortfolioAnalytics::empty());
        }

        let held: Vec<Asset> = self
            .list_assets(&accounts)?
            .into_iter()
            .filter(Asset::is_held)
            .collect();

        // Per-asset lookups are independent; aggregation below runs in asset id
        // order so totals do not depend on scheduling.
        let mut valued: Vec<(Asset, AssetValuation)> = held
            .into_par_iter()
            .map(|asset| -> Result<Option<(Asset, AssetValuation)>> {
                let valuation = self.value_held_asset(&asset, now)?;
                Ok(valuation.map(|valuation| (asset, valuation)))
            })
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();
        valued.sort_by(|(left, _), (right, _)| left.id.cmp(&right.id));

        let mut total_value = Decimal::ZERO;
        let mut total_cost = Decimal::ZERO;
        let mut breakdown = AllocationBreakdown::default();
        let mut asset_details = Vec::with_capacity(valued.len());

        for (asset, valuation) in &valued {
            let (Some(next_value), Some(next_cost)) = (
                total_value.checked_add(valuation.market_value),
                total_cost.checked_add(valuation.cost_basis),
            ) else {
                warn!(
                    "Portfolio totals for user {} overflow at asset {}; skipping it",
                    user_id, asset.id
                );
                continue;
            };
            total_value = next_value;
            total_cost = next_cost;
            breakdown.add(
                asset.asset_type.as_db_str(),
                &asset.currency,
                valuation.market_value,
            );
            asset_details.push(AssetAnalytics::new(asset, valuation));
        }

        let sharpe = self.calculate_sharpe_ratio(user_id, now.date())?;

        debug!(
            "Analytics for user {}: {} accounts, {} held assets, value {}, cost {}",
            user_id,
            accounts.len(),
            asset_details.len(),
            total_value,
            total_cost
        );

        Ok(PortfolioAnalytics {
            total_value,
            total_cost,
            total_return_pct: total_return_pct(total_value, total_cost),
            sharpe_ratio: sharpe,
            by_type: breakdown.by_type,
            by_currency: breakdown.by_currency,
            asset_details,
        })
    }
}

#[async_trait]
impl AnalyticsServiceTrait for AnalyticsService {
    fn get_portfolio_analytics(&self, user_id: &str) -> Result<PortfolioAnalytics> {
        self.compute_analytics(user_id, self.clock.now())
    }

    fn get_dividend_calendar(
        &self,
        user_id: &str,
        months_ahead: Option<i32>,
    ) -> Result<DividendCalendar> {
        let months = months_ahead
            .map(|months| u32::try_from(months).unwrap_or(0))
            .unwrap_or(self.settings.default_calendar_months);
        let window = IncomeWindow::months_ahead(self.clock.today(), months);

        let accounts = self.account_repository.list_by_user(user_id)?;
        let assets = self.list_assets(&accounts)?;

        let mut events = Vec::new();
        for asset in &assets {
            let accruals = self.accrual_repository.list_by_asset(&asset.id)?;
            events.extend(project_dividend_events(asset, &accruals, window));
        }
        events.sort_by_key(|event| event.date);

        debug!(
            "Dividend calendar for user {}: {} events between {} and {}",
            user_id,
            events.len(),
            window.start,
            window.end
        );

        Ok(DividendCalendar { events })
    }

    fn calculate_rebalance(
        &self,
        user_id: &str,
        target_allocation: &HashMap<String, Decimal>,
    ) -> Result<RebalanceRecommendation> {
        let pct_sum = target_allocation
            .values()
            .try_fold(Decimal::ZERO, |sum, pct| sum.checked_add(*pct));
        if !target_allocation.is_empty() && pct_sum != Some(Decimal::ONE_HUNDRED) {
            warn!(
                "Target allocation for user {} sums to {:?}%; using percentages as given",
                user_id, pct_sum
            );
        }

        let analytics = self.get_portfolio_analytics(user_id)?;
        let recommendations = calculate_rebalance_deltas(
            target_allocation,
            &analytics.by_type,
            analytics.total_value,
        )?;

        Ok(RebalanceRecommendation {
            total_value: analytics.total_value,
            current: analytics.by_type,
            target: target_allocation.clone(),
            recommendations,
        })
    }

    async fn create_snapshot(&self, user_id: &str) -> Result<PortfolioSnapshot> {
        let now = self.clock.now();
        let analytics = self.compute_analytics(user_id, now)?;

        let snapshot = NewPortfolioSnapshot::rounded(
            user_id,
            now.date(),
            &self.settings.reporting_currency,
            analytics.total_value,
            analytics.total_cost,
            analytics.total_return_pct,
            analytics.sharpe_ratio,
        );
        let saved = self
            .snapshot_repository
            .upsert_snapshot(snapshot)
            .await
            .map_err(|e| {
                error!("Failed to save portfolio snapshot for user {}: {}", user_id, e);
                e
            })?;

        info!(
            "Saved portfolio snapshot {} for user {} on {}",
            saved.id, user_id, saved.snapshot_date
        );
        Ok(saved)
    }

    fn get_snapshot_history(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>> {
        self.snapshot_repository.list_snapshots(user_id)
    }
}
