use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{SNAPSHOT_AMOUNT_PRECISION, SNAPSHOT_RATIO_PRECISION};

/// Rounds half away from zero, the way persisted snapshot figures are stored.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// A persisted, dated summary of a user's portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_return_pct: Decimal,
    pub sharpe_ratio: Decimal,
    pub currency: String,
    pub created_at: NaiveDateTime,
}

/// Snapshot ready to be written. At most one row exists per user and date; a
/// second write on the same day replaces the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPortfolioSnapshot {
    pub user_id: String,
    pub snapshot_date: NaiveDate,
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_return_pct: Decimal,
    pub sharpe_ratio: Decimal,
    pub currency: String,
}

impl NewPortfolioSnapshot {
    /// Builds a snapshot from unrounded figures. Value and cost keep two
    /// decimals, return and Sharpe ratio keep four.
    pub fn rounded(
        user_id: &str,
        snapshot_date: NaiveDate,
        currency: &str,
        total_value: Decimal,
        total_cost: Decimal,
        total_return_pct: Decimal,
        sharpe_ratio: Decimal,
    ) -> Self {
        Self {
            user_id: user_id.to_string(),
            snapshot_date,
            total_value: round_half_up(total_value, SNAPSHOT_AMOUNT_PRECISION),
            total_cost: round_half_up(total_cost, SNAPSHOT_AMOUNT_PRECISION),
            total_return_pct: round_half_up(total_return_pct, SNAPSHOT_RATIO_PRECISION),
            sharpe_ratio: round_half_up(sharpe_ratio, SNAPSHOT_RATIO_PRECISION),
            currency: currency.to_string(),
        }
    }
}
