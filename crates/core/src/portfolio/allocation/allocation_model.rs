//! Allocation models for portfolio breakdowns and rebalancing.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market value summed per asset type and per currency.
///
/// Keys are the asset type names (`stock`, `bond`, ...) and the asset currency
/// codes as stored. Values are summed as-is; no currency conversion happens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationBreakdown {
    pub by_type: HashMap<String, Decimal>,
    pub by_currency: HashMap<String, Decimal>,
}

impl AllocationBreakdown {
    pub fn add(&mut self, asset_type: &str, currency: &str, value: Decimal) {
        *self
            .by_type
            .entry(asset_type.to_string())
            .or_insert(Decimal::ZERO) += value;
        *self
            .by_currency
            .entry(currency.to_string())
            .or_insert(Decimal::ZERO) += value;
    }
}

/// Result of a rebalance request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalanceRecommendation {
    pub total_value: Decimal,
    /// Current value per asset type.
    pub current: HashMap<String, Decimal>,
    /// Target percentages exactly as requested.
    pub target: HashMap<String, Decimal>,
    /// Signed money delta per requested type. Positive means buy.
    pub recommendations: HashMap<String, Decimal>,
}
