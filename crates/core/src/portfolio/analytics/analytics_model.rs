use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{Asset, AssetType};
use crate::portfolio::valuation::{return_pct, AssetValuation, PriceSource};

/// Valuation detail of one held asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetAnalytics {
    pub asset_id: String,
    pub account_id: String,
    pub name: String,
    pub ticker: String,
    pub asset_type: AssetType,
    pub currency: String,
    pub quantity: Decimal,
    pub current_price: Decimal,
    pub price_source: PriceSource,
    pub value: Decimal,
    pub cost: Decimal,
    pub return_pct: Decimal,
}

impl AssetAnalytics {
    pub fn new(asset: &Asset, valuation: &AssetValuation) -> Self {
        Self {
            asset_id: asset.id.clone(),
            account_id: asset.account_id.clone(),
            name: asset.name.clone(),
            ticker: asset.ticker.clone(),
            asset_type: asset.asset_type,
            currency: asset.currency.clone(),
            quantity: valuation.quantity,
            current_price: valuation.current_price,
            price_source: valuation.price_source,
            value: valuation.market_value,
            cost: valuation.cost_basis,
            return_pct: return_pct(valuation.market_value, valuation.cost_basis),
        }
    }
}

/// Portfolio-wide analytics for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAnalytics {
    pub total_value: Decimal,
    pub total_cost: Decimal,
    pub total_return_pct: Decimal,
    pub sharpe_ratio: Decimal,
    pub by_type: HashMap<String, Decimal>,
    pub by_currency: HashMap<String, Decimal>,
    /// Held assets ordered by asset id.
    pub asset_details: Vec<AssetAnalytics>,
}

impl PortfolioAnalytics {
    /// All-zero analytics for a user without accounts.
    pub fn empty() -> Self {
        Self::default()
    }
}
