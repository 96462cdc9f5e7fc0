use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where an asset's current price came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceSource {
    /// Latest price from the market price feed.
    Market,
    /// No price known; the average purchase cost stands in.
    AverageCost,
}

/// Valuation of a single held asset at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuation {
    pub asset_id: String,
    pub quantity: Decimal,
    pub average_cost: Decimal,
    pub current_price: Decimal,
    pub price_source: PriceSource,
    /// Current price times quantity.
    pub market_value: Decimal,
    /// Cost contribution under the configured cost basis mode.
    pub cost_basis: Decimal,
}

impl AssetValuation {
    pub fn unrealized_gain(&self) -> Decimal {
        self.market_value - self.cost_basis
    }
}
