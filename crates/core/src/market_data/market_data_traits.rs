use async_trait::async_trait;
use chrono::NaiveDateTime;

use super::market_data_model::MarketPrice;
use crate::errors::Result;

/// Trait defining the contract for the Market Price Feed.
#[async_trait]
pub trait MarketPriceRepositoryTrait: Send + Sync {
    /// Latest price recorded for `ticker` at or before `as_of`, if any.
    fn get_latest_price(&self, ticker: &str, as_of: NaiveDateTime) -> Result<Option<MarketPrice>>;

    async fn save_prices(&self, prices: &[MarketPrice]) -> Result<()>;
}
