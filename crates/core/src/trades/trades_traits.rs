use async_trait::async_trait;

use super::trades_model::{NewTrade, Trade};
use crate::errors::Result;

/// Trait defining the contract for the Trade Ledger.
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    async fn create(&self, new_trade: NewTrade) -> Result<Trade>;

    /// All trades of an asset, oldest first.
    fn list_by_asset(&self, asset_id: &str) -> Result<Vec<Trade>>;

    /// BUY trades of an asset, oldest first.
    fn list_buys_by_asset(&self, asset_id: &str) -> Result<Vec<Trade>>;
}
