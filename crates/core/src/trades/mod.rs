//! Trades module - the Trade Ledger contract and trade records.

mod trades_model;
mod trades_traits;

pub use trades_model::{NewTrade, Trade, TradeSide};
pub use trades_traits::TradeRepositoryTrait;
