//! Valuation module - average cost, current price and per-asset valuation.

mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::{average_cost, resolve_current_price, return_pct, value_asset};
pub use valuation_model::{AssetValuation, PriceSource};
