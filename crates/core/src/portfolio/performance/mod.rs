//! Performance module - portfolio return and risk ratios.

mod risk_calculator;

pub use risk_calculator::{mean_and_volatility, sharpe_ratio, total_return_pct};
