//! Portfolio allocation module - breakdowns by asset type and currency, and
//! rebalance deltas.

mod allocation_calculator;
mod allocation_model;

pub use allocation_calculator::*;
pub use allocation_model::*;
