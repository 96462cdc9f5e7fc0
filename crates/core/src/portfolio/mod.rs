//! Portfolio analytics - valuation, risk, allocation, income and snapshots.

pub mod allocation;
pub mod analytics;
pub mod income;
pub mod performance;
pub mod snapshot;
pub mod valuation;

pub use allocation::*;
pub use analytics::*;
pub use income::*;
pub use performance::*;
pub use snapshot::*;
pub use valuation::*;
