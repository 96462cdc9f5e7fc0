/// Decimal places kept for snapshot value and cost
pub const SNAPSHOT_AMOUNT_PRECISION: u32 = 2;

/// Decimal places kept for snapshot return and Sharpe ratio
pub const SNAPSHOT_RATIO_PRECISION: u32 = 4;

/// Default projection horizon for the dividend calendar, in months
pub const DEFAULT_CALENDAR_MONTHS: u32 = 12;

/// Default snapshot history window for the risk ratio, in months
pub const DEFAULT_RISK_LOOKBACK_MONTHS: u32 = 12;

/// Reporting currency stamped on snapshots when none is configured
pub const DEFAULT_REPORTING_CURRENCY: &str = "RUB";

/// Minimum number of snapshots needed to compute a risk ratio
pub const MIN_SNAPSHOTS_FOR_RISK: usize = 2;
