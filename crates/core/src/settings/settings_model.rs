use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_MONTHS, DEFAULT_REPORTING_CURRENCY, DEFAULT_RISK_LOOKBACK_MONTHS,
};
use crate::errors::{Error, Result, ValidationError};

/// How an asset's cost contributes to portfolio totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CostBasisMode {
    /// The asset's cost is its weighted average unit cost, not scaled by quantity.
    /// Totals and returns are computed from these per-unit figures.
    #[default]
    PerUnit,
    /// The asset's cost is its weighted average unit cost times the held quantity.
    Total,
}

impl fmt::Display for CostBasisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostBasisMode::PerUnit => f.write_str("per_unit"),
            CostBasisMode::Total => f.write_str("total"),
        }
    }
}

impl FromStr for CostBasisMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per_unit" | "perunit" | "unit" => Ok(CostBasisMode::PerUnit),
            "total" => Ok(CostBasisMode::Total),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown cost basis mode '{}'",
                other
            )))),
        }
    }
}

/// Tunables of the analytics engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSettings {
    /// Currency label written on persisted snapshots. No conversion happens.
    pub reporting_currency: String,
    /// Snapshot history window feeding the risk ratio.
    pub risk_lookback_months: u32,
    /// Dividend calendar horizon when the caller gives none.
    pub default_calendar_months: u32,
    pub cost_basis_mode: CostBasisMode,
}

impl Default for AnalyticsSettings {
    fn default() -> Self {
        Self {
            reporting_currency: DEFAULT_REPORTING_CURRENCY.to_string(),
            risk_lookback_months: DEFAULT_RISK_LOOKBACK_MONTHS,
            default_calendar_months: DEFAULT_CALENDAR_MONTHS,
            cost_basis_mode: CostBasisMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behaviour() {
        let settings = AnalyticsSettings::default();
        assert_eq!(settings.reporting_currency, "RUB");
        assert_eq!(settings.risk_lookback_months, 12);
        assert_eq!(settings.default_calendar_months, 12);
        assert_eq!(settings.cost_basis_mode, CostBasisMode::PerUnit);
    }

    #[test]
    fn cost_basis_mode_parses() {
        assert_eq!("TOTAL".parse::<CostBasisMode>().unwrap(), CostBasisMode::Total);
        assert_eq!(
            "per_unit".parse::<CostBasisMode>().unwrap(),
            CostBasisMode::PerUnit
        );
        assert!("fifo".parse::<CostBasisMode>().is_err());
    }
}
