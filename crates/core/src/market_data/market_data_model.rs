//! Market price domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Data source identifiers
pub const DATA_SOURCE_BROKER: &str = "BROKER";
pub const DATA_SOURCE_MANUAL: &str = "MANUAL";
pub const DATA_SOURCE_IMPORT: &str = "IMPORT";

/// Where a price point came from. Informational only; valuation ignores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataSource {
    /// Pulled from a broker integration
    Broker,
    /// Loaded from a file import
    Import,
    /// Manual entry by user
    #[default]
    Manual,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Broker => DATA_SOURCE_BROKER,
            DataSource::Import => DATA_SOURCE_IMPORT,
            DataSource::Manual => DATA_SOURCE_MANUAL,
        }
    }
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            DATA_SOURCE_BROKER => DataSource::Broker,
            DATA_SOURCE_IMPORT => DataSource::Import,
            _ => DataSource::Manual,
        }
    }
}

/// A price observation for a ticker at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrice {
    pub ticker: String,
    pub timestamp: NaiveDateTime,
    pub price: Decimal,
    pub volume: Option<Decimal>,
    pub currency: Option<String>,
    pub source: Option<DataSource>,
}
