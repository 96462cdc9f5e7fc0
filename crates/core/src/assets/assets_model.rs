//! Asset domain models.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::Error;

/// Semantic asset classification used for allocation breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Stock,
    Bond,
    Fund,
    Crypto,
    Cash,
}

impl AssetType {
    /// Returns the database (and allocation key) representation.
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::Bond => "bond",
            AssetType::Fund => "fund",
            AssetType::Crypto => "crypto",
            AssetType::Cash => "cash",
        }
    }

    /// Parses an asset type from its database string (case-insensitive).
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stock" => Some(AssetType::Stock),
            "bond" => Some(AssetType::Bond),
            "fund" => Some(AssetType::Fund),
            "crypto" => Some(AssetType::Crypto),
            "cash" => Some(AssetType::Cash),
            _ => None,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_db_str())
    }
}

impl FromStr for AssetType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        AssetType::from_db_str(s).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown asset type '{}'",
                s
            )))
        })
    }
}

/// Domain model representing a holding inside an account.
///
/// `quantity` is maintained by trade processing outside the analytics engine;
/// the engine reads it as a point-in-time value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub ticker: String,
    pub asset_type: AssetType,
    pub currency: String,
    pub quantity: Decimal,
}

impl Asset {
    /// Assets with a non-positive quantity take no part in valuation or allocation.
    pub fn is_held(&self) -> bool {
        self.quantity > Decimal::ZERO
    }
}

/// Input model for creating a new asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub name: String,
    pub ticker: String,
    pub asset_type: AssetType,
    pub currency: String,
    pub quantity: Decimal,
}

impl NewAsset {
    pub fn validate(&self) -> Result<()> {
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        if self.ticker.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Ticker cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Currency cannot be empty".to_string(),
            )));
        }
        Ok(())
    }
}
