//! Accrual domain models (dividend and coupon events).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccrualKind {
    Dividend,
    Coupon,
}

impl AccrualKind {
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AccrualKind::Dividend => "DIVIDEND",
            AccrualKind::Coupon => "COUPON",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DIVIDEND" => Some(AccrualKind::Dividend),
            "COUPON" => Some(AccrualKind::Coupon),
            _ => None,
        }
    }
}

/// An income payment tied to an asset and a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accrual {
    pub id: String,
    pub asset_id: String,
    pub kind: AccrualKind,
    pub accrual_date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccrual {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub asset_id: String,
    pub kind: AccrualKind,
    pub accrual_date: NaiveDate,
    pub amount: Decimal,
}

impl NewAccrual {
    pub fn validate(&self) -> Result<()> {
        if self.asset_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "assetId".to_string(),
            )));
        }
        if self.amount <= Decimal::ZERO {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Accrual amount must be positive".to_string(),
            )));
        }
        Ok(())
    }
}
