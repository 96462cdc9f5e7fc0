//! Database model for market prices.

use diesel::prelude::*;

use crate::utils::{format_timestamp, parse_decimal, parse_optional_decimal, parse_timestamp};
use budgetflow_core::errors::{Error, Result};
use budgetflow_core::market_data::{DataSource, MarketPrice};

/// Database model for market prices. One row per ticker and timestamp.
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::market_prices)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MarketPriceDB {
    pub id: String,
    pub ticker: String,
    pub timestamp: String,
    pub price: String,
    pub volume: Option<String>,
    pub currency: Option<String>,
    pub source: Option<String>,
}

impl MarketPriceDB {
    /// Row id derived from ticker and timestamp, so re-saving a price replaces it.
    pub fn row_id(ticker: &str, timestamp: &str) -> String {
        format!("{}_{}", ticker, timestamp)
    }
}

impl TryFrom<MarketPriceDB> for MarketPrice {
    type Error = Error;

    fn try_from(db: MarketPriceDB) -> Result<Self> {
        Ok(Self {
            timestamp: parse_timestamp(&db.timestamp)?,
            price: parse_decimal(&db.price)?,
            volume: parse_optional_decimal(db.volume.as_deref())?,
            source: db.source.as_deref().map(DataSource::from),
            ticker: db.ticker,
            currency: db.currency,
        })
    }
}

impl From<&MarketPrice> for MarketPriceDB {
    fn from(domain: &MarketPrice) -> Self {
        let timestamp = format_timestamp(domain.timestamp);
        Self {
            id: Self::row_id(&domain.ticker, &timestamp),
            ticker: domain.ticker.clone(),
            timestamp,
            price: domain.price.to_string(),
            volume: domain.volume.map(|v| v.to_string()),
            currency: domain.currency.clone(),
            source: domain.source.as_ref().map(|s| s.as_str().to_string()),
        }
    }
}
