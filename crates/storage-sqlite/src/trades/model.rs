//! Database model for trades.

use diesel::prelude::*;

use crate::utils::{format_date, now_timestamp, parse_date, parse_decimal};
use budgetflow_core::errors::{Error, Result, ValidationError};
use budgetflow_core::trades::{NewTrade, Trade, TradeSide};

/// Database model for trades
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::trades)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TradeDB {
    pub id: String,
    pub asset_id: String,
    pub side: String,
    pub trade_date: String,
    pub quantity: String,
    pub price: String,
    pub fee: String,
    pub created_at: String,
}

impl TryFrom<TradeDB> for Trade {
    type Error = Error;

    fn try_from(db: TradeDB) -> Result<Self> {
        let side = TradeSide::from_db_str(&db.side).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown trade side '{}' for trade {}",
                db.side, db.id
            )))
        })?;

        Ok(Self {
            side,
            trade_date: parse_date(&db.trade_date)?,
            quantity: parse_decimal(&db.quantity)?,
            price: parse_decimal(&db.price)?,
            fee: parse_decimal(&db.fee)?,
            id: db.id,
            asset_id: db.asset_id,
        })
    }
}

impl From<NewTrade> for TradeDB {
    fn from(domain: NewTrade) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            asset_id: domain.asset_id,
            side: domain.side.as_db_str().to_string(),
            trade_date: format_date(domain.trade_date),
            quantity: domain.quantity.to_string(),
            price: domain.price.to_string(),
            fee: domain.fee.to_string(),
            created_at: now_timestamp(),
        }
    }
}
