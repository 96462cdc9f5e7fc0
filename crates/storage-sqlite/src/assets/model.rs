//! Database model for assets.

use diesel::prelude::*;

use crate::utils::parse_decimal;
use budgetflow_core::assets::{Asset, AssetType, NewAsset};
use budgetflow_core::errors::{Error, Result, ValidationError};

/// Database model for assets
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub ticker: String,
    pub asset_type: String,
    pub currency: String,
    pub quantity: String,
}

impl TryFrom<AssetDB> for Asset {
    type Error = Error;

    fn try_from(db: AssetDB) -> Result<Self> {
        let asset_type = AssetType::from_db_str(&db.asset_type).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown asset type '{}' for asset {}",
                db.asset_type, db.id
            )))
        })?;

        Ok(Self {
            quantity: parse_decimal(&db.quantity)?,
            id: db.id,
            account_id: db.account_id,
            name: db.name,
            ticker: db.ticker,
            asset_type,
            currency: db.currency,
        })
    }
}

impl From<NewAsset> for AssetDB {
    fn from(domain: NewAsset) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            account_id: domain.account_id,
            name: domain.name,
            ticker: domain.ticker,
            asset_type: domain.asset_type.as_db_str().to_string(),
            currency: domain.currency,
            quantity: domain.quantity.to_string(),
        }
    }
}
