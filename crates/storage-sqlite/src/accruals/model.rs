//! Database model for accruals.

use diesel::prelude::*;

use crate::utils::{format_date, now_timestamp, parse_date, parse_decimal};
use budgetflow_core::accruals::{Accrual, AccrualKind, NewAccrual};
use budgetflow_core::errors::{Error, Result, ValidationError};

/// Database model for accruals
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::accruals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AccrualDB {
    pub id: String,
    pub asset_id: String,
    pub kind: String,
    pub accrual_date: String,
    pub amount: String,
    pub created_at: String,
}

impl TryFrom<AccrualDB> for Accrual {
    type Error = Error;

    fn try_from(db: AccrualDB) -> Result<Self> {
        let kind = AccrualKind::from_db_str(&db.kind).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown accrual kind '{}' for accrual {}",
                db.kind, db.id
            )))
        })?;

        Ok(Self {
            kind,
            accrual_date: parse_date(&db.accrual_date)?,
            amount: parse_decimal(&db.amount)?,
            id: db.id,
            asset_id: db.asset_id,
        })
    }
}

impl From<NewAccrual> for AccrualDB {
    fn from(domain: NewAccrual) -> Self {
        Self {
            id: domain.id.unwrap_or_default(),
            asset_id: domain.asset_id,
            kind: domain.kind.as_db_str().to_string(),
            accrual_date: format_date(domain.accrual_date),
            amount: domain.amount.to_string(),
            created_at: now_timestamp(),
        }
    }
}
