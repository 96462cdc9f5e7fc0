//! Database model for portfolio snapshots.

use diesel::prelude::*;

use crate::utils::{format_date, now_timestamp, parse_date, parse_decimal, parse_timestamp};
use budgetflow_core::errors::{Error, Result};
use budgetflow_core::portfolio::snapshot::{NewPortfolioSnapshot, PortfolioSnapshot};

/// Database model for portfolio snapshots
#[derive(Queryable, Identifiable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::portfolio_snapshots)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PortfolioSnapshotDB {
    pub id: String,
    pub user_id: String,
    pub snapshot_date: String,
    pub total_value: String,
    pub total_cost: String,
    pub total_return_pct: String,
    pub sharpe_ratio: String,
    pub currency: String,
    pub created_at: String,
}

impl PortfolioSnapshotDB {
    /// Row for `snapshot` under the given id, stamped with the current time.
    pub fn new(id: String, snapshot: NewPortfolioSnapshot) -> Self {
        Self {
            id,
            user_id: snapshot.user_id,
            snapshot_date: format_date(snapshot.snapshot_date),
            total_value: snapshot.total_value.to_string(),
            total_cost: snapshot.total_cost.to_string(),
            total_return_pct: snapshot.total_return_pct.to_string(),
            sharpe_ratio: snapshot.sharpe_ratio.to_string(),
            currency: snapshot.currency,
            created_at: now_timestamp(),
        }
    }
}

impl TryFrom<PortfolioSnapshotDB> for PortfolioSnapshot {
    type Error = Error;

    fn try_from(db: PortfolioSnapshotDB) -> Result<Self> {
        Ok(Self {
            snapshot_date: parse_date(&db.snapshot_date)?,
            total_value: parse_decimal(&db.total_value)?,
            total_cost: parse_decimal(&db.total_cost)?,
            total_return_pct: parse_decimal(&db.total_return_pct)?,
            sharpe_ratio: parse_decimal(&db.sharpe_ratio)?,
            created_at: parse_timestamp(&db.created_at)?,
            id: db.id,
            user_id: db.user_id,
            currency: db.currency,
        })
    }
}
