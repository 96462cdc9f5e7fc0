use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::PortfolioSnapshotDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::portfolio_snapshots;
use crate::utils::format_date;
use budgetflow_core::errors::Result;
use budgetflow_core::portfolio::snapshot::{
    NewPortfolioSnapshot, PortfolioSnapshot, SnapshotRepositoryTrait,
};

/// Repository for the Snapshot Store.
pub struct SnapshotRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl SnapshotRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl SnapshotRepositoryTrait for SnapshotRepository {
    async fn upsert_snapshot(&self, snapshot: NewPortfolioSnapshot) -> Result<PortfolioSnapshot> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<PortfolioSnapshot> {
                let date_str = format_date(snapshot.snapshot_date);

                // Same user and day keeps its row id.
                let existing_id = portfolio_snapshots::table
                    .filter(portfolio_snapshots::user_id.eq(&snapshot.user_id))
                    .filter(portfolio_snapshots::snapshot_date.eq(&date_str))
                    .select(portfolio_snapshots::id)
                    .first::<String>(conn)
                    .optional()
                    .into_core()?;
                let id = existing_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

                let row = PortfolioSnapshotDB::new(id, snapshot);
                diesel::replace_into(portfolio_snapshots::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;
                debug!(
                    "Stored portfolio snapshot {} for user {} on {}",
                    row.id, row.user_id, row.snapshot_date
                );

                PortfolioSnapshot::try_from(row)
            })
            .await
    }

    fn list_snapshots_since(
        &self,
        user_id: &str,
        since: NaiveDate,
    ) -> Result<Vec<PortfolioSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        portfolio_snapshots::table
            .filter(portfolio_snapshots::user_id.eq(user_id))
            .filter(portfolio_snapshots::snapshot_date.ge(format_date(since)))
            .order(portfolio_snapshots::snapshot_date.asc())
            .select(PortfolioSnapshotDB::as_select())
            .load::<PortfolioSnapshotDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(PortfolioSnapshot::try_from)
            .collect()
    }

    fn list_snapshots(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>> {
        let mut conn = get_connection(&self.pool)?;

        portfolio_snapshots::table
            .filter(portfolio_snapshots::user_id.eq(user_id))
            .order(portfolio_snapshots::snapshot_date.desc())
            .select(PortfolioSnapshotDB::as_select())
            .load::<PortfolioSnapshotDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(PortfolioSnapshot::try_from)
            .collect()
    }
}
