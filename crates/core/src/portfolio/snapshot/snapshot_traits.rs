//! Repository trait for portfolio snapshots.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{NewPortfolioSnapshot, PortfolioSnapshot};
use crate::errors::Result;

/// Trait defining the contract for the Snapshot Store.
#[async_trait]
pub trait SnapshotRepositoryTrait: Send + Sync {
    /// Inserts the snapshot, replacing any existing one for the same user and date.
    async fn upsert_snapshot(&self, snapshot: NewPortfolioSnapshot) -> Result<PortfolioSnapshot>;

    /// Snapshots of a user dated on or after `since`, oldest first.
    fn list_snapshots_since(&self, user_id: &str, since: NaiveDate)
        -> Result<Vec<PortfolioSnapshot>>;

    /// Every snapshot of a user, newest first.
    fn list_snapshots(&self, user_id: &str) -> Result<Vec<PortfolioSnapshot>>;
}
