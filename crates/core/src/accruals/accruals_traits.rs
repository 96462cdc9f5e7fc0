use async_trait::async_trait;

use super::accruals_model::{Accrual, NewAccrual};
use crate::errors::Result;

/// Trait defining the contract for the Accrual Ledger.
#[async_trait]
pub trait AccrualRepositoryTrait: Send + Sync {
    async fn create(&self, new_accrual: NewAccrual) -> Result<Accrual>;

    /// Every accrual recorded for an asset, past and scheduled.
    fn list_by_asset(&self, asset_id: &str) -> Result<Vec<Accrual>>;
}
