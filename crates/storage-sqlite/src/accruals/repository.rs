use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::AccrualDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::accruals;
use budgetflow_core::accruals::{Accrual, AccrualRepositoryTrait, NewAccrual};
use budgetflow_core::errors::Result;

/// Repository for the Accrual Ledger.
pub struct AccrualRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AccrualRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AccrualRepositoryTrait for AccrualRepository {
    async fn create(&self, new_accrual: NewAccrual) -> Result<Accrual> {
        new_accrual.validate()?;

        let mut accrual_db: AccrualDB = new_accrual.into();
        if accrual_db.id.is_empty() {
            accrual_db.id = uuid::Uuid::new_v4().to_string();
        }

        self.writer
            .exec(move |conn| {
                diesel::insert_into(accruals::table)
                    .values(&accrual_db)
                    .execute(conn)
                    .into_core()?;
                Accrual::try_from(accrual_db)
            })
            .await
    }

    fn list_by_asset(&self, asset_id: &str) -> Result<Vec<Accrual>> {
        let mut conn = get_connection(&self.pool)?;

        accruals::table
            .filter(accruals::asset_id.eq(asset_id))
            .select(AccrualDB::as_select())
            .order((accruals::accrual_date.asc(), accruals::id.asc()))
            .load::<AccrualDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Accrual::try_from)
            .collect()
    }
}
