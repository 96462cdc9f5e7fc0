use async_trait::async_trait;
use diesel::prelude::*;
use log::debug;
use std::sync::Arc;

use super::model::AssetDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::assets;
use budgetflow_core::assets::{Asset, AssetRepositoryTrait, NewAsset};
use budgetflow_core::errors::Result;

/// Repository for the Position Store: assets held inside accounts.
pub struct AssetRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AssetRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;

        let mut asset_db: AssetDB = new_asset.into();
        if asset_db.id.is_empty() {
            asset_db.id = uuid::Uuid::new_v4().to_string();
        }
        debug!(
            "Creating asset {} ({}) in account {}",
            asset_db.id, asset_db.ticker, asset_db.account_id
        );

        self.writer
            .exec(move |conn| {
                diesel::insert_into(assets::table)
                    .values(&asset_db)
                    .execute(conn)
                    .into_core()?;
                Asset::try_from(asset_db)
            })
            .await
    }

    fn get_by_id(&self, asset_id: &str) -> Result<Asset> {
        let mut conn = get_connection(&self.pool)?;

        let asset = assets::table
            .find(asset_id)
            .select(AssetDB::as_select())
            .first::<AssetDB>(&mut conn)
            .into_core()?;

        Asset::try_from(asset)
    }

    fn list_by_account(&self, account_id: &str) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        assets::table
            .filter(assets::account_id.eq(account_id))
            .select(AssetDB::as_select())
            .order(assets::id.asc())
            .load::<AssetDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Asset::try_from)
            .collect()
    }
}
