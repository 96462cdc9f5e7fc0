use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use super::model::TradeDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::trades;
use budgetflow_core::errors::Result;
use budgetflow_core::trades::{NewTrade, Trade, TradeRepositoryTrait, TradeSide};

/// Repository for the Trade Ledger.
pub struct TradeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl TradeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }

    fn load(&self, asset_id: &str, side: Option<TradeSide>) -> Result<Vec<Trade>> {
        let mut conn = get_connection(&self.pool)?;

        let mut query = trades::table
            .filter(trades::asset_id.eq(asset_id))
            .into_boxed();
        if let Some(side) = side {
            query = query.filter(trades::side.eq(side.as_db_str()));
        }

        query
            .select(TradeDB::as_select())
            .order((trades::trade_date.asc(), trades::created_at.asc(), trades::id.asc()))
            .load::<TradeDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Trade::try_from)
            .collect()
    }
}

#[async_trait]
impl TradeRepositoryTrait for TradeRepository {
    async fn create(&self, new_trade: NewTrade) -> Result<Trade> {
        new_trade.validate()?;

        let mut trade_db: TradeDB = new_trade.into();
        if trade_db.id.is_empty() {
            trade_db.id = uuid::Uuid::new_v4().to_string();
        }

        self.writer
            .exec(move |conn| {
                diesel::insert_into(trades::table)
                    .values(&trade_db)
                    .execute(conn)
                    .into_core()?;
                Trade::try_from(trade_db)
            })
            .await
    }

    fn list_by_asset(&self, asset_id: &str) -> Result<Vec<Trade>> {
        self.load(asset_id, None)
    }

    fn list_buys_by_asset(&self, asset_id: &str) -> Result<Vec<Trade>> {
        self.load(asset_id, Some(TradeSide::Buy))
    }
}
