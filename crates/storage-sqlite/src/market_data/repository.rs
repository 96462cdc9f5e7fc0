use async_trait::async_trait;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::MarketPriceDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::market_prices;
use crate::utils::format_timestamp;
use budgetflow_core::errors::Result;
use budgetflow_core::market_data::{MarketPrice, MarketPriceRepositoryTrait};

/// Repository for the Market Price Feed.
pub struct MarketPriceRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl MarketPriceRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        Self { pool, writer }
    }
}

#[async_trait]
impl MarketPriceRepositoryTrait for MarketPriceRepository {
    fn get_latest_price(&self, ticker: &str, as_of: NaiveDateTime) -> Result<Option<MarketPrice>> {
        let mut conn = get_connection(&self.pool)?;

        let result = market_prices::table
            .filter(market_prices::ticker.eq(ticker))
            .filter(market_prices::timestamp.le(format_timestamp(as_of)))
            .order(market_prices::timestamp.desc())
            .select(MarketPriceDB::as_select())
            .first::<MarketPriceDB>(&mut conn)
            .optional()
            .into_core()?;

        result.map(MarketPrice::try_from).transpose()
    }

    async fn save_prices(&self, prices: &[MarketPrice]) -> Result<()> {
        if prices.is_empty() {
            return Ok(());
        }

        let db_rows: Vec<MarketPriceDB> = prices.iter().map(MarketPriceDB::from).collect();
        debug!("Saving {} market prices", db_rows.len());

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<()> {
                for chunk in db_rows.chunks(500) {
                    diesel::replace_into(market_prices::table)
                        .values(chunk)
                        .execute(conn)
                        .into_core()?;
                }
                Ok(())
            })
            .await
    }
}
