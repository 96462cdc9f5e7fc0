//! Market data module - price points and the Market Price Feed contract.

mod market_data_model;
mod market_data_traits;

// Re-export the public interface
pub use market_data_model::{
    DataSource, MarketPrice, DATA_SOURCE_BROKER, DATA_SOURCE_IMPORT, DATA_SOURCE_MANUAL,
};
pub use market_data_traits::MarketPriceRepositoryTrait;
