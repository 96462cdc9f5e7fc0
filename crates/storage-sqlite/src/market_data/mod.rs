//! SQLite storage implementation for market prices.

mod model;
mod repository;

pub use model::MarketPriceDB;
pub use repository::MarketPriceRepository;
