//! SQLite storage implementation for portfolio data.

pub mod snapshot;
