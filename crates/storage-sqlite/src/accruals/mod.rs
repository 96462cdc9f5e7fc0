//! SQLite storage implementation for the accrual ledger.

mod model;
mod repository;

pub use model::AccrualDB;
pub use repository::AccrualRepository;
