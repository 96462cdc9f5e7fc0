//! Accruals module - the Accrual Ledger contract and income events.

mod accruals_model;
mod accruals_traits;

pub use accruals_model::{Accrual, AccrualKind, NewAccrual};
pub use accruals_traits::AccrualRepositoryTrait;
