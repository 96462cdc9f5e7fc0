//! Accounts module - domain models and the Position Store account contract.

mod accounts_model;
mod accounts_traits;

// Re-export the public interface
pub use accounts_model::{Account, NewAccount};
pub use accounts_traits::AccountRepositoryTrait;
