//! Portfolio snapshot module - persisted daily portfolio records.

mod snapshot_model;
mod snapshot_traits;

#[cfg(test)]
mod snapshot_model_tests;

pub use snapshot_model::*;
pub use snapshot_traits::*;
