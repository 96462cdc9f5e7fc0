//! Assets module - domain models and the Position Store asset contract.

mod assets_model;
mod assets_traits;


pub use assets_model::{Asset, AssetType, NewAsset};
pub use assets_traits::AssetRepositoryTrait;
