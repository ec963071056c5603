//! guidfix Asset - Asset records and their catalog
//!
//! This crate models the live assets whose lighting GUIDs are reconciled and
//! provides the catalog that enumerates them by kind.

mod catalog;
mod types;

pub use catalog::AssetCatalog;
pub use types::{AssetFile, AssetKind, AssetRecord};
