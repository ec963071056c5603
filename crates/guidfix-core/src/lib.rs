//! guidfix Core - Foundational types for lighting GUID reconciliation
//!
//! This crate provides the types that the other guidfix crates depend on:
//! - `LightingGuid` - The identifier being reconciled, nil meaning "missing"
//! - `GuidGenerator` - Sources of fresh identifiers
//! - `LocationClass`, `LocationRules` - Which content may be modified
//! - `GuidTarget` - The seam between the reconciler and asset records
//! - Configuration, error types and Result alias

mod config;
mod error;
mod guid;
mod location;
mod target;

pub use config::GuidFixConfig;
pub use error::{GuidFixError, Result};
pub use guid::{GuidGenerator, LightingGuid, RandomGuids, SequentialGuids};
pub use location::{LocationClass, LocationRules};
pub use target::GuidTarget;
