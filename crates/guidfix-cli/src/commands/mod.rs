//! CLI command implementations

pub mod fix;
pub mod list;
