//! guidfix Reconcile - Lighting GUID conflict detection and repair
//!
//! This crate finds assets with missing or duplicated lighting GUIDs, gives
//! the ones that may be modified fresh values, and reports what it could not
//! resolve.

mod fixes;
mod reconciler;
mod report;

pub use fixes::{fix_empty_texture_guids, fix_material_guids, fix_texture_guids, FixOperation, FixResult};
pub use reconciler::{MissingGuidPolicy, Reconciler};
pub use report::{GuidChange, GuidWarning, Outcome, OutcomeStatus, ReconcileReport, WarningKind};
