//! Per-category fix operations over an asset catalog

use crate::reconciler::{MissingGuidPolicy, Reconciler};
use crate::report::{OutcomeStatus, ReconcileReport};
use guidfix_asset::{AssetCatalog, AssetKind};
use guidfix_core::GuidGenerator;

/// The fixes an operator can run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOperation {
    /// Missing and duplicate material GUIDs
    MaterialGuids,
    /// Duplicate texture GUIDs; missing ones are left to `EmptyTextureGuids`
    TextureGuids,
    /// Missing texture GUIDs only
    EmptyTextureGuids,
}

impl FixOperation {
    pub fn kind(&self) -> AssetKind {
        match self {
            FixOperation::MaterialGuids => AssetKind::Material,
            FixOperation::TextureGuids | FixOperation::EmptyTextureGuids => AssetKind::Texture,
        }
    }

    /// Run this fix over every asset of the matching kind, in catalog order
    pub fn run<G: GuidGenerator + ?Sized>(
        self,
        catalog: &mut AssetCatalog,
        reconciler: &mut Reconciler<'_, G>,
    ) -> FixResult {
        let mut records = catalog.records_mut(self.kind());
        log::debug!("Running {:?} over {} asset(s)", self, records.len());

        let report = match self {
            FixOperation::MaterialGuids => reconciler
                .reconcile_with_conflict_detection(&mut records, MissingGuidPolicy::AssignIfEligible),
            FixOperation::TextureGuids => reconciler
                .reconcile_with_conflict_detection(&mut records, MissingGuidPolicy::DeferToFixEmpty),
            FixOperation::EmptyTextureGuids => reconciler.assign_missing_only(&mut records),
        };

        FixResult {
            operation: self,
            report,
        }
    }

    fn clean_message(&self) -> String {
        match self {
            FixOperation::MaterialGuids | FixOperation::TextureGuids => {
                format!("No duplicate {} GUIDs found.", self.kind())
            }
            FixOperation::EmptyTextureGuids => "No empty texture GUIDs found.".to_string(),
        }
    }
}

/// Outcome of one fix operation
#[derive(Debug)]
pub struct FixResult {
    pub operation: FixOperation,
    pub report: ReconcileReport,
}

impl FixResult {
    pub fn status(&self) -> OutcomeStatus {
        self.report.outcome().status()
    }

    /// The message shown to the operator once the pass is over
    pub fn message(&self) -> String {
        let noun = self.operation.kind();
        match self.status() {
            OutcomeStatus::Clean => self.operation.clean_message(),
            OutcomeStatus::Changed => format!(
                "At least one {} GUID has been changed. Use save all to save these changes.",
                noun
            ),
            OutcomeStatus::Unresolved => format!(
                "No {} GUID has been changed, but there are some unresolvable issues (Please refer to log).",
                noun
            ),
            OutcomeStatus::PartiallyResolved => format!(
                "At least one {} GUID has been changed, but there are some unresolvable issues (Please refer to log). Use save all to save these changes.",
                noun
            ),
        }
    }
}

/// Fix missing and duplicate material GUIDs
pub fn fix_material_guids<G: GuidGenerator + ?Sized>(
    catalog: &mut AssetCatalog,
    reconciler: &mut Reconciler<'_, G>,
) -> FixResult {
    FixOperation::MaterialGuids.run(catalog, reconciler)
}

/// Fix duplicate texture GUIDs
pub fn fix_texture_guids<G: GuidGenerator + ?Sized>(
    catalog: &mut AssetCatalog,
    reconciler: &mut Reconciler<'_, G>,
) -> FixResult {
    FixOperation::TextureGuids.run(catalog, reconciler)
}

/// Fix missing texture GUIDs
pub fn fix_empty_texture_guids<G: GuidGenerator + ?Sized>(
    catalog: &mut AssetCatalog,
    reconciler: &mut Reconciler<'_, G>,
) -> FixResult {
    FixOperation::EmptyTextureGuids.run(catalog, reconciler)
}
