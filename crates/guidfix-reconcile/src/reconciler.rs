//! Lighting GUID reconciliation passes

use crate::report::{GuidChange, GuidWarning, ReconcileReport, WarningKind};
use guidfix_core::{GuidGenerator, GuidTarget, LightingGuid, LocationRules};
use std::collections::HashMap;

/// What a conflict-detection pass does with assets that have no GUID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingGuidPolicy {
    /// Assign a fresh GUID when the asset may be modified
    AssignIfEligible,
    /// Leave the asset alone and warn; the empty-GUID fix handles it
    DeferToFixEmpty,
}

/// Assigns fresh lighting GUIDs to missing or duplicated ones.
///
/// Only assets classified as project content are ever modified. Each pass
/// builds its own GUID table and keeps nothing afterwards.
pub struct Reconciler<'a, G: GuidGenerator + ?Sized> {
    rules: &'a LocationRules,
    generator: &'a mut G,
}

impl<'a, G: GuidGenerator + ?Sized> Reconciler<'a, G> {
    /// Create a new reconciler
    pub fn new(rules: &'a LocationRules, generator: &'a mut G) -> Self {
        Self { rules, generator }
    }

    /// Give duplicated GUIDs fresh values, visiting `records` in order.
    ///
    /// The first asset seen with a GUID becomes its holder. When a later asset
    /// carries the same GUID, the holder is reassigned if it is still holding
    /// that GUID and may be modified, and the later asset is reassigned if it
    /// may be modified. Both can happen for the same conflict. If neither can
    /// be touched the conflict is reported and the table is left as is.
    pub fn reconcile_with_conflict_detection<R: GuidTarget>(
        &mut self,
        records: &mut [R],
        missing: MissingGuidPolicy,
    ) -> ReconcileReport {
        let mut report = ReconcileReport::new();
        let mut table: HashMap<LightingGuid, usize> = HashMap::with_capacity(records.len());

        log::debug!("Checking {} asset(s) for duplicate lighting GUIDs", records.len());

        for index in 0..records.len() {
            if !records[index].lighting_guid().is_valid() {
                match missing {
                    MissingGuidPolicy::AssignIfEligible if self.is_eligible(&records[index]) => {
                        self.assign(&mut records[index], &mut report);
                    }
                    MissingGuidPolicy::AssignIfEligible => {
                        Self::warn(&mut report, &records[index], WarningKind::MissingIneligible);
                        continue;
                    }
                    MissingGuidPolicy::DeferToFixEmpty => {
                        Self::warn(&mut report, &records[index], WarningKind::MissingDeferred);
                        continue;
                    }
                }
            }

            let current = records[index].lighting_guid();
            let Some(&holder) = table.get(&current) else {
                table.insert(current, index);
                continue;
            };

            let mut any_modified = false;

            if records[holder].lighting_guid() == current && self.is_eligible(&records[holder]) {
                let reassigned = self.assign(&mut records[holder], &mut report);
                table.remove(&current);
                table.insert(reassigned, holder);
                any_modified = true;
            }

            if self.is_eligible(&records[index]) {
                let reassigned = self.assign(&mut records[index], &mut report);
                table.insert(reassigned, index);
                any_modified = true;
            }

            if !any_modified {
                let peer = records[holder].path().to_string();
                Self::warn(&mut report, &records[index], WarningKind::Conflict { peer });
            }
        }

        log::debug!("Duplicate check finished: {}", report.summary());
        report
    }

    /// Give every asset without a GUID a fresh one, when it may be modified.
    ///
    /// Assets that already have a GUID are never compared or touched.
    pub fn assign_missing_only<R: GuidTarget>(&mut self, records: &mut [R]) -> ReconcileReport {
        let mut report = ReconcileReport::new();

        for record in records.iter_mut() {
            if record.lighting_guid().is_valid() {
                continue;
            }

            if self.is_eligible(&*record) {
                self.assign(record, &mut report);
            } else {
                Self::warn(&mut report, &*record, WarningKind::MissingIneligible);
            }
        }

        log::debug!("Empty GUID fix finished: {}", report.summary());
        report
    }

    fn is_eligible<R: GuidTarget>(&self, record: &R) -> bool {
        self.rules.is_eligible(record.path())
    }

    fn assign<R: GuidTarget>(&mut self, record: &mut R, report: &mut ReconcileReport) -> LightingGuid {
        let previous = record.lighting_guid();
        let assigned = self.generator.generate();
        record.set_lighting_guid(assigned);
        record.mark_dirty();

        log::info!(
            "{}: {} has had its GUID updated ({} -> {}).",
            record.path(),
            record.kind_label(),
            previous,
            assigned
        );
        report.changes.push(GuidChange {
            path: record.path().to_string(),
            previous,
            assigned,
        });
        assigned
    }

    fn warn<R: GuidTarget>(report: &mut ReconcileReport, record: &R, kind: WarningKind) {
        let warning = GuidWarning {
            path: record.path().to_string(),
            subject: record.kind_label().to_string(),
            kind,
        };
        log::warn!("{}", warning);
        report.warnings.push(warning);
    }
}
