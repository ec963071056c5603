//! Reconciliation report types

use guidfix_core::LightingGuid;
use std::fmt;

/// A lighting GUID that was assigned or reassigned during a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidChange {
    pub path: String,
    /// Nil when the asset had no GUID before the pass
    pub previous: LightingGuid,
    pub assigned: LightingGuid,
}

/// Why an asset could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WarningKind {
    /// Invalid GUID on an asset that may not be modified
    MissingIneligible,
    /// Invalid GUID left for the dedicated empty-GUID fix
    MissingDeferred,
    /// Duplicate GUID where neither side may be modified
    Conflict { peer: String },
}

/// A single unresolved asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidWarning {
    pub path: String,
    /// Capitalized asset kind, e.g. "Texture"
    pub subject: String,
    pub kind: WarningKind,
}

impl fmt::Display for GuidWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            WarningKind::MissingIneligible => write!(
                f,
                "{}: {} has invalid GUID but is outside project content and is not modified.",
                self.path, self.subject
            ),
            WarningKind::MissingDeferred => write!(
                f,
                "{}: {} has invalid GUID but is not modified. Fix this by running the empty GUID fix.",
                self.path, self.subject
            ),
            WarningKind::Conflict { peer } => write!(
                f,
                "{}: {} has conflicting GUID with {} but both are outside project content and are not modified.",
                self.path, self.subject, peer
            ),
        }
    }
}

/// Aggregate result flags of one pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub changed: bool,
    pub has_warnings: bool,
}

/// The four outcome classes shown to the operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Nothing to do
    Clean,
    /// Something changed; a save is needed
    Changed,
    /// Nothing changed, problems remain
    Unresolved,
    /// Something changed and problems remain; a save is needed
    PartiallyResolved,
}

impl Outcome {
    pub fn status(&self) -> OutcomeStatus {
        match (self.changed, self.has_warnings) {
            (false, false) => OutcomeStatus::Clean,
            (true, false) => OutcomeStatus::Changed,
            (false, true) => OutcomeStatus::Unresolved,
            (true, true) => OutcomeStatus::PartiallyResolved,
        }
    }
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Clean => "clean",
            OutcomeStatus::Changed => "changed",
            OutcomeStatus::Unresolved => "unresolved",
            OutcomeStatus::PartiallyResolved => "partially_resolved",
        }
    }

    /// Whether the operator should save afterwards
    pub fn needs_save(&self) -> bool {
        matches!(self, OutcomeStatus::Changed | OutcomeStatus::PartiallyResolved)
    }
}

/// Everything one pass did, in visit order
#[derive(Debug, Default)]
pub struct ReconcileReport {
    pub changes: Vec<GuidChange>,
    pub warnings: Vec<GuidWarning>,
}

impl ReconcileReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> Outcome {
        Outcome {
            changed: !self.changes.is_empty(),
            has_warnings: !self.warnings.is_empty(),
        }
    }

    /// Paths of assets that now need saving, without repeats
    pub fn changed_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for change in &self.changes {
            if !paths.contains(&change.path.as_str()) {
                paths.push(&change.path);
            }
        }
        paths
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} GUID change(s), {} unresolved",
            self.changes.len(),
            self.warnings.len()
        )
    }
}
