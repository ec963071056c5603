//! The record capability the reconciler works against

use crate::guid::LightingGuid;

/// A live asset whose lighting identifier can be read, replaced, and
/// flagged as pending save.
pub trait GuidTarget {
    /// Asset path, used both for location classification and for log lines
    fn path(&self) -> &str;

    /// Capitalized kind used at the start of log lines, e.g. "Material"
    fn kind_label(&self) -> &str {
        "Asset"
    }

    fn lighting_guid(&self) -> LightingGuid;

    fn set_lighting_guid(&mut self, guid: LightingGuid);

    /// Record that this asset has unsaved changes
    fn mark_dirty(&mut self);
}

impl<T: GuidTarget + ?Sized> GuidTarget for &mut T {
    fn path(&self) -> &str {
        (**self).path()
    }

    fn kind_label(&self) -> &str {
        (**self).kind_label()
    }

    fn lighting_guid(&self) -> LightingGuid {
        (**self).lighting_guid()
    }

    fn set_lighting_guid(&mut self, guid: LightingGuid) {
        (**self).set_lighting_guid(guid)
    }

    fn mark_dirty(&mut self) {
        (**self).mark_dirty()
    }
}
