//! Asset type definitions

use guidfix_core::{GuidTarget, LightingGuid};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of assets that carry a lighting GUID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Material,
    Texture,
}

impl AssetKind {
    /// Lowercase noun used in log lines and messages
    pub fn noun(&self) -> &'static str {
        match self {
            AssetKind::Material => "material",
            AssetKind::Texture => "texture",
        }
    }

    /// Capitalized form for the start of a log line
    pub fn label(&self) -> &'static str {
        match self {
            AssetKind::Material => "Material",
            AssetKind::Texture => "Texture",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// One live asset instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(default)]
    pub lighting_guid: LightingGuid,
    /// Set when the lighting GUID changed and the asset awaits saving
    #[serde(skip)]
    pub dirty: bool,
}

impl AssetRecord {
    pub fn new(path: impl Into<String>, kind: AssetKind, lighting_guid: LightingGuid) -> Self {
        Self {
            path: path.into(),
            kind,
            lighting_guid,
            dirty: false,
        }
    }
}

impl GuidTarget for AssetRecord {
    fn path(&self) -> &str {
        &self.path
    }

    fn kind_label(&self) -> &str {
        self.kind.label()
    }

    fn lighting_guid(&self) -> LightingGuid {
        self.lighting_guid
    }

    fn set_lighting_guid(&mut self, guid: LightingGuid) {
        self.lighting_guid = guid;
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// TOML sidecar file format for an asset
#[derive(Debug, Deserialize)]
pub struct AssetFile {
    pub asset: AssetRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_file_serde() {
        let toml_str = r#"
[asset]
path = "/Game/Materials/M_Brick"
type = "material"
lighting_guid = "9b1deb4d-3b7d-4bad-9bdd-2b0d7b3dcb6d"
"#;

        let file: AssetFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.asset.path, "/Game/Materials/M_Brick");
        assert_eq!(file.asset.kind, AssetKind::Material);
        assert!(file.asset.lighting_guid.is_valid());
        assert!(!file.asset.dirty);
    }

    #[test]
    fn test_missing_guid_is_nil() {
        let toml_str = r#"
[asset]
path = "/Game/Textures/T_Rock"
type = "texture"
"#;

        let file: AssetFile = toml::from_str(toml_str).unwrap();
        assert_eq!(file.asset.kind, AssetKind::Texture);
        assert!(!file.asset.lighting_guid.is_valid());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let toml_str = r#"
[asset]
path = "/Game/Meshes/SM_Chair"
type = "mesh"
"#;

        assert!(toml::from_str::<AssetFile>(toml_str).is_err());
    }

    #[test]
    fn test_guid_target_marks_dirty() {
        let mut record = AssetRecord::new("/Game/M_A", AssetKind::Material, LightingGuid::nil());
        record.set_lighting_guid(LightingGuid::from_u128(3));
        record.mark_dirty();
        assert_eq!(record.lighting_guid(), LightingGuid::from_u128(3));
        assert!(record.dirty);
        assert_eq!(record.kind_label(), "Material");
    }
}
