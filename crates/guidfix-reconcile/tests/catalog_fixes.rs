//! End-to-end fixes over a catalog loaded from sidecar files

use guidfix_asset::{AssetCatalog, AssetKind};
use guidfix_core::{GuidFixConfig, RandomGuids};
use guidfix_reconcile::{
    fix_empty_texture_guids, fix_material_guids, fix_texture_guids, OutcomeStatus, Reconciler,
    WarningKind,
};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const SHARED: &str = "0c6a1f1e-5d1b-4f0e-9a57-5a3b0f1c2d3e";

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("guidfix_e2e_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn sidecar(dir: &Path, file: &str, path: &str, kind: &str, guid: Option<&str>) {
    let mut content = format!("[asset]\npath = \"{}\"\ntype = \"{}\"\n", path, kind);
    if let Some(guid) = guid {
        content.push_str(&format!("lighting_guid = \"{}\"\n", guid));
    }
    fs::write(dir.join(file), content).unwrap();
}

fn project(dir: &Path) {
    sidecar(dir, "01_m_brick.asset.toml", "/Game/Materials/M_Brick", "material", Some(SHARED));
    sidecar(dir, "02_m_brick_copy.asset.toml", "/Game/Materials/M_Brick_Copy", "material", Some(SHARED));
    sidecar(dir, "03_m_default.asset.toml", "/Engine/EngineMaterials/M_Default", "material", None);
    sidecar(dir, "04_t_rock.asset.toml", "/Game/Textures/T_Rock", "texture", None);
    sidecar(dir, "05_t_noise.asset.toml", "/Engine/Textures/T_Noise", "texture", Some(SHARED));
    sidecar(dir, "06_t_noise_copy.asset.toml", "/Game/Textures/T_Noise_Copy", "texture", Some(SHARED));
}

#[test]
fn material_fix_over_loaded_catalog() {
    let dir = temp_dir();
    project(&dir);

    let config = GuidFixConfig::default();
    let mut catalog = AssetCatalog::load_from_directory(&dir).unwrap();
    let mut guids = RandomGuids::new();
    let mut reconciler = Reconciler::new(&config.locations, &mut guids);

    let result = fix_material_guids(&mut catalog, &mut reconciler);

    assert_eq!(result.status(), OutcomeStatus::PartiallyResolved);
    assert_eq!(
        result.report.changed_paths(),
        vec!["/Game/Materials/M_Brick", "/Game/Materials/M_Brick_Copy"]
    );
    assert_eq!(result.report.warnings.len(), 1);
    assert_eq!(result.report.warnings[0].kind, WarningKind::MissingIneligible);

    let materials: HashSet<_> = catalog
        .records(AssetKind::Material)
        .iter()
        .filter(|r| r.lighting_guid.is_valid())
        .map(|r| r.lighting_guid)
        .collect();
    assert_eq!(materials.len(), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn texture_fixes_in_sequence_converge() {
    let dir = temp_dir();
    project(&dir);

    let config = GuidFixConfig::default();
    let mut catalog = AssetCatalog::load_from_directory(&dir).unwrap();
    let mut guids = RandomGuids::new();
    let mut reconciler = Reconciler::new(&config.locations, &mut guids);

    let first = fix_texture_guids(&mut catalog, &mut reconciler);
    assert_eq!(first.status(), OutcomeStatus::PartiallyResolved);
    assert_eq!(first.report.warnings[0].kind, WarningKind::MissingDeferred);
    assert_eq!(first.report.changed_paths(), vec!["/Game/Textures/T_Noise_Copy"]);

    let empty = fix_empty_texture_guids(&mut catalog, &mut reconciler);
    assert_eq!(empty.status(), OutcomeStatus::Changed);

    let last = fix_texture_guids(&mut catalog, &mut reconciler);
    assert_eq!(last.status(), OutcomeStatus::Clean);

    let engine = catalog.get("/Engine/Textures/T_Noise").unwrap();
    assert_eq!(engine.lighting_guid.to_string(), SHARED);
    assert!(!engine.dirty);

    let dirty: Vec<_> = catalog.dirty_records().iter().map(|r| r.path.as_str()).collect();
    assert_eq!(dirty, vec!["/Game/Textures/T_Rock", "/Game/Textures/T_Noise_Copy"]);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn custom_project_prefix_changes_eligibility() {
    let dir = temp_dir();
    sidecar(&dir, "a.asset.toml", "/Studio/M_A", "material", Some(SHARED));
    sidecar(&dir, "b.asset.toml", "/Studio/M_B", "material", Some(SHARED));

    let mut catalog = AssetCatalog::load_from_directory(&dir).unwrap();
    let mut guids = RandomGuids::new();

    let defaults = GuidFixConfig::default();
    let mut reconciler = Reconciler::new(&defaults.locations, &mut guids);
    let result = fix_material_guids(&mut catalog, &mut reconciler);
    assert_eq!(result.status(), OutcomeStatus::Unresolved);

    let studio = GuidFixConfig::from_toml_str("[locations]\nproject_prefix = \"/Studio/\"\n").unwrap();
    let mut reconciler = Reconciler::new(&studio.locations, &mut guids);
    let result = fix_material_guids(&mut catalog, &mut reconciler);
    assert_eq!(result.status(), OutcomeStatus::Changed);

    fs::remove_dir_all(&dir).ok();
}
