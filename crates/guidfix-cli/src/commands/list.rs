//! Asset listing command

use anyhow::Result;
use guidfix_asset::{AssetCatalog, AssetKind, AssetRecord};
use guidfix_core::{GuidFixConfig, LocationClass};
use std::path::Path;

pub fn run(assets: &str, type_filter: Option<&str>, config: Option<&Path>, format: &str) -> Result<()> {
    let config = GuidFixConfig::load(config)?;
    let catalog = AssetCatalog::load_from_directory(assets)?;
    log::debug!("{} asset(s) found in {}", catalog.len(), assets);

    if catalog.is_empty() {
        println!("No assets found in {}/", assets);
        return Ok(());
    }

    let records: Vec<&AssetRecord> = match type_filter {
        Some("material") => catalog.records(AssetKind::Material),
        Some("texture") => catalog.records(AssetKind::Texture),
        _ => catalog.all().iter().collect(),
    };

    if format == "json" {
        let items: Vec<serde_json::Value> = records
            .iter()
            .map(|r| {
                serde_json::json!({
                    "path": r.path,
                    "type": r.kind.noun(),
                    "lighting_guid": r.lighting_guid.is_valid().then(|| r.lighting_guid.to_string()),
                    "location": location_label(config.locations.classify(&r.path)),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        println!("{} asset(s):\n", records.len());
        for record in &records {
            println!(
                "  {} ({}) {} [{}]",
                record.path,
                record.kind,
                record.lighting_guid,
                location_label(config.locations.classify(&record.path))
            );
        }
    }

    Ok(())
}

fn location_label(class: LocationClass) -> &'static str {
    match class {
        LocationClass::ProjectContent => "project",
        LocationClass::EngineContent => "engine",
        LocationClass::PluginContent => "plugin",
    }
}
