//! GUID fix commands

use anyhow::Result;
use guidfix_asset::AssetCatalog;
use guidfix_core::{GuidFixConfig, RandomGuids};
use guidfix_reconcile::{FixOperation, FixResult, Reconciler};
use std::fmt::Write as _;
use std::path::Path;

pub struct FixArgs<'a> {
    pub operation: FixOperation,
    pub assets: String,
    pub config: Option<&'a Path>,
    pub format: String,
}

pub fn run(args: FixArgs<'_>) -> Result<()> {
    let config = GuidFixConfig::load(args.config)?;
    log::debug!(
        "Project prefix '{}', engine prefix '{}'",
        config.locations.project_prefix,
        config.locations.engine_prefix
    );

    let mut catalog = AssetCatalog::load_from_directory(&args.assets)?;
    log::debug!("{} asset(s) found in {}", catalog.len(), args.assets);

    let mut guids = RandomGuids::new();
    let mut reconciler = Reconciler::new(&config.locations, &mut guids);
    let result = args.operation.run(&mut catalog, &mut reconciler);

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&result_json(&result))?);
    } else {
        print!("{}", render_text(&result));
    }

    // Nothing is written back; saving is left to the asset owner.
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}

/// Process exit code for a finished fix: 1 when anything is left unresolved
pub fn exit_code(result: &FixResult) -> i32 {
    if result.report.outcome().has_warnings {
        1
    } else {
        0
    }
}

/// Plain-text report: changes, unresolved assets, assets to save, then the outcome message
pub fn render_text(result: &FixResult) -> String {
    let report = &result.report;
    let mut out = String::new();

    if !report.changes.is_empty() {
        let _ = writeln!(out, "{} GUID change(s):", report.changes.len());
        for change in &report.changes {
            let _ = writeln!(out, "  {}: {} -> {}", change.path, change.previous, change.assigned);
        }
        out.push('\n');
    }

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "{} unresolved:", report.warnings.len());
        for warning in &report.warnings {
            let _ = writeln!(out, "  {}", warning);
        }
        out.push('\n');
    }

    if result.status().needs_save() {
        let paths = report.changed_paths();
        let _ = writeln!(out, "{} asset(s) need saving:", paths.len());
        for path in paths {
            let _ = writeln!(out, "  {}", path);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", result.message());
    out
}

/// JSON report with `status`, `changed`, `has_warnings`, `message`, `changes`, `warnings`
pub fn result_json(result: &FixResult) -> serde_json::Value {
    let report = &result.report;
    let outcome = report.outcome();

    let changes: Vec<serde_json::Value> = report
        .changes
        .iter()
        .map(|c| {
            serde_json::json!({
                "path": c.path,
                "previous": c.previous.is_valid().then(|| c.previous.to_string()),
                "assigned": c.assigned.to_string(),
            })
        })
        .collect();

    let warnings: Vec<serde_json::Value> = report
        .warnings
        .iter()
        .map(|w| {
            serde_json::json!({
                "path": w.path,
                "message": w.to_string(),
            })
        })
        .collect();

    serde_json::json!({
        "status": outcome.status().as_str(),
        "changed": outcome.changed,
        "has_warnings": outcome.has_warnings,
        "message": result.message(),
        "changes": changes,
        "warnings": warnings,
    })
}
