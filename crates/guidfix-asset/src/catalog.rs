//! Asset catalog for enumerating live assets

use crate::types::{AssetFile, AssetKind, AssetRecord};
use guidfix_core::{GuidFixError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Catalog of known assets, kept in registration order
#[derive(Debug, Default)]
pub struct AssetCatalog {
    records: Vec<AssetRecord>,
    /// Asset path to position in `records`
    path_index: HashMap<String, usize>,
}

impl AssetCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load assets from `.asset.toml` sidecar files in a directory tree.
    ///
    /// Entries are visited in file-name order so that enumeration order, and
    /// therefore which duplicate keeps its GUID, is stable across runs.
    pub fn load_from_directory<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut catalog = Self::new();
        Self::scan_directory(&mut catalog, path.as_ref())?;
        log::debug!(
            "Loaded {} asset(s) from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    fn scan_directory(catalog: &mut AssetCatalog, dir: &Path) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }

        let mut entries = fs::read_dir(dir)?.collect::<std::io::Result<Vec<_>>>()?;
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            let path = entry.path();

            if path.is_dir() {
                Self::scan_directory(catalog, &path)?;
            } else if path
                .file_name()
                .and_then(|n| n.to_str())
                .map(|n| n.ends_with(".asset.toml"))
                .unwrap_or(false)
            {
                let content = fs::read_to_string(&path)?;
                let file: AssetFile = toml::from_str(&content).map_err(|e| {
                    GuidFixError::AssetError(format!(
                        "Failed to parse {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                catalog.register(file.asset);
            }
        }

        Ok(())
    }

    /// Register an asset; a record with an already-known path replaces it in place
    pub fn register(&mut self, record: AssetRecord) {
        if let Some(&index) = self.path_index.get(&record.path) {
            log::warn!("{}: Asset registered twice, keeping the later entry.", record.path);
            self.records[index] = record;
            return;
        }
        self.path_index.insert(record.path.clone(), self.records.len());
        self.records.push(record);
    }

    /// Get an asset by path
    pub fn get(&self, path: &str) -> Option<&AssetRecord> {
        self.path_index.get(path).map(|&i| &self.records[i])
    }

    /// All assets, in registration order
    pub fn all(&self) -> &[AssetRecord] {
        &self.records
    }

    /// Get all assets of a given kind, in registration order
    pub fn records(&self, kind: AssetKind) -> Vec<&AssetRecord> {
        self.records.iter().filter(|r| r.kind == kind).collect()
    }

    /// Mutable access to all assets of a given kind, in registration order
    pub fn records_mut(&mut self, kind: AssetKind) -> Vec<&mut AssetRecord> {
        self.records.iter_mut().filter(|r| r.kind == kind).collect()
    }

    /// Assets with unsaved GUID changes
    pub fn dirty_records(&self) -> Vec<&AssetRecord> {
        self.records.iter().filter(|r| r.dirty).collect()
    }

    /// Get the number of registered assets
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
