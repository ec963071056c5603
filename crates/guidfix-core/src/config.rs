//! Configuration loading with layered precedence

use crate::error::{GuidFixError, Result};
use crate::location::{default_engine_prefix, default_project_prefix, LocationRules};
use serde::Deserialize;
use std::path::Path;

/// Project-local config file, relative to the working directory
pub const LOCAL_CONFIG_PATH: &str = ".guidfix/config.toml";

/// Raw config file contents; unset fields fall through to the layer below
#[derive(Debug, Default, Deserialize)]
struct GuidFixConfigFile {
    #[serde(default)]
    locations: LocationsFile,
}

#[derive(Debug, Default, Deserialize)]
struct LocationsFile {
    project_prefix: Option<String>,
    engine_prefix: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuidFixConfig {
    pub locations: LocationRules,
}

impl GuidFixConfig {
    /// Load config with layered precedence: defaults < project < explicit path
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_layered(Path::new(LOCAL_CONFIG_PATH), explicit)
    }

    /// Layer `local` (skipped when absent) and then `explicit` (must exist)
    /// over the built-in defaults
    pub fn load_layered(local: &Path, explicit: Option<&Path>) -> Result<Self> {
        let mut config = GuidFixConfigFile::default();

        if local.exists() {
            let file = Self::load_file(local)?;
            Self::merge_into(&mut config, file);
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(GuidFixError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            let file = Self::load_file(path)?;
            Self::merge_into(&mut config, file);
        }

        Self::resolve(config)
    }

    /// Load config from a specific file path only
    pub fn load_from_file(path: &Path) -> Result<Self> {
        Self::resolve(Self::load_file(path)?)
    }

    /// Parse config from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: GuidFixConfigFile = toml::from_str(content)
            .map_err(|e| GuidFixError::ConfigError(format!("Failed to parse config: {}", e)))?;
        Self::resolve(file)
    }

    fn load_file(path: &Path) -> Result<GuidFixConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let config: GuidFixConfigFile = toml::from_str(&content).map_err(|e| {
            GuidFixError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    fn merge_into(base: &mut GuidFixConfigFile, overlay: GuidFixConfigFile) {
        if overlay.locations.project_prefix.is_some() {
            base.locations.project_prefix = overlay.locations.project_prefix;
        }
        if overlay.locations.engine_prefix.is_some() {
            base.locations.engine_prefix = overlay.locations.engine_prefix;
        }
    }

    fn resolve(file: GuidFixConfigFile) -> Result<Self> {
        let locations = LocationRules {
            project_prefix: file
                .locations
                .project_prefix
                .unwrap_or_else(default_project_prefix),
            engine_prefix: file
                .locations
                .engine_prefix
                .unwrap_or_else(default_engine_prefix),
        };
        if locations.project_prefix.is_empty() {
            return Err(GuidFixError::ConfigError(
                "locations.project_prefix must not be empty".to_string(),
            ));
        }
        if locations.engine_prefix.is_empty() {
            return Err(GuidFixError::ConfigError(
                "locations.engine_prefix must not be empty".to_string(),
            ));
        }
        Ok(Self { locations })
    }
}
