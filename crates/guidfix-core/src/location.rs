//! Content location classification

use serde::{Deserialize, Serialize};

/// Where an asset lives, derived from its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationClass {
    /// User project content; the only class that may be modified
    ProjectContent,
    /// Content shipped with the engine
    EngineContent,
    /// Content shipped with a plugin (anything not project or engine)
    PluginContent,
}

impl LocationClass {
    pub fn is_eligible(&self) -> bool {
        matches!(self, LocationClass::ProjectContent)
    }
}

/// Path prefixes used to classify asset locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRules {
    #[serde(default = "default_project_prefix")]
    pub project_prefix: String,
    #[serde(default = "default_engine_prefix")]
    pub engine_prefix: String,
}

pub(crate) fn default_project_prefix() -> String {
    "/Game/".to_string()
}

pub(crate) fn default_engine_prefix() -> String {
    "/Engine/".to_string()
}

impl Default for LocationRules {
    fn default() -> Self {
        Self {
            project_prefix: default_project_prefix(),
            engine_prefix: default_engine_prefix(),
        }
    }
}

impl LocationRules {
    /// Classify an asset path
    pub fn classify(&self, path: &str) -> LocationClass {
        if path.starts_with(&self.engine_prefix) {
            LocationClass::EngineContent
        } else if path.starts_with(&self.project_prefix) {
            LocationClass::ProjectContent
        } else {
            LocationClass::PluginContent
        }
    }

    /// Whether the asset at `path` may have its identifier assigned
    pub fn is_eligible(&self, path: &str) -> bool {
        self.classify(path).is_eligible()
    }
}
