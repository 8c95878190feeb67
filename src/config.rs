// ⚙️ Configuration
//
// Layers, lowest to highest: built-in defaults, JSON file, environment,
// command line (applied by the binary).

use crate::error::{CatalogError, Result};
use crate::furniture::Kind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Env var naming a JSON config file
pub const CONFIG_ENV: &str = "FURNITURE_CONFIG";

/// Env var overriding the asset root
pub const ASSET_ROOT_ENV: &str = "FURNITURE_ASSET_ROOT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding <style-slug>/<kind>.png
    pub asset_root: PathBuf,

    /// Style selected when the browser opens
    pub default_style: String,

    /// Kind selected when the browser opens
    pub default_kind: Kind,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            asset_root: PathBuf::from("resources/images"),
            default_style: "Modern".to_string(),
            default_kind: Kind::Chair,
        }
    }
}

impl CatalogConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Apply environment overrides read through `var`
    pub fn with_env<F>(mut self, var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(root) = var(ASSET_ROOT_ENV).filter(|v| !v.is_empty()) {
            self.asset_root = PathBuf::from(root);
        }
        self
    }

    /// Defaults, then the config file (explicit path or FURNITURE_CONFIG),
    /// then the process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let config = match path.map(Path::to_path_buf).or(env_path) {
            Some(file) => Self::from_file(&file)?,
            None => Self::default(),
        };
        Ok(config.with_env(|name| std::env::var(name).ok()))
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }
}

// ============================================================================
// TESTS
// ============================================================================
