//! Persistence of the last accepted dialog values

use anyhow::Result;
use argdialog_types::ValueMap;
use std::path::{Path, PathBuf};

use super::AppContext;

/// Stores a [`ValueMap`] as JSON in the application's config directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store under `<config dir>/<company>/<app>/values.json`
    pub fn for_context(ctx: &AppContext) -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", &ctx.company, &ctx.app_name)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(Self::with_path(dirs.config_dir().join("values.json")))
    }

    /// Store at a specific file path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load saved values; a missing file yields an empty map.
    pub fn load(&self) -> Result<ValueMap> {
        if !self.path.exists() {
            return Ok(ValueMap::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let values = serde_json::from_str(&content)?;
        Ok(values)
    }

    /// Save values, creating the parent directory if needed.
    pub fn save(&self, values: &ValueMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content)?;
        log::info!("Saved dialog values to {}", self.path.display());
        Ok(())
    }
}
