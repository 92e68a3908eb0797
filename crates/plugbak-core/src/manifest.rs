//! Backup manifest persistence
//!
//! The manifest is the single source of truth for what a backup set
//! contains; restore refuses to run without it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::plugin::PluginDescriptor;
use crate::{Error, Result};

/// Manifest file name inside a backup set.
pub const MANIFEST_FILE: &str = "meta.json";

/// Reads and writes the `meta.json` manifest of a backup set.
#[derive(Debug, Clone)]
pub struct ManifestStore {
    path: PathBuf,
}

impl ManifestStore {
    /// Store rooted at `backup_path/meta.json`.
    pub fn new(backup_path: &Path) -> Self {
        Self {
            path: backup_path.join(MANIFEST_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Serialize the descriptors, replacing any previous manifest.
    pub fn save(&self, plugins: &[PluginDescriptor]) -> Result<()> {
        debug!(path = %self.path.display(), count = plugins.len(), "writing manifest");
        let json = serde_json::to_string(plugins)?;
        fs::write(&self.path, json).map_err(|e| Error::io(&self.path, e))
    }

    /// Load the descriptors in manifest order.
    pub fn load(&self) -> Result<Vec<PluginDescriptor>> {
        if !self.exists() {
            return Err(Error::ManifestMissing {
                path: self.path.clone(),
            });
        }
        let content = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}
