//! Backup set locations

use std::path::{Path, PathBuf};

use crate::manifest::ManifestStore;

/// Location of one backup set on disk: `root/folder`, holding one
/// subdirectory per plugin plus the manifest.
#[derive(Debug, Clone)]
pub struct BackupSet {
    root: PathBuf,
    folder: String,
}

impl BackupSet {
    pub fn new(root: impl Into<PathBuf>, folder: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            folder: folder.into(),
        }
    }

    /// Backup root directory (the `--destination` path).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the plugin trees and the manifest.
    pub fn backup_path(&self) -> PathBuf {
        self.root.join(&self.folder)
    }

    /// Backup subdirectory for one plugin, named by its identifier.
    pub fn plugin_dir(&self, identifier: &str) -> PathBuf {
        self.backup_path().join(identifier)
    }

    /// Manifest store rooted at this set's `meta.json`.
    pub fn manifest(&self) -> ManifestStore {
        ManifestStore::new(&self.backup_path())
    }
}
