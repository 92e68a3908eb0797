//! Backup orchestration
//!
//! A fixed sequential pipeline: prepare the backup set directory,
//! discover additional plugins, write the manifest, copy each plugin
//! tree. The discovered sequence is passed between stages as a value;
//! nothing is shared mutably. The first failing stage aborts the run
//! with no rollback of what already happened.

use std::fs;
use std::path::{Path, PathBuf};

use plugbak_fs::{copy_tree, remove_tree};
use tracing::debug;

use crate::plugin::PluginDescriptor;
use crate::registry::PluginRegistry;
use crate::set::BackupSet;
use crate::{Error, Result};

/// Outcome of a completed backup run.
#[derive(Debug)]
pub struct BackupReport {
    /// Directory the set was written to.
    pub backup_path: PathBuf,
    /// Plugins backed up, in discovery order.
    pub plugins: Vec<PluginDescriptor>,
}

/// Creates a backup set from the plugins the registry reports.
pub struct BackupEngine<'a> {
    set: BackupSet,
    registry: &'a dyn PluginRegistry,
}

impl<'a> BackupEngine<'a> {
    pub fn new(set: BackupSet, registry: &'a dyn PluginRegistry) -> Self {
        Self { set, registry }
    }

    /// Run the whole pipeline. `progress` is called once per plugin,
    /// before its tree is copied.
    pub fn run(&self, mut progress: impl FnMut(&PluginDescriptor)) -> Result<BackupReport> {
        self.prepare_directory()?;

        let plugins = self.discover()?;
        if plugins.is_empty() {
            return Err(Error::NoAdditionalPlugins);
        }

        self.set.manifest().save(&plugins)?;

        for plugin in &plugins {
            progress(plugin);
            self.backup_plugin(plugin)?;
        }

        Ok(BackupReport {
            backup_path: self.set.backup_path(),
            plugins,
        })
    }

    /// Reset the backup set directory: any previous set at the same
    /// path is removed, then the directory is created fresh.
    pub fn prepare_directory(&self) -> Result<()> {
        ensure_writable(self.set.root())?;

        let backup_path = self.set.backup_path();
        remove_tree(&backup_path)?;
        fs::create_dir(&backup_path).map_err(|e| Error::CreateBackupDir {
            path: backup_path.clone(),
            source: e,
        })?;

        debug!(path = %backup_path.display(), "backup directory ready");
        Ok(())
    }

    /// Query the registry and keep only additional (non-standard)
    /// plugins, preserving registry order.
    pub fn discover(&self) -> Result<Vec<PluginDescriptor>> {
        let entries = self.registry.installed_plugins()?;
        let total = entries.len();

        let additional: Vec<PluginDescriptor> = entries
            .into_iter()
            .filter(|entry| !entry.standard)
            .map(|entry| entry.descriptor)
            .collect();

        debug!(total, additional = additional.len(), "discovered plugins");
        Ok(additional)
    }

    /// Copy one plugin's install tree into its backup subdirectory.
    pub fn backup_plugin(&self, plugin: &PluginDescriptor) -> Result<()> {
        let dest = self.set.plugin_dir(&plugin.identifier);
        copy_tree(&plugin.install_dir, &dest, None)?;
        Ok(())
    }
}

// Missing directory and read-only permission bits both fail the
// precondition; an unwritable root must abort before any mutation.
fn ensure_writable(root: &Path) -> Result<()> {
    let not_writable = || Error::DestinationNotWritable {
        path: root.to_path_buf(),
    };
    let meta = fs::metadata(root).map_err(|_| not_writable())?;
    if !meta.is_dir() || meta.permissions().readonly() {
        return Err(not_writable());
    }
    Ok(())
}
