//! Restore orchestration
//!
//! Reads the backup set's manifest and puts each plugin tree back at
//! its recorded install location. A live tree at that location is
//! removed first; there is no merge and no rollback.

use plugbak_fs::{copy_tree, remove_tree};
use tracing::debug;

use crate::plugin::PluginDescriptor;
use crate::set::BackupSet;
use crate::Result;

/// Outcome of a completed restore run.
#[derive(Debug)]
pub struct RestoreReport {
    /// Plugins restored, in manifest order. Empty when the manifest
    /// held no entries; that is a successful no-op, not an error.
    pub plugins: Vec<PluginDescriptor>,
}

/// Restores plugin trees from a backup set.
pub struct RestoreEngine {
    set: BackupSet,
}

impl RestoreEngine {
    pub fn new(set: BackupSet) -> Self {
        Self { set }
    }

    /// Run the whole pipeline. `progress` is called once per plugin,
    /// before its tree is copied back.
    ///
    /// Fails with `ManifestMissing` when the set has no manifest.
    pub fn run(&self, mut progress: impl FnMut(&PluginDescriptor)) -> Result<RestoreReport> {
        let plugins = self.set.manifest().load()?;

        for plugin in &plugins {
            progress(plugin);
            self.restore_plugin(plugin)?;
        }

        Ok(RestoreReport { plugins })
    }

    /// Put one plugin tree back at its install location, clearing any
    /// live tree there first.
    pub fn restore_plugin(&self, plugin: &PluginDescriptor) -> Result<()> {
        if plugin.install_dir.is_dir() {
            debug!(path = %plugin.install_dir.display(), "clearing live install tree");
            remove_tree(&plugin.install_dir)?;
        }

        copy_tree(
            &self.set.plugin_dir(&plugin.identifier),
            &plugin.install_dir,
            None,
        )?;
        Ok(())
    }
}
