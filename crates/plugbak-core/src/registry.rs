//! Host plugin registry access
//!
//! The engines never talk to a host application directly. They consume
//! the [`PluginRegistry`] trait, implemented here for a JSON export
//! file and in tests by in-memory fakes.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::plugin::PluginDescriptor;
use crate::{Error, Result};

/// One row of the host registry: a descriptor plus the host's
/// "ships with the base system" flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    #[serde(flatten)]
    pub descriptor: PluginDescriptor,

    /// True when the plugin is part of the standard distribution.
    /// Standard plugins are never backed up.
    #[serde(default)]
    pub standard: bool,
}

/// Source of installed-plugin information.
pub trait PluginRegistry {
    /// Every installed plugin, standard or not, in registry order.
    fn installed_plugins(&self) -> Result<Vec<RegistryEntry>>;
}

/// Registry backed by a JSON export file produced by the host.
#[derive(Debug, Clone)]
pub struct FileRegistry {
    path: PathBuf,
}

impl FileRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PluginRegistry for FileRegistry {
    fn installed_plugins(&self) -> Result<Vec<RegistryEntry>> {
        let content = fs::read_to_string(&self.path).map_err(|e| Error::RegistryUnavailable {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }
}
