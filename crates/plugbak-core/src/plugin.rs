//! Plugin descriptor types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One installed plugin as reported by the host registry.
///
/// The serialized field names follow the host's export format, which is
/// also the manifest wire format: `type`, `name`, `typerootdir`,
/// `rootdir`, `displayname`, `versiondisk`.
///
/// `identifier` plus `category` key a plugin within one backup run.
/// This is not globally enforced: two plugins sharing an identifier
/// across categories collide on the backup subfolder name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDescriptor {
    /// Plugin category in the host (e.g. "mod", "theme")
    #[serde(rename = "type")]
    pub category: String,

    /// Short machine identifier, unique within its category
    #[serde(rename = "name")]
    pub identifier: String,

    /// Root directory of the category on disk
    #[serde(rename = "typerootdir")]
    pub category_root: PathBuf,

    /// Absolute install directory of this plugin
    #[serde(rename = "rootdir")]
    pub install_dir: PathBuf,

    /// Human-readable name
    #[serde(rename = "displayname")]
    pub display_name: String,

    /// Version the host recorded on disk
    #[serde(rename = "versiondisk")]
    pub disk_version: i64,
}

impl PluginDescriptor {
    /// Qualified `category_identifier` label used in progress output.
    pub fn qualified_name(&self) -> String {
        format!("{}_{}", self.category, self.identifier)
    }
}
