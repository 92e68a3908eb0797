//! Shared fixtures for engine integration tests

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use plugbak_core::{PluginDescriptor, PluginRegistry, RegistryEntry, Result};

/// In-memory registry fake.
pub struct FakeRegistry {
    pub entries: Vec<RegistryEntry>,
}

impl FakeRegistry {
    pub fn new(entries: Vec<RegistryEntry>) -> Self {
        Self { entries }
    }
}

impl PluginRegistry for FakeRegistry {
    fn installed_plugins(&self) -> Result<Vec<RegistryEntry>> {
        Ok(self.entries.clone())
    }
}

/// Registry entry for a plugin installed under `host_root/category`.
pub fn entry(host_root: &Path, category: &str, identifier: &str, standard: bool) -> RegistryEntry {
    let category_root = host_root.join(category);
    RegistryEntry {
        descriptor: PluginDescriptor {
            category: category.into(),
            identifier: identifier.into(),
            category_root: category_root.clone(),
            install_dir: category_root.join(identifier),
            display_name: format!("{identifier} plugin"),
            disk_version: 2021051700,
        },
        standard,
    }
}

/// Create a plugin install tree with a couple of nested files.
pub fn install_plugin(host_root: &Path, category: &str, identifier: &str) {
    let dir = host_root.join(category).join(identifier);
    fs::create_dir_all(dir.join("lang")).unwrap();
    fs::write(dir.join("version.txt"), format!("{identifier} 2021051700")).unwrap();
    fs::write(dir.join("lang").join("en.txt"), format!("{identifier} strings")).unwrap();
}

/// Relative path -> file bytes for every file under `root`.
pub fn tree_snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut snapshot = BTreeMap::new();
    collect(root, root, &mut snapshot);
    snapshot
}

fn collect(root: &Path, dir: &Path, snapshot: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, snapshot);
        } else {
            let rel = path
                .strip_prefix(root)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/");
            snapshot.insert(rel, fs::read(&path).unwrap());
        }
    }
}
