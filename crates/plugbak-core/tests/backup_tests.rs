mod common;

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use common::{FakeRegistry, entry, install_plugin, tree_snapshot};
use plugbak_core::{BackupEngine, BackupSet, Error};

fn scratch() -> (TempDir, TempDir) {
    (TempDir::new().unwrap(), TempDir::new().unwrap())
}

#[test]
fn test_backup_copies_additional_plugins_only() {
    let (host, dest) = scratch();
    install_plugin(host.path(), "mod", "forum");
    install_plugin(host.path(), "mod", "quiz");
    install_plugin(host.path(), "theme", "dark");
    let registry = FakeRegistry::new(vec![
        entry(host.path(), "mod", "forum", true),
        entry(host.path(), "mod", "quiz", false),
        entry(host.path(), "theme", "dark", false),
    ]);

    let set = BackupSet::new(dest.path(), "set1");
    let engine = BackupEngine::new(set.clone(), &registry);

    let mut seen = Vec::new();
    let report = engine
        .run(|plugin| seen.push(plugin.qualified_name()))
        .unwrap();

    // Standard plugin excluded, order preserved, progress per plugin.
    assert_eq!(seen, vec!["mod_quiz", "theme_dark"]);
    assert_eq!(report.plugins.len(), 2);
    assert_eq!(report.backup_path, dest.path().join("set1"));

    assert!(dest.path().join("set1/quiz/version.txt").is_file());
    assert!(dest.path().join("set1/dark/lang/en.txt").is_file());
    assert!(!dest.path().join("set1/forum").exists());

    assert_eq!(
        tree_snapshot(&dest.path().join("set1/quiz")),
        tree_snapshot(&host.path().join("mod/quiz"))
    );
}

#[test]
fn test_backup_writes_complete_manifest() {
    let (host, dest) = scratch();
    for id in ["a", "b", "c"] {
        install_plugin(host.path(), "mod", id);
    }
    let registry = FakeRegistry::new(vec![
        entry(host.path(), "mod", "a", false),
        entry(host.path(), "mod", "b", false),
        entry(host.path(), "mod", "c", false),
    ]);

    let engine = BackupEngine::new(BackupSet::new(dest.path(), "set1"), &registry);
    engine.run(|_| {}).unwrap();

    let raw = fs::read_to_string(dest.path().join("set1/meta.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 3);

    let first = items[0].as_object().unwrap();
    let mut keys: Vec<_> = first.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["displayname", "name", "rootdir", "type", "typerootdir", "versiondisk"]
    );
    assert_eq!(first["type"], "mod");
    assert_eq!(first["name"], "a");
    assert_eq!(first["versiondisk"], 2021051700);
}

#[test]
fn test_backup_empty_discovery_rejected() {
    let (host, dest) = scratch();
    install_plugin(host.path(), "mod", "forum");
    let registry = FakeRegistry::new(vec![entry(host.path(), "mod", "forum", true)]);

    let engine = BackupEngine::new(BackupSet::new(dest.path(), "set1"), &registry);
    let err = engine.run(|_| {}).unwrap_err();

    assert!(matches!(err, Error::NoAdditionalPlugins));
    // A vacuous backup must not leave a manifest behind.
    assert!(!dest.path().join("set1/meta.json").exists());
}

#[test]
fn test_backup_is_destructive_overwrite() {
    let (host, dest) = scratch();
    install_plugin(host.path(), "mod", "forum");
    install_plugin(host.path(), "mod", "quiz");

    let first = FakeRegistry::new(vec![
        entry(host.path(), "mod", "forum", false),
        entry(host.path(), "mod", "quiz", false),
    ]);
    BackupEngine::new(BackupSet::new(dest.path(), "set1"), &first)
        .run(|_| {})
        .unwrap();

    // Foreign content and a since-removed plugin must vanish on rerun.
    fs::write(dest.path().join("set1/stray.txt"), "stray").unwrap();
    assert!(dest.path().join("set1/quiz").is_dir());

    let second = FakeRegistry::new(vec![entry(host.path(), "mod", "forum", false)]);
    BackupEngine::new(BackupSet::new(dest.path(), "set1"), &second)
        .run(|_| {})
        .unwrap();

    let mut names: Vec<String> = fs::read_dir(dest.path().join("set1"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["forum", "meta.json"]);
}

#[test]
fn test_backup_missing_destination_root() {
    let (host, dest) = scratch();
    install_plugin(host.path(), "mod", "forum");
    let registry = FakeRegistry::new(vec![entry(host.path(), "mod", "forum", false)]);

    let gone = dest.path().join("no-such-root");
    let engine = BackupEngine::new(BackupSet::new(&gone, "set1"), &registry);
    let err = engine.run(|_| {}).unwrap_err();

    assert!(matches!(err, Error::DestinationNotWritable { .. }));
}

#[cfg(unix)]
#[test]
fn test_backup_readonly_destination_root() {
    use std::os::unix::fs::PermissionsExt;

    let (host, dest) = scratch();
    install_plugin(host.path(), "mod", "forum");
    let registry = FakeRegistry::new(vec![entry(host.path(), "mod", "forum", false)]);

    let root = dest.path().join("locked");
    fs::create_dir(&root).unwrap();
    fs::set_permissions(&root, fs::Permissions::from_mode(0o555)).unwrap();

    let engine = BackupEngine::new(BackupSet::new(&root, "set1"), &registry);
    let err = engine.run(|_| {}).unwrap_err();

    fs::set_permissions(&root, fs::Permissions::from_mode(0o755)).unwrap();
    assert!(matches!(err, Error::DestinationNotWritable { .. }));
    assert!(!root.join("set1").exists());
}

#[test]
fn test_backup_missing_install_dir_fails() {
    let (host, dest) = scratch();
    // Registered but never installed on disk.
    let registry = FakeRegistry::new(vec![entry(host.path(), "mod", "ghost", false)]);

    let engine = BackupEngine::new(BackupSet::new(dest.path(), "set1"), &registry);
    let err = engine.run(|_| {}).unwrap_err();

    assert!(matches!(err, Error::Fs(_)));
}
