//! Recursive directory-tree operations
//!
//! Both operations apply the same symbolic-link policy: links are never
//! traversed. `copy_tree` skips them (with a warning), `remove_tree`
//! unlinks them as leaves. Entry typing uses the non-following
//! `DirEntry::file_type`, so a link to a directory is still a link.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{Error, Result};

/// Mirror the contents of `source` into `destination`.
///
/// `source` must be an existing directory. `destination` is created if
/// absent, as a single path component: its parent must already exist.
/// With `child`, contents land in `destination/child` instead (that
/// subdirectory is created the same way).
///
/// Existing files at the destination are overwritten. There is no
/// rollback; the first failed read or write aborts the copy and leaves
/// the destination partially populated.
pub fn copy_tree(source: &Path, destination: &Path, child: Option<&str>) -> Result<()> {
    if !source.is_dir() {
        return Err(Error::NotADirectory {
            path: source.to_path_buf(),
        });
    }

    if !destination.is_dir() {
        fs::create_dir(destination).map_err(|e| Error::create_dir(destination, e))?;
    }

    let target = match child {
        Some(name) => {
            let target = destination.join(name);
            if !target.is_dir() {
                fs::create_dir(&target).map_err(|e| Error::create_dir(&target, e))?;
            }
            target
        }
        None => destination.to_path_buf(),
    };

    copy_entries(source, &target)
}

fn copy_entries(source: &Path, destination: &Path) -> Result<()> {
    debug!(source = %source.display(), destination = %destination.display(), "copying directory");

    for entry in fs::read_dir(source).map_err(|e| Error::io(source, e))? {
        let entry = entry.map_err(|e| Error::io(source, e))?;
        let entry_path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&entry_path, e))?;
        let dest_path = destination.join(entry.file_name());

        if file_type.is_symlink() {
            warn!(path = %entry_path.display(), "skipping symbolic link");
        } else if file_type.is_dir() {
            copy_tree(&entry_path, &dest_path, None)?;
        } else {
            fs::copy(&entry_path, &dest_path).map_err(|e| Error::io(&entry_path, e))?;
        }
    }

    Ok(())
}

/// Recursively delete the directory at `path`.
///
/// A `path` that does not name an existing directory (a missing path, a
/// file, or a symbolic link) is a no-op, which makes the call
/// idempotent. There is no partial-failure recovery: a failed unlink
/// aborts the traversal and leaves the tree partially deleted.
pub fn remove_tree(path: &Path) -> Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => {}
        _ => return Ok(()),
    }

    debug!(path = %path.display(), "removing directory");

    for entry_path in removable_entries(path)? {
        let file_type = fs::symlink_metadata(&entry_path)
            .map_err(|e| Error::io(&entry_path, e))?
            .file_type();

        if file_type.is_dir() {
            remove_tree(&entry_path)?;
        } else {
            fs::remove_file(&entry_path).map_err(|e| Error::io(&entry_path, e))?;
        }
    }

    fs::remove_dir(path).map_err(|e| Error::io(path, e))
}

// Collect first so the directory handle is closed before any unlink.
fn removable_entries(path: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| Error::io(path, e))? {
        let entry = entry.map_err(|e| Error::io(path, e))?;
        entries.push(entry.path());
    }
    Ok(entries)
}
