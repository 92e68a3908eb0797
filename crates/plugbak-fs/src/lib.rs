//! Filesystem primitives for Plugin Backup Manager
//!
//! Provides the recursive directory-tree operations the backup and
//! restore engines are built on: mirroring a tree into a destination
//! and deleting a tree in place.

pub mod error;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{copy_tree, remove_tree};
