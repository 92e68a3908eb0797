//! Error types for plugbak-core

use std::path::PathBuf;

/// Result type for plugbak-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in plugbak-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Backup destination root missing or not writable
    #[error("Backup destination is not writable: {path}")]
    DestinationNotWritable { path: PathBuf },

    /// Creating the backup set directory failed
    #[error("Failed to create backup directory {path}: {source}")]
    CreateBackupDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Discovery produced no additional plugins to back up
    #[error("No additional plugins found to back up")]
    NoAdditionalPlugins,

    /// Restore requested without a prior backup
    #[error("Backup manifest not found at {path}, run a backup first")]
    ManifestMissing { path: PathBuf },

    /// Host registry export could not be read
    #[error("Plugin registry unavailable at {path}: {source}")]
    RegistryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error from plugbak-fs
    #[error(transparent)]
    Fs(#[from] plugbak_fs::Error),

    /// JSON serialization/deserialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
