//! Snapshot persistence for the registry and the conversation store.
//!
//! Persistence here is deliberately coarse: every mutation replaces a whole
//! keyed snapshot, last writer wins. The [`SnapshotStore`] trait is the seam
//! the controller is tested through; [`load_snapshot`] and [`save_snapshot`]
//! own the fail-open contract: corruption and I/O failures degrade to
//! "absent" or a logged no-op, never to an error the caller sees.

pub mod file;
pub mod memory;

use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

/// Durable keyed snapshots of serialized state.
pub trait SnapshotStore {
    /// Last snapshot saved under `key`, or `None` if never saved or
    /// unreadable.
    fn load(&self, key: &str) -> Option<String>;

    /// Persist `contents` under `key`, replacing any previous snapshot.
    fn save(&mut self, key: &str, contents: &str) -> Result<(), SnapshotError>;
}

/// Errors that can occur when writing a snapshot to disk.
#[derive(Debug)]
pub enum SnapshotError {
    /// Failed to create the snapshot directory.
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write the staged snapshot contents.
    Write {
        /// Path of the snapshot being written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to move the staged file over the previous snapshot.
    Persist {
        /// Path of the snapshot being replaced.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::CreateDir { path, source } => {
                write!(
                    f,
                    "Failed to create snapshot directory {}: {}",
                    path.display(),
                    source
                )
            }
            SnapshotError::Write { path, source } => {
                write!(f, "Failed to write snapshot {}: {}", path.display(), source)
            }
            SnapshotError::Persist { path, source } => {
                write!(
                    f,
                    "Failed to replace snapshot {}: {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl StdError for SnapshotError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            SnapshotError::CreateDir { source, .. } => Some(source),
            SnapshotError::Write { source, .. } => Some(source),
            SnapshotError::Persist { source, .. } => Some(source),
        }
    }
}

/// Load and deserialize the snapshot under `key`.
///
/// An absent or unparsable snapshot yields `None`; the caller substitutes its
/// default.
pub fn load_snapshot<T: DeserializeOwned>(store: &dyn SnapshotStore, key: &str) -> Option<T> {
    let contents = store.load(key)?;
    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(err) => {
            debug!(key = %key, error = %err, "Discarding unparsable snapshot");
            None
        }
    }
}

/// Serialize `value` and persist it under `key`.
///
/// Failures are logged and swallowed; in-memory state stays authoritative and
/// the next successful save replaces whatever is on disk.
pub fn save_snapshot<T: Serialize>(store: &mut dyn SnapshotStore, key: &str, value: &T) {
    let contents = match serde_json::to_string(value) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(key = %key, error = %err, "Failed to serialize snapshot");
            return;
        }
    };
    if let Err(err) = store.save(key, &contents) {
        warn!(key = %key, error = %err, "Failed to persist snapshot");
    }
}
