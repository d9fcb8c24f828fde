use std::fs;
use std::io::Write;
use std::path::PathBuf;

use directories::ProjectDirs;
use tempfile::NamedTempFile;

use super::{SnapshotError, SnapshotStore};

/// File-backed snapshot store: one `<key>.json` file per key.
///
/// Writes stage the new contents in a temp file in the same directory and
/// replace the previous snapshot atomically, so a snapshot on disk is always
/// a complete one.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the platform data directory.
    pub fn open_default() -> Self {
        Self::new(Self::default_dir())
    }

    pub(crate) fn default_dir() -> PathBuf {
        let proj_dirs = ProjectDirs::from("org", "permacommons", "causerie")
            .expect("Failed to determine data directory");
        proj_dirs.data_dir().to_path_buf()
    }

    fn snapshot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.snapshot_path(key)).ok()
    }

    fn save(&mut self, key: &str, contents: &str) -> Result<(), SnapshotError> {
        fs::create_dir_all(&self.dir).map_err(|source| SnapshotError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.snapshot_path(key);
        let mut temp_file =
            NamedTempFile::new_in(&self.dir).map_err(|source| SnapshotError::Write {
                path: path.clone(),
                source,
            })?;
        temp_file
            .write_all(contents.as_bytes())
            .map_err(|source| SnapshotError::Write {
                path: path.clone(),
                source,
            })?;
        temp_file
            .as_file_mut()
            .sync_all()
            .map_err(|source| SnapshotError::Write {
                path: path.clone(),
                source,
            })?;
        temp_file.persist(&path).map_err(|err| SnapshotError::Persist {
            path,
            source: err.error,
        })?;
        Ok(())
    }
}
