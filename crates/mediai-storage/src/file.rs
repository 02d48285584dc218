use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::KeyValueStore;
use crate::error::StorageError;

/// File-backed store: one `<key>.json` file per key under a root directory.
///
/// Writes go to a temp file that is renamed into place, so a reader never
/// observes a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

/// Keys become file names, so only a conservative character set is allowed.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StorageError::Read { path, source }),
        };
        String::from_utf8(bytes)
            .map(Some)
            .map_err(|_| StorageError::InvalidEncoding {
                key: key.to_string(),
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root).map_err(|source| StorageError::Write {
            path: self.root.clone(),
            source,
        })?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value.as_bytes()).map_err(|source| StorageError::Write {
            path: tmp_path.clone(),
            source,
        })?;

        // Set restrictive permissions on Unix before renaming
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600)).map_err(
                |source| StorageError::Write {
                    path: tmp_path.clone(),
                    source,
                },
            )?;
        }

        std::fs::rename(&tmp_path, &path).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "value written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "value removed");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Remove { path, source }),
        }
    }
}
