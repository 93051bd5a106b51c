//! Directory backed key-value storage

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{
    error::{RCartLibError, Result},
    storage::KeyValueStore,
};

/// Stores each key as its own JSON file inside a directory
///
/// # Examples
///
/// ```
/// # use r_cartlib::storage::{KeyValueStore, file::FileKeyValueStore};
/// let dir = std::env::temp_dir().join("r-cartlib-doc");
/// let store = FileKeyValueStore::new(&dir);
/// store.set("greeting", "\"hello\"").unwrap();
/// assert_eq!(store.get("greeting").unwrap(), Some("\"hello\"".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
}

impl FileKeyValueStore {
    /// Returns a new store rooted at dir. The directory is created lazily on
    /// first write
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the directory holding the stored files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file path used for key
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(RCartLibError::from_storage_err(key, "invalid key"));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("no stored value at {}", path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, value)?;
        log::debug!("wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "./file_tests.rs"]
mod tests;
