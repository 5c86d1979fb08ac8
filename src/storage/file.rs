//! JSON file storage
//!
//! The whole key-value map lives in a single pretty-printed JSON object and
//! is rewritten on every `set`: written to a sibling `.tmp` file, then
//! renamed over the original.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::KeyValueStore;
use crate::error::StoreError;

/// Key-value map persisted to a JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the file at `path`; a missing file is an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let values = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let values: BTreeMap<String, String> = serde_json::from_str(&content)?;
            info!("Opened storage {:?} ({} keys)", path, values.len());
            values
        } else {
            info!("Storage {:?} not found, starting empty", path);
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(&self.values)?;
        let temp = self.temp_path();
        fs::write(&temp, contents)?;
        if let Err(e) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(e.into());
        }
        debug!("Wrote {} keys to {:?}", self.values.len(), self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    /// On a failed write the in-memory map is rolled back
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> {
        let previous = self.values.insert(key.to_string(), value);

        if let Err(e) = self.flush() {
            match previous {
                Some(old) => self.values.insert(key.to_string(), old),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
