// home4u_cart/src/persist/file_store.rs

//! A [`CartStore`] backed by a single JSON object file.

use crate::error::StoreError;
use crate::persist::store::CartStore;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mirrors the file in memory; every write rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
  path: PathBuf,
  entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
  /// Opens `path`, treating a missing file as an empty store.
  pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
    let path = path.as_ref().to_path_buf();
    let entries = match fs::read_to_string(&path) {
      Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
      Ok(raw) => serde_json::from_str::<BTreeMap<String, String>>(&raw)
        .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?,
      Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
      Err(e) => return Err(StoreError::Io(e)),
    };
    debug!(path = %path.display(), keys = entries.len(), "FileStore opened.");
    Ok(Self {
      path,
      entries: Mutex::new(entries),
    })
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
    let raw = serde_json::to_string_pretty(entries).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    if let Some(parent) = self.path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }
    let tmp = self.path.with_extension("tmp");
    fs::write(&tmp, raw)?;
    fs::rename(&tmp, &self.path)?;
    Ok(())
  }
}

impl CartStore for FileStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.lock().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    let mut entries = self.entries.lock();
    entries.insert(key.to_string(), value.to_string());
    self.flush(&entries)
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    let mut entries = self.entries.lock();
    if entries.remove(key).is_some() {
      self.flush(&entries)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn values_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let store = FileStore::open(&path).unwrap();
    store.set("cart-3", r#"{"cartProducts":[]}"#).unwrap();
    store.set("cart-4", "x").unwrap();
    store.remove("cart-4").unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    assert_eq!(reopened.get("cart-3").unwrap().as_deref(), Some(r#"{"cartProducts":[]}"#));
    assert_eq!(reopened.get("cart-4").unwrap(), None);
  }

  #[test]
  fn missing_file_is_empty_and_garbage_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path().join("nested").join("none.json")).unwrap();
    assert_eq!(store.get("cart-1").unwrap(), None);

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "[1,2,3]").unwrap();
    assert!(matches!(FileStore::open(&bad), Err(StoreError::Corrupt(_))));
  }
}
