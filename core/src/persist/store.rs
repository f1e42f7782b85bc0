// home4u_cart/src/persist/store.rs

use crate::error::StoreError;
use parking_lot::RwLock;
use std::collections::HashMap;

/// String key-value storage the cart is persisted into.
///
/// Implementations are shared between managers, so they take `&self`.
/// Concurrent writers to one key are last-write-wins.
pub trait CartStore: Send + Sync {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

  /// Replaces the whole value under `key`.
  fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

  /// Removing a missing key is not an error.
  fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Process-local store, the equivalent of one browser profile's storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Seeds a store with existing raw values.
  pub fn with_entries<I, K, V>(entries: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      entries: RwLock::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
    }
  }

  pub fn contains_key(&self, key: &str) -> bool {
    self.entries.read().contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.entries.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.read().is_empty()
  }
}

impl CartStore for MemoryStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    Ok(self.entries.read().get(key).cloned())
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self.entries.write().insert(key.to_string(), value.to_string());
    Ok(())
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    self.entries.write().remove(key);
    Ok(())
  }
}
