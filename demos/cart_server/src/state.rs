// demos/cart_server/src/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use crate::services::CartSessions;
use anyhow::Context;
use home4u_cart::{CartStore, FileStore, MemoryStore};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub sessions: Arc<CartSessions>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Fails with `AppError::Internal` when the configured store file cannot be opened.
  pub fn from_config(config: Arc<AppConfig>) -> Result<Self> {
    let store: Arc<dyn CartStore> = match &config.store_path {
      Some(path) => {
        let store = FileStore::open(path)
          .with_context(|| format!("opening cart store at {}", path.display()))?;
        tracing::info!(path = %path.display(), "Using file-backed cart store.");
        Arc::new(store)
      }
      None => {
        tracing::info!("CART_STORE_PATH not set, carts are kept in memory.");
        Arc::new(MemoryStore::new())
      }
    };
    Ok(Self {
      sessions: Arc::new(CartSessions::new(store, config.cart.clone())),
      config,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::AppError;
  use home4u_cart::CartConfig;

  fn config_with_store(store_path: Option<std::path::PathBuf>) -> Arc<AppConfig> {
    Arc::new(AppConfig {
      server_host: "127.0.0.1".into(),
      server_port: 0,
      store_path,
      cart: CartConfig::default(),
    })
  }

  #[test]
  fn unreadable_store_file_is_an_internal_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("carts.json");
    std::fs::write(&path, "[not a store]").unwrap();

    match AppState::from_config(config_with_store(Some(path))) {
      Err(AppError::Internal(detail)) => {
        assert!(detail.contains("opening cart store"));
        assert!(detail.contains("corrupt"));
      }
      Err(other) => panic!("expected AppError::Internal, got {:?}", other),
      Ok(_) => panic!("expected a corrupt store file to be rejected"),
    }
  }

  #[test]
  fn missing_store_path_keeps_carts_in_memory() {
    let state = AppState::from_config(config_with_store(None)).unwrap();
    assert_eq!(state.config.server_host, "127.0.0.1");
  }
}
