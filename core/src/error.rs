// home4u_cart/src/error.rs
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Errors surfaced by the cart core.
///
/// Only wiring problems reach callers as errors. Unknown product ids, corrupt
/// persisted records and an unknown user are absorbed by the manager.
#[derive(Debug, Error)]
pub enum CartError {
  #[error("Cart configuration error: {message}")]
  Configuration { message: String },

  #[error("Store adapter failed for key '{key}'. Source: {source}")]
  Store {
    key: String,
    #[source]
    source: AnyhowError,
  },

  #[error("Cart record for key '{key}' could not be encoded. Source: {source}")]
  Codec {
    key: String,
    #[source]
    source: serde_json::Error,
  },
}

impl CartError {
  pub fn configuration(message: impl Into<String>) -> Self {
    CartError::Configuration {
      message: message.into(),
    }
  }

  pub fn store(key: impl Into<String>, source: StoreError) -> Self {
    CartError::Store {
      key: key.into(),
      source: AnyhowError::new(source),
    }
  }
}

/// Failures reported by a [`CartStore`](crate::persist::CartStore) implementation.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Store I/O failed: {0}")]
  Io(#[from] std::io::Error),

  #[error("Store contents are corrupt: {0}")]
  Corrupt(String),

  #[error("Store is unavailable: {0}")]
  Unavailable(String),
}

pub type CartResult<T, E = CartError> = std::result::Result<T, E>;
