// home4u_cart/src/config.rs

use crate::error::{CartError, CartResult};
use crate::notify::ToastSettings;
use serde::{Deserialize, Serialize};

pub const DEFAULT_STORAGE_PREFIX: &str = "cart-";

/// Knobs for a [`CartManager`](crate::CartManager). Embeddable in a host's own config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
  /// Storage key prefix; the user id is appended.
  pub storage_prefix: String,
  pub toast: ToastSettings,
}

impl Default for CartConfig {
  fn default() -> Self {
    Self {
      storage_prefix: DEFAULT_STORAGE_PREFIX.to_string(),
      toast: ToastSettings::default(),
    }
  }
}

impl CartConfig {
  pub fn validate(&self) -> CartResult<()> {
    if self.storage_prefix.trim().is_empty() {
      return Err(CartError::configuration("storage_prefix must not be empty"));
    }
    Ok(())
  }
}
