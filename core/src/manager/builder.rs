// home4u_cart/src/manager/builder.rs

use crate::config::CartConfig;
use crate::error::{CartError, CartResult};
use crate::identity::UserId;
use crate::manager::CartManager;
use crate::notify::NotificationSink;
use crate::persist::CartStore;
use std::sync::Arc;

/// Wires a [`CartManager`] to its collaborators.
///
/// Store and sink are mandatory: building without them is a wiring bug and
/// fails immediately instead of producing a manager that silently drops writes.
#[derive(Default)]
pub struct CartManagerBuilder {
  store: Option<Arc<dyn CartStore>>,
  sink: Option<Arc<dyn NotificationSink>>,
  config: Option<CartConfig>,
  user: Option<UserId>,
}

impl CartManagerBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn store(mut self, store: Arc<dyn CartStore>) -> Self {
    self.store = Some(store);
    self
  }

  pub fn sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
    self.sink = Some(sink);
    self
  }

  pub fn config(mut self, config: CartConfig) -> Self {
    self.config = Some(config);
    self
  }

  /// The user to bind at construction. `None` gives a transient cart.
  pub fn user(mut self, user: Option<UserId>) -> Self {
    self.user = user;
    self
  }

  /// Validates the wiring and performs the initial load.
  pub fn build(self) -> CartResult<CartManager> {
    let store = self
      .store
      .ok_or_else(|| CartError::configuration("CartManager requires a store adapter"))?;
    let sink = self
      .sink
      .ok_or_else(|| CartError::configuration("CartManager requires a notification sink"))?;
    let config = self.config.unwrap_or_default();
    config.validate()?;
    Ok(CartManager::new(store, sink, config, self.user))
  }
}
