// home4u_cart/src/manager/mod.rs

//! The cart manager: owns the active user's [`Cart`], writes it through to the
//! store after every change and reports each change to the notification sink.

pub mod builder;
pub mod handle;
pub mod operations;
pub mod outcome;

pub use builder::CartManagerBuilder;
pub use handle::CartHandle;
pub use outcome::MutationOutcome;

use crate::cart::{Cart, CartView};
use crate::config::CartConfig;
use crate::error::{CartError, CartResult};
use crate::identity::{IdentityProvider, UserId};
use crate::notify::NotificationSink;
use crate::persist::{storage_key, CartRecord, CartStore};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct CartManager {
  store: Arc<dyn CartStore>,
  sink: Arc<dyn NotificationSink>,
  config: CartConfig,
  user: Option<UserId>,
  /// `None` while no user is bound; nothing is read or written then.
  key: Option<String>,
  cart: Cart,
}

impl fmt::Debug for CartManager {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CartManager")
      .field("user", &self.user)
      .field("key", &self.key)
      .field("items", &self.cart.len())
      .finish()
  }
}

impl CartManager {
  pub fn builder() -> CartManagerBuilder {
    CartManagerBuilder::new()
  }

  pub(crate) fn new(
    store: Arc<dyn CartStore>,
    sink: Arc<dyn NotificationSink>,
    config: CartConfig,
    user: Option<UserId>,
  ) -> Self {
    let mut manager = Self {
      store,
      sink,
      config,
      user: None,
      key: None,
      cart: Cart::new(),
    };
    manager.bind(user);
    manager
  }

  pub fn user(&self) -> Option<UserId> {
    self.user
  }

  /// Storage key of the bound user, if any.
  pub fn storage_key(&self) -> Option<&str> {
    self.key.as_deref()
  }

  pub fn config(&self) -> &CartConfig {
    &self.config
  }

  pub fn cart(&self) -> &Cart {
    &self.cart
  }

  /// Snapshot for rendering. Totals are computed on each call.
  pub fn view(&self) -> CartView {
    CartView::from(&self.cart)
  }

  /// Switches to another user's cart. The previous user's record stays in the store.
  pub fn rebind(&mut self, user: Option<UserId>) {
    if user == self.user {
      return;
    }
    info!(from = ?self.user, to = ?user, "CartManager: identity changed, reloading cart.");
    self.bind(user);
  }

  /// Re-reads the provider and rebinds when the user changed.
  pub fn sync_identity(&mut self, provider: &dyn IdentityProvider) {
    self.rebind(provider.current_user());
  }

  fn bind(&mut self, user: Option<UserId>) {
    self.user = user;
    self.key = user.map(|id| storage_key(&self.config.storage_prefix, id));
    self.cart = self.load();
  }

  #[instrument(name = "CartManager::load", skip(self), fields(key = ?self.key))]
  fn load(&self) -> Cart {
    let key = match &self.key {
      Some(key) => key,
      None => {
        debug!("No user bound, starting a transient cart.");
        return Cart::new();
      }
    };

    let raw = match self.store.get(key) {
      Ok(Some(raw)) => raw,
      Ok(None) => {
        debug!("No stored cart, starting empty.");
        return Cart::new();
      }
      Err(e) => {
        warn!(error = %e, "Store read failed, starting with an empty cart.");
        return Cart::new();
      }
    };

    match CartRecord::decode(&raw) {
      Ok(record) => {
        let cart = record.into_cart();
        debug!(items = cart.len(), "Stored cart loaded.");
        cart
      }
      Err(e) => {
        warn!(error = %e, "Stored cart is malformed, discarding it.");
        if let Err(e) = self.store.remove(key) {
          warn!(error = %e, "Could not remove malformed cart record.");
        }
        Cart::new()
      }
    }
  }

  /// Writes the full cart under the bound key. A transient cart writes nothing.
  pub(crate) fn persist(&self) -> CartResult<()> {
    let key = match &self.key {
      Some(key) => key,
      None => return Ok(()),
    };
    let encoded = CartRecord::from_cart(&self.cart)
      .encode()
      .map_err(|source| CartError::Codec {
        key: key.clone(),
        source,
      })?;
    self
      .store
      .set(key, &encoded)
      .map_err(|source| CartError::store(key.as_str(), source))
  }
}
