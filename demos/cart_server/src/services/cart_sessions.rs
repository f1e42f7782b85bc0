// demos/cart_server/src/services/cart_sessions.rs

//! Binds a cart manager to the caller of each request.
//!
//! A browser tab owns one manager for its whole lifetime. Over HTTP the
//! closest equivalent is to bind a manager to the request's user, run the
//! operation and drop it; the store carries the state between requests.
//! Anonymous callers get a fresh transient cart every time.

use crate::errors::Result;
use home4u_cart::{CartConfig, CartManager, CartStore, CartView, RecordingSink, Toast, UserId};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

/// What a request gets back after running against a bound manager.
pub struct SessionResult<T> {
  pub value: T,
  pub cart: CartView,
  /// The toast the operation produced, if it changed anything.
  pub notification: Option<Toast>,
}

pub struct CartSessions {
  store: Arc<dyn CartStore>,
  config: CartConfig,
  // Serializes load-mutate-persist so requests behave like one event loop.
  lock: Mutex<()>,
}

impl CartSessions {
  pub fn new(store: Arc<dyn CartStore>, config: CartConfig) -> Self {
    Self {
      store,
      config,
      lock: Mutex::new(()),
    }
  }

  pub fn run<T>(&self, user: Option<UserId>, op: impl FnOnce(&mut CartManager) -> T) -> Result<SessionResult<T>> {
    let _guard = self.lock.lock();
    let sink = Arc::new(RecordingSink::new());
    let mut manager = CartManager::builder()
      .store(self.store.clone())
      .sink(sink.clone())
      .config(self.config.clone())
      .user(user)
      .build()?;

    let value = op(&mut manager);
    let cart = manager.view();
    let mut toasts = sink.drain();
    debug!(user = ?user, toasts = toasts.len(), lines = cart.line_count, "Cart session finished.");
    Ok(SessionResult {
      value,
      cart,
      notification: toasts.pop(),
    })
  }
}
