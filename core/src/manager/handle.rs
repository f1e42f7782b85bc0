// home4u_cart/src/manager/handle.rs

use crate::manager::CartManager;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Shared ownership of one [`CartManager`] for the components of a session.
///
/// Guards are blocking and must not be held across `.await` points.
#[derive(Debug)]
pub struct CartHandle(Arc<RwLock<CartManager>>);

impl CartHandle {
  pub fn new(manager: CartManager) -> Self {
    CartHandle(Arc::new(RwLock::new(manager)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, CartManager> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, CartManager> {
    self.0.write()
  }
}

impl Clone for CartHandle {
  fn clone(&self) -> Self {
    CartHandle(Arc::clone(&self.0))
  }
}
