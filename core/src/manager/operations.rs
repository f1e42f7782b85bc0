// home4u_cart/src/manager/operations.rs

//! The four mutations UI code may call. Each one settles the in-memory state,
//! then runs the commit step (persist, then notify) if anything changed.

use crate::cart::{ProductId, RemoveMode};
use crate::manager::{CartManager, MutationOutcome};
use crate::notify::{CartEvent, Toast};
use tracing::{instrument, warn};

impl CartManager {
  /// Adds one unit of `product_id`, merging with an existing line.
  /// Unchanged only when the line is already at its maximum quantity.
  #[instrument(name = "CartManager::add_to_cart", skip(self, display_name), fields(user = ?self.user()))]
  pub fn add_to_cart(
    &mut self,
    product_id: ProductId,
    unit_price: f64,
    display_name: Option<String>,
  ) -> MutationOutcome {
    let event = self.cart.add(product_id, unit_price, display_name);
    self.commit_opt(event)
  }

  #[instrument(name = "CartManager::remove_from_cart", skip(self, display_name), fields(user = ?self.user()))]
  pub fn remove_from_cart(
    &mut self,
    product_id: ProductId,
    mode: RemoveMode,
    display_name: Option<String>,
  ) -> MutationOutcome {
    let event = self.cart.remove(product_id, mode, display_name);
    self.commit_opt(event)
  }

  /// Sets an exact quantity; `quantity < 1` behaves as a delete.
  #[instrument(name = "CartManager::update_quantity", skip(self, display_name), fields(user = ?self.user()))]
  pub fn update_quantity(
    &mut self,
    product_id: ProductId,
    quantity: i64,
    display_name: Option<String>,
  ) -> MutationOutcome {
    if quantity < 1 {
      return self.remove_from_cart(product_id, RemoveMode::Delete, display_name);
    }
    let event = self.cart.set_quantity(product_id, quantity, display_name);
    self.commit_opt(event)
  }

  #[instrument(name = "CartManager::clear_cart", skip(self), fields(user = ?self.user()))]
  pub fn clear_cart(&mut self) -> MutationOutcome {
    let event = self.cart.clear();
    self.commit_opt(event)
  }

  fn commit_opt(&mut self, event: Option<CartEvent>) -> MutationOutcome {
    match event {
      Some(event) => self.commit(event),
      None => MutationOutcome::Unchanged,
    }
  }

  fn commit(&mut self, event: CartEvent) -> MutationOutcome {
    // Fire-and-forget: a failed write is logged and never retried.
    if let Err(e) = self.persist() {
      warn!(error = %e, "Cart write-through failed.");
    }
    self.sink.notify(Toast::from_event(&event, &self.config.toast));
    MutationOutcome::Changed(event)
  }
}
