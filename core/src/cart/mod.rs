// home4u_cart/src/cart/mod.rs

//! The in-memory cart and its state transitions.
//!
//! Every transition returns the [`CartEvent`] it produced, or `None` when the
//! call left the cart untouched. Persistence and notification are driven by
//! the caller (see [`CartManager`](crate::CartManager)), never from here.

pub mod line_item;
pub mod view;

pub use line_item::{CartLineItem, ProductId, RemoveMode};
pub use view::CartView;

use crate::notify::CartEvent;
use tracing::{debug, warn};

/// Upper bound for one line's quantity.
pub const MAX_LINE_QUANTITY: u32 = u32::MAX;

/// Ordered line items, unique by product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
  items: Vec<CartLineItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builds a cart from already-validated items.
  ///
  /// Callers must uphold uniqueness and the quantity floor; the persistence
  /// layer does this when decoding a stored record.
  pub(crate) fn from_items(items: Vec<CartLineItem>) -> Self {
    debug_assert!(items.iter().all(|item| item.quantity >= 1));
    Self { items }
  }

  pub fn items(&self) -> &[CartLineItem] {
    &self.items
  }

  pub fn get(&self, product_id: ProductId) -> Option<&CartLineItem> {
    self.items.iter().find(|item| item.product_id == product_id)
  }

  pub fn contains(&self, product_id: ProductId) -> bool {
    self.get(product_id).is_some()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Sum of `quantity * unit_price`.
  pub fn total(&self) -> f64 {
    self.items.iter().map(CartLineItem::line_total).sum()
  }

  pub fn total_quantity(&self) -> u64 {
    self.items.iter().map(|item| u64::from(item.quantity)).sum()
  }

  fn position(&self, product_id: ProductId) -> Option<usize> {
    self.items.iter().position(|item| item.product_id == product_id)
  }

  /// Adds one unit. A repeat add refreshes price and name to the values passed in.
  ///
  /// A non-finite price is stored as 0. `None` when the line is already at
  /// [`MAX_LINE_QUANTITY`].
  pub fn add(&mut self, product_id: ProductId, unit_price: f64, display_name: Option<String>) -> Option<CartEvent> {
    let unit_price = if unit_price.is_finite() {
      unit_price
    } else {
      warn!(product_id, unit_price, "Cart: non-finite price, storing 0.");
      0.0
    };

    match self.position(product_id) {
      Some(idx) => {
        let item = &mut self.items[idx];
        if item.quantity == MAX_LINE_QUANTITY {
          warn!(product_id, "Cart: line item is at its maximum quantity, ignoring add.");
          return None;
        }
        item.quantity += 1;
        item.unit_price = unit_price;
        item.display_name = display_name.clone();
        debug!(product_id, quantity = item.quantity, "Cart: incremented existing line item.");
        Some(CartEvent::QuantityIncremented {
          product_id,
          name: display_name,
          quantity: item.quantity,
        })
      }
      None => {
        self
          .items
          .push(CartLineItem::new(product_id, unit_price, display_name.clone()));
        debug!(product_id, "Cart: inserted new line item.");
        Some(CartEvent::Added {
          product_id,
          name: display_name,
        })
      }
    }
  }

  /// Removes or reduces an item. Deletion wins when only one unit is left,
  /// whatever `mode` asks for. Unknown ids are a no-op.
  pub fn remove(
    &mut self,
    product_id: ProductId,
    mode: RemoveMode,
    display_name: Option<String>,
  ) -> Option<CartEvent> {
    let idx = match self.position(product_id) {
      Some(idx) => idx,
      None => {
        debug!(product_id, %mode, "Cart: remove requested for absent product, ignoring.");
        return None;
      }
    };

    if mode == RemoveMode::Delete || self.items[idx].quantity == 1 {
      let removed = self.items.remove(idx);
      debug!(product_id, %mode, "Cart: removed line item.");
      return Some(CartEvent::Removed {
        product_id,
        name: display_name.or(removed.display_name),
      });
    }

    let item = &mut self.items[idx];
    item.quantity -= 1;
    debug!(product_id, quantity = item.quantity, "Cart: reduced line item.");
    Some(CartEvent::Reduced {
      product_id,
      name: display_name.or_else(|| item.display_name.clone()),
      quantity: item.quantity,
    })
  }

  /// Sets the quantity exactly. Anything below 1 is a delete.
  pub fn set_quantity(
    &mut self,
    product_id: ProductId,
    quantity: i64,
    display_name: Option<String>,
  ) -> Option<CartEvent> {
    if quantity < 1 {
      return self.remove(product_id, RemoveMode::Delete, display_name);
    }

    let idx = match self.position(product_id) {
      Some(idx) => idx,
      None => {
        warn!(product_id, quantity, "Cart: cannot set quantity on a product that is not in the cart.");
        return None;
      }
    };

    let new_quantity = match u32::try_from(quantity) {
      Ok(q) => q,
      Err(_) => {
        warn!(product_id, quantity, max = MAX_LINE_QUANTITY, "Cart: requested quantity too large, clamping.");
        MAX_LINE_QUANTITY
      }
    };
    let item = &mut self.items[idx];
    let old_quantity = item.quantity;
    if new_quantity == old_quantity {
      return None;
    }

    item.quantity = new_quantity;
    debug!(product_id, old_quantity, new_quantity, "Cart: quantity set.");
    let name = display_name.or_else(|| item.display_name.clone());
    Some(if new_quantity > old_quantity {
      CartEvent::Increased {
        product_id,
        name,
        quantity: new_quantity,
      }
    } else {
      CartEvent::Decreased {
        product_id,
        name,
        quantity: new_quantity,
      }
    })
  }

  /// Empties the cart. `None` if it was already empty.
  pub fn clear(&mut self) -> Option<CartEvent> {
    if self.items.is_empty() {
      return None;
    }
    let removed = self.items.len();
    self.items.clear();
    debug!(removed, "Cart: cleared.");
    Some(CartEvent::Cleared { removed })
  }
}
