// home4u_cart/src/cart/view.rs

use crate::cart::{Cart, CartLineItem};
use serde::Serialize;

/// Read model handed to rendering code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
  pub items: Vec<CartLineItem>,
  pub line_count: usize,
  pub total_quantity: u64,
  pub total: f64,
}

impl From<&Cart> for CartView {
  fn from(cart: &Cart) -> Self {
    Self {
      items: cart.items().to_vec(),
      line_count: cart.len(),
      total_quantity: cart.total_quantity(),
      total: cart.total(),
    }
  }
}
