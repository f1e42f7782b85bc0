// home4u_cart/src/cart/line_item.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type ProductId = u64;

/// One product's entry in the cart.
///
/// `quantity` is never 0 while the item is held by a [`Cart`](super::Cart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
  pub product_id: ProductId,
  pub quantity: u32,
  /// Price captured at add/update time.
  pub unit_price: f64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub display_name: Option<String>,
}

impl CartLineItem {
  pub fn new(product_id: ProductId, unit_price: f64, display_name: Option<String>) -> Self {
    Self {
      product_id,
      quantity: 1,
      unit_price,
      display_name,
    }
  }

  pub fn line_total(&self) -> f64 {
    f64::from(self.quantity) * self.unit_price
  }
}

/// How `removeFromCart` treats an item with more than one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemoveMode {
  Reduce,
  #[default]
  Delete,
}

impl fmt::Display for RemoveMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RemoveMode::Reduce => f.write_str("reduce"),
      RemoveMode::Delete => f.write_str("delete"),
    }
  }
}

impl FromStr for RemoveMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "reduce" => Ok(RemoveMode::Reduce),
      "delete" => Ok(RemoveMode::Delete),
      other => Err(format!("unknown remove mode '{}', expected 'reduce' or 'delete'", other)),
    }
  }
}
