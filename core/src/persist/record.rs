// home4u_cart/src/persist/record.rs

//! Stored layout of a cart: `{ "cartProducts": [ { id, amount, price, name? } ] }`.
//!
//! Field names are fixed by records already sitting in users' browsers and
//! must not follow the in-memory naming.

use crate::cart::{Cart, CartLineItem, ProductId};
use crate::identity::UserId;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLineItem {
  pub id: ProductId,
  pub amount: i64,
  /// Legacy records were written without a price, and browser writers
  /// serialize a NaN price as `null`. Both load as 0.
  #[serde(default)]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartRecord {
  #[serde(rename = "cartProducts")]
  pub cart_products: Vec<StoredLineItem>,
}

impl CartRecord {
  pub fn from_cart(cart: &Cart) -> Self {
    Self {
      cart_products: cart
        .items()
        .iter()
        .map(|item| StoredLineItem {
          id: item.product_id,
          amount: i64::from(item.quantity),
          price: Some(item.unit_price),
          name: item.display_name.clone(),
        })
        .collect(),
    }
  }

  /// Rebuilds a cart, restoring the invariants a hand-edited record may break:
  /// non-positive amounts are dropped and repeated ids are merged.
  pub fn into_cart(self) -> Cart {
    let mut items: Vec<CartLineItem> = Vec::with_capacity(self.cart_products.len());
    for stored in self.cart_products {
      if stored.amount < 1 {
        warn!(product_id = stored.id, amount = stored.amount, "Dropping stored cart entry with non-positive amount.");
        continue;
      }
      let amount = u32::try_from(stored.amount).unwrap_or(u32::MAX);
      let price = match stored.price {
        Some(price) if price.is_finite() => price,
        Some(price) => {
          warn!(product_id = stored.id, price, "Stored cart entry has a non-finite price, using 0.");
          0.0
        }
        None => 0.0,
      };
      match items.iter_mut().find(|item| item.product_id == stored.id) {
        Some(existing) => {
          warn!(product_id = stored.id, "Merging duplicate stored cart entry.");
          existing.quantity = existing.quantity.saturating_add(amount);
          existing.unit_price = price;
          existing.display_name = stored.name;
        }
        None => items.push(CartLineItem {
          product_id: stored.id,
          quantity: amount,
          unit_price: price,
          display_name: stored.name,
        }),
      }
    }
    Cart::from_items(items)
  }

  pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
    serde_json::from_str(raw)
  }

  pub fn encode(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string(self)
  }
}

/// `"<prefix><userId>"`, e.g. `cart-17`.
pub fn storage_key(prefix: &str, user: UserId) -> String {
  format!("{}{}", prefix, user)
}
