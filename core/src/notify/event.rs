// home4u_cart/src/notify/event.rs

//! Typed outcome of a cart mutation, decoupled from how it is shown.

use crate::cart::ProductId;
use serde::Serialize;

/// One user-visible outcome. Exactly one is produced per state-changing call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CartEvent {
  /// Product was not in the cart before.
  #[serde(rename = "added", rename_all = "camelCase")]
  Added { product_id: ProductId, name: Option<String> },

  /// Repeat add of a product already in the cart.
  #[serde(rename = "updated", rename_all = "camelCase")]
  QuantityIncremented {
    product_id: ProductId,
    name: Option<String>,
    quantity: u32,
  },

  #[serde(rename = "reduced", rename_all = "camelCase")]
  Reduced {
    product_id: ProductId,
    name: Option<String>,
    quantity: u32,
  },

  #[serde(rename = "removed", rename_all = "camelCase")]
  Removed { product_id: ProductId, name: Option<String> },

  /// Explicit quantity set, upwards.
  #[serde(rename = "increased", rename_all = "camelCase")]
  Increased {
    product_id: ProductId,
    name: Option<String>,
    quantity: u32,
  },

  /// Explicit quantity set, downwards.
  #[serde(rename = "decreased", rename_all = "camelCase")]
  Decreased {
    product_id: ProductId,
    name: Option<String>,
    quantity: u32,
  },

  /// `removed` is the number of line items present before clearing.
  #[serde(rename = "cleared", rename_all = "camelCase")]
  Cleared { removed: usize },
}

impl CartEvent {
  /// Short category tag, also used as the toast icon.
  pub fn kind(&self) -> &'static str {
    match self {
      CartEvent::Added { .. } => "added",
      CartEvent::QuantityIncremented { .. } => "updated",
      CartEvent::Reduced { .. } => "reduced",
      CartEvent::Removed { .. } => "removed",
      CartEvent::Increased { .. } => "increased",
      CartEvent::Decreased { .. } => "decreased",
      CartEvent::Cleared { .. } => "cleared",
    }
  }

  pub fn product_id(&self) -> Option<ProductId> {
    match self {
      CartEvent::Added { product_id, .. }
      | CartEvent::QuantityIncremented { product_id, .. }
      | CartEvent::Reduced { product_id, .. }
      | CartEvent::Removed { product_id, .. }
      | CartEvent::Increased { product_id, .. }
      | CartEvent::Decreased { product_id, .. } => Some(*product_id),
      CartEvent::Cleared { .. } => None,
    }
  }

  /// The quantity left after the mutation, where the event carries one.
  pub fn quantity(&self) -> Option<u32> {
    match self {
      CartEvent::QuantityIncremented { quantity, .. }
      | CartEvent::Reduced { quantity, .. }
      | CartEvent::Increased { quantity, .. }
      | CartEvent::Decreased { quantity, .. } => Some(*quantity),
      CartEvent::Added { .. } => Some(1),
      CartEvent::Removed { .. } | CartEvent::Cleared { .. } => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn serializes_with_kind_tag() {
    let event = CartEvent::Reduced {
      product_id: 42,
      name: Some("Lamp".into()),
      quantity: 1,
    };
    assert_eq!(
      serde_json::to_value(&event).unwrap(),
      json!({"kind": "reduced", "productId": 42, "name": "Lamp", "quantity": 1})
    );
    assert_eq!(
      serde_json::to_value(CartEvent::Cleared { removed: 3 }).unwrap(),
      json!({"kind": "cleared", "removed": 3})
    );
  }

  #[test]
  fn kind_matches_category_tags() {
    let added = CartEvent::Added { product_id: 1, name: None };
    assert_eq!(added.kind(), "added");
    assert_eq!(added.quantity(), Some(1));
    assert_eq!(CartEvent::Cleared { removed: 2 }.product_id(), None);
  }
}
