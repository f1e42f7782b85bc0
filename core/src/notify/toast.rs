// home4u_cart/src/notify/toast.rs

//! Presentation layer: turns a [`CartEvent`] into a toast payload.

use crate::notify::event::CartEvent;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Screen corner/edge a toast is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
  TopLeft,
  TopCenter,
  #[default]
  TopRight,
  BottomLeft,
  BottomCenter,
  BottomRight,
}

impl ToastPosition {
  pub fn as_str(self) -> &'static str {
    match self {
      ToastPosition::TopLeft => "top-left",
      ToastPosition::TopCenter => "top-center",
      ToastPosition::TopRight => "top-right",
      ToastPosition::BottomLeft => "bottom-left",
      ToastPosition::BottomCenter => "bottom-center",
      ToastPosition::BottomRight => "bottom-right",
    }
  }
}

impl fmt::Display for ToastPosition {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ToastPosition {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "top-left" => Ok(ToastPosition::TopLeft),
      "top-center" => Ok(ToastPosition::TopCenter),
      "top-right" => Ok(ToastPosition::TopRight),
      "bottom-left" => Ok(ToastPosition::BottomLeft),
      "bottom-center" => Ok(ToastPosition::BottomCenter),
      "bottom-right" => Ok(ToastPosition::BottomRight),
      other => Err(format!("unknown toast position '{}'", other)),
    }
  }
}

/// Duration and placement applied to every toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSettings {
  pub duration_ms: u64,
  pub position: ToastPosition,
}

impl Default for ToastSettings {
  fn default() -> Self {
    Self {
      duration_ms: 2000,
      position: ToastPosition::TopRight,
    }
  }
}

/// A fire-and-forget notification as handed to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
  pub message: String,
  pub duration_ms: u64,
  pub position: ToastPosition,
  pub icon: &'static str,
}

impl Toast {
  pub fn from_event(event: &CartEvent, settings: &ToastSettings) -> Self {
    Self {
      message: message_for(event),
      duration_ms: settings.duration_ms,
      position: settings.position,
      icon: event.kind(),
    }
  }
}

fn label(product_id: u64, name: &Option<String>) -> String {
  match name {
    Some(name) if !name.trim().is_empty() => name.clone(),
    _ => format!("product #{}", product_id),
  }
}

fn message_for(event: &CartEvent) -> String {
  match event {
    CartEvent::Added { product_id, name } => {
      format!("{} added to your cart", label(*product_id, name))
    }
    CartEvent::QuantityIncremented {
      product_id,
      name,
      quantity,
    } => format!("{} quantity updated: {}", label(*product_id, name), quantity),
    CartEvent::Reduced {
      product_id,
      name,
      quantity,
    } => format!("{} reduced: new quantity {}", label(*product_id, name), quantity),
    CartEvent::Removed { product_id, name } => {
      format!("{} removed from your cart", label(*product_id, name))
    }
    CartEvent::Increased {
      product_id,
      name,
      quantity,
    } => format!("{} quantity increased to {}", label(*product_id, name), quantity),
    CartEvent::Decreased {
      product_id,
      name,
      quantity,
    } => format!("{} quantity decreased to {}", label(*product_id, name), quantity),
    CartEvent::Cleared { removed } => {
      let noun = if *removed == 1 { "item" } else { "items" };
      format!("Cart cleared: {} {} removed", removed, noun)
    }
  }
}
