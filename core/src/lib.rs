// home4u_cart/src/lib.rs

//! Home4U cart: the client-side shopping cart of the Home4U marketplace.
//!
//! A [`CartManager`] owns the line items of the signed-in user and offers four
//! mutations plus a read model:
//!  - `add_to_cart` merges repeat adds into one line and refreshes its price.
//!  - `remove_from_cart` reduces or deletes; a single remaining unit is always deleted.
//!  - `update_quantity` sets an exact quantity, redirecting anything below 1 to a delete.
//!  - `clear_cart` empties the cart.
//!  - `view` gives item count, per-line quantity/price and the derived total.
//!
//! After every change the full cart is written through to a [`CartStore`] under
//! `cart-<userId>` and one [`Toast`] is sent to the [`NotificationSink`]. No-op
//! calls neither write nor notify. Without a known user the cart is transient.

pub mod cart;
pub mod config;
pub mod error;
pub mod identity;
pub mod manager;
pub mod notify;
pub mod persist;

// --- Re-exports for the Public API ---

pub use crate::cart::{Cart, CartLineItem, CartView, ProductId, RemoveMode};
pub use crate::config::CartConfig;
pub use crate::error::{CartError, CartResult, StoreError};
pub use crate::identity::{Identity, IdentityProvider, StaticIdentity, UserId};
pub use crate::manager::{CartHandle, CartManager, CartManagerBuilder, MutationOutcome};
pub use crate::notify::{
  CartEvent, NoopSink, NotificationSink, RecordingSink, Toast, ToastPosition, ToastSettings, TracingSink,
};
pub use crate::persist::{storage_key, CartRecord, CartStore, FileStore, MemoryStore};
