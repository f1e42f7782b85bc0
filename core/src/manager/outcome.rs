// home4u_cart/src/manager/outcome.rs

//! Result of a cart operation as seen by the caller.

use crate::notify::CartEvent;

/// Whether an operation changed the cart.
///
/// `Changed` means the cart was persisted and exactly one notification was sent.
/// `Unchanged` means neither happened.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
  Changed(CartEvent),
  Unchanged,
}

impl MutationOutcome {
  pub fn is_changed(&self) -> bool {
    matches!(self, MutationOutcome::Changed(_))
  }

  pub fn event(&self) -> Option<&CartEvent> {
    match self {
      MutationOutcome::Changed(event) => Some(event),
      MutationOutcome::Unchanged => None,
    }
  }

  pub fn into_event(self) -> Option<CartEvent> {
    match self {
      MutationOutcome::Changed(event) => Some(event),
      MutationOutcome::Unchanged => None,
    }
  }
}
