// home4u_cart/src/identity.rs

//! The identity collaborator: who the cart belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Integer user identifier as issued by the backend.
///
/// `Display` gives the decimal form that is embedded in the storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for UserId {
  type Err = std::num::ParseIntError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    s.trim().parse::<u64>().map(UserId)
  }
}

impl From<u64> for UserId {
  fn from(id: u64) -> Self {
    UserId(id)
  }
}

/// The current session's identity. `None` while nobody is signed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity(Option<UserId>);

impl Identity {
  pub fn anonymous() -> Self {
    Identity(None)
  }

  pub fn user(id: impl Into<UserId>) -> Self {
    Identity(Some(id.into()))
  }

  pub fn user_id(&self) -> Option<UserId> {
    self.0
  }

  pub fn is_known(&self) -> bool {
    self.0.is_some()
  }
}

impl From<Option<UserId>> for Identity {
  fn from(user: Option<UserId>) -> Self {
    Identity(user)
  }
}

/// Supplies the signed-in user. The manager polls it through
/// [`CartManager::sync_identity`](crate::CartManager::sync_identity).
pub trait IdentityProvider: Send + Sync {
  fn current_user(&self) -> Option<UserId>;
}

/// Fixed identity, used by hosts that resolve the user per request.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIdentity(pub Identity);

impl IdentityProvider for StaticIdentity {
  fn current_user(&self) -> Option<UserId> {
    self.0.user_id()
  }
}
