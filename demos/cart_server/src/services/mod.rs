// demos/cart_server/src/services/mod.rs

pub mod cart_sessions;

pub use cart_sessions::{CartSessions, SessionResult};
