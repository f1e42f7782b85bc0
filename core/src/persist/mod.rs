// home4u_cart/src/persist/mod.rs

pub mod file_store;
pub mod record;
pub mod store;

pub use file_store::FileStore;
pub use record::{storage_key, CartRecord, StoredLineItem};
pub use store::{CartStore, MemoryStore};
