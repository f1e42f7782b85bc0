// tests/common/mod.rs
#![allow(dead_code)] // Not every test binary uses every helper

use home4u_cart::{
  CartConfig, CartManager, CartStore, MemoryStore, NotificationSink, RecordingSink, StoreError, UserId,
};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixture ---
/// A manager wired to an in-memory store and a recording sink that the test keeps hold of.
pub struct Fixture {
  pub store: Arc<MemoryStore>,
  pub sink: Arc<RecordingSink>,
  pub manager: CartManager,
}

impl Fixture {
  pub fn for_user(user: Option<u64>) -> Self {
    Self::with_store(Arc::new(MemoryStore::new()), user)
  }

  pub fn with_store(store: Arc<MemoryStore>, user: Option<u64>) -> Self {
    setup_tracing();
    let sink = Arc::new(RecordingSink::new());
    let manager = CartManager::builder()
      .store(store.clone())
      .sink(sink.clone())
      .config(CartConfig::default())
      .user(user.map(UserId))
      .build()
      .expect("fixture wiring is complete");
    Self { store, sink, manager }
  }

  pub fn stored(&self, user: u64) -> Option<String> {
    self.store.get(&format!("cart-{}", user)).unwrap()
  }

  pub fn icons(&self) -> Vec<&'static str> {
    self.sink.drain().into_iter().map(|toast| toast.icon).collect()
  }
}

pub fn manager_on(store: Arc<dyn CartStore>, sink: Arc<dyn NotificationSink>, user: Option<u64>) -> CartManager {
  setup_tracing();
  CartManager::builder()
    .store(store)
    .sink(sink)
    .user(user.map(UserId))
    .build()
    .expect("fixture wiring is complete")
}

// --- Store doubles ---
/// Counts writes and can be told to fail them.
#[derive(Default)]
pub struct FlakyStore {
  pub inner: MemoryStore,
  pub fail_writes: Mutex<bool>,
  pub fail_reads: Mutex<bool>,
  pub writes: AtomicUsize,
  pub removes: AtomicUsize,
}

impl FlakyStore {
  pub fn writes(&self) -> usize {
    self.writes.load(Ordering::SeqCst)
  }

  pub fn removes(&self) -> usize {
    self.removes.load(Ordering::SeqCst)
  }
}

impl CartStore for FlakyStore {
  fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
    if *self.fail_reads.lock() {
      return Err(StoreError::Unavailable("reads disabled".into()));
    }
    self.inner.get(key)
  }

  fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
    self.writes.fetch_add(1, Ordering::SeqCst);
    if *self.fail_writes.lock() {
      return Err(StoreError::Unavailable("quota exceeded".into()));
    }
    self.inner.set(key, value)
  }

  fn remove(&self, key: &str) -> Result<(), StoreError> {
    self.removes.fetch_add(1, Ordering::SeqCst);
    self.inner.remove(key)
  }
}
