// home4u_cart/src/notify/sink.rs

use crate::notify::toast::Toast;
use parking_lot::Mutex;
use tracing::info;

/// Fire-and-forget UI notification channel.
pub trait NotificationSink: Send + Sync {
  fn notify(&self, toast: Toast);
}

/// Emits each toast as a tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
  fn notify(&self, toast: Toast) {
    info!(
      icon = toast.icon,
      position = %toast.position,
      duration_ms = toast.duration_ms,
      "{}",
      toast.message
    );
  }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
  fn notify(&self, _toast: Toast) {}
}

/// Keeps every toast it receives until drained.
#[derive(Debug, Default)]
pub struct RecordingSink {
  toasts: Mutex<Vec<Toast>>,
}

impl RecordingSink {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self) -> usize {
    self.toasts.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.toasts.lock().is_empty()
  }

  pub fn last(&self) -> Option<Toast> {
    self.toasts.lock().last().cloned()
  }

  /// Takes everything recorded so far, leaving the sink empty.
  pub fn drain(&self) -> Vec<Toast> {
    std::mem::take(&mut *self.toasts.lock())
  }
}

impl NotificationSink for RecordingSink {
  fn notify(&self, toast: Toast) {
    self.toasts.lock().push(toast);
  }
}
