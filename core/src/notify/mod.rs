// home4u_cart/src/notify/mod.rs

pub mod event;
pub mod sink;
pub mod toast;

pub use event::CartEvent;
pub use sink::{NoopSink, NotificationSink, RecordingSink, TracingSink};
pub use toast::{Toast, ToastPosition, ToastSettings};
