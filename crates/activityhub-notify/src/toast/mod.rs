//! Ephemeral on-screen toasts with per-toast expiration and progress timers.

pub mod model;
pub mod queue;
pub mod timer;

pub use model::{Toast, ToastAction, ToastOptions};
pub use queue::ToastQueue;
