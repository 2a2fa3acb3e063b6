//! # activityhub-notify
//!
//! Client-side notification engine for ActivityHub:
//!
//! - [`NotificationStore`]: canonical notification list and unread count,
//!   synced from the backend with a local fallback
//! - [`ToastQueue`]: transient on-screen messages, each with its own
//!   expiration and progress timers
//! - [`AutoNotificationEngine`]: polls activities, participation and
//!   evidence, and derives notifications from a fixed rule set
//!
//! Nothing in this crate surfaces a backend failure to its subscribers.
//! Failures are logged and degrade to local state or to "no new
//! notification this cycle".

pub mod engine;
pub mod notification;
pub mod sources;
pub mod state;
pub mod toast;

pub use engine::{AutoNotificationEngine, EngineSources};
pub use notification::{NotificationStore, ToastPreference};
pub use state::StateCell;
pub use toast::{Toast, ToastAction, ToastOptions, ToastQueue};
