//! # activityhub-entity
//!
//! Domain models consumed and produced by the notification engine, plus
//! the mapping from loosely-shaped backend JSON payloads.

pub mod activity;
pub mod evidence;
pub mod fields;
pub mod notification;
pub mod participation;

pub use activity::Activity;
pub use evidence::Evidence;
pub use notification::{Notification, NotificationKind};
pub use participation::Participation;
