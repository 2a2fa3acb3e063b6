//! Notification domain entities.

pub mod mapping;
pub mod model;

pub use activityhub_core::types::NotificationKind;
pub use model::Notification;
