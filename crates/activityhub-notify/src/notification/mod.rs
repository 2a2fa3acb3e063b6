//! Notification store, deduplication, formatting and toast preference.

pub mod dedup;
pub mod formatter;
pub mod preferences;
pub mod sample;
pub mod store;

pub use dedup::ProcessedKeys;
pub use formatter::{GeneratedAlert, NotificationFormatter};
pub use preferences::ToastPreference;
pub use store::NotificationStore;
