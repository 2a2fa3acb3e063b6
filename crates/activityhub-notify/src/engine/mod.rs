//! Automatic notification engine: periodic rule evaluation over domain data.

pub mod rules;
pub mod service;

pub use rules::RuleKind;
pub use service::{AutoNotificationEngine, EngineSources};
