//! Shared value types.

pub mod clock;
pub mod kind;

pub use clock::{Clock, FixedClock, SystemClock, local_to_utc};
pub use kind::NotificationKind;
