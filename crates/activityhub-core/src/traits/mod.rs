//! Core traits defined in `activityhub-core` and implemented by the shell.

pub mod navigator;

pub use navigator::{Navigator, NoopNavigator};
