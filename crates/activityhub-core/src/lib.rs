//! # activityhub-core
//!
//! Core crate for ActivityHub. Contains the collaborator traits the
//! notification engine consumes, configuration schemas, the clock
//! abstraction and the unified error system.
//!
//! This crate has **no** internal dependencies on other ActivityHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
