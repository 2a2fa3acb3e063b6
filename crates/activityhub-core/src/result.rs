//! Convenience result type alias for ActivityHub.

use crate::error::AppError;

/// A specialized `Result` type for ActivityHub operations.
pub type AppResult<T> = Result<T, AppError>;
