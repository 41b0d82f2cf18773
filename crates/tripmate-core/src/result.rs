//! Convenience result type alias for TripMate.

use crate::error::AppError;

/// A specialized `Result` type for TripMate operations.
pub type AppResult<T> = Result<T, AppError>;
