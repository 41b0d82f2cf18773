//! # tripmate-core
//!
//! Core crate for TripMate. Contains configuration schemas, domain events,
//! pagination types, the event sink port, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TripMate crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
