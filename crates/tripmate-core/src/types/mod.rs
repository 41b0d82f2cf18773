//! Shared value types used across TripMate crates.

pub mod pagination;
