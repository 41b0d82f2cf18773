//! # tripmate-database
//!
//! Persistence layer for TripMate: the store port traits consumed by the
//! service layer, their PostgreSQL implementations, connection pooling,
//! and the migration runner.
//!
//! Tests substitute in-memory implementations of the same ports, so the
//! service layer never needs a live database to be exercised.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod stores;

pub use stores::{CollectionLookup, CountryLookup, PermissionStore, PostStore, UserLookup};
