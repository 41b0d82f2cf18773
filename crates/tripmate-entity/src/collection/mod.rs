//! Posting collection entity.

pub mod model;

pub use model::Collection;
