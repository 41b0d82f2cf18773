//! Country entity.

pub mod model;

pub use model::Country;
