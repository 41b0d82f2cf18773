//! Post entity.

pub mod model;
pub mod visibility;

pub use model::{Location, NewPost, Post};
pub use visibility::PostVisibility;
