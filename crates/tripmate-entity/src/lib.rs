//! # tripmate-entity
//!
//! Domain entity models for TripMate: users, countries, posting collections,
//! travel permissions (with their state machine), and posts.
//!
//! Entities carry plain identifiers rather than live associations; related
//! rows are resolved through the lookup ports in `tripmate-database`.

pub mod collection;
pub mod country;
pub mod permission;
pub mod post;
pub mod user;

pub use collection::Collection;
pub use country::Country;
pub use permission::{NewPermission, Permission, PermissionAction, PermissionStatus};
pub use post::{Location, NewPost, Post, PostVisibility};
pub use user::User;
