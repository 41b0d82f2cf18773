//! Travel permission lifecycle service.

pub mod service;

pub use service::{InvitePermissionRequest, PermissionService};
