//! Travel permission entity and its state machine.

pub mod model;
pub mod status;

pub use model::{NewPermission, Permission};
pub use status::{PermissionAction, PermissionStatus};
