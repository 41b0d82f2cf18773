//! Post creation, authorization, and lifecycle.

pub mod authorizer;
pub mod guard;
pub mod service;

pub use authorizer::CollaborationAuthorizer;
pub use guard::PostLifecycleGuard;
pub use service::{
    CollaborationOption, CreatePostRequest, PostService, SharingOption, UpdatePostRequest,
};
