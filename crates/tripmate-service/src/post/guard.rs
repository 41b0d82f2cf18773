//! Edit/delete authorization for existing posts.

use std::sync::Arc;

use uuid::Uuid;

use tripmate_core::result::AppResult;
use tripmate_database::stores::PermissionStore;
use tripmate_entity::Post;

/// Authorization for mutating an existing post, independent of the rules
/// that governed its creation.
#[derive(Clone)]
pub struct PostLifecycleGuard {
    permissions: Arc<dyn PermissionStore>,
}

impl PostLifecycleGuard {
    /// Creates a new lifecycle guard.
    pub fn new(permissions: Arc<dyn PermissionStore>) -> Self {
        Self { permissions }
    }

    /// Edit rights: the author, or anyone currently holding an active
    /// permission for the post's country. Edit rights follow the live
    /// permission, regardless of which profile the post lives under.
    pub async fn can_edit(&self, post: &Post, actor_id: Uuid) -> AppResult<bool> {
        if post.author_id == actor_id {
            return Ok(true);
        }
        self.permissions.has_active(actor_id, post.country_id).await
    }

    /// Delete rights: the profile owner only. Narrower than edit: the
    /// author of a shared post cannot delete the sibling that lives in
    /// the other profile.
    pub fn can_delete(&self, post: &Post, actor_id: Uuid) -> bool {
        post.profile_owner_id == actor_id
    }
}
