//! Read-side posting authorization predicates.

use std::sync::Arc;

use uuid::Uuid;

use tripmate_core::result::AppResult;
use tripmate_database::stores::{PermissionStore, PostStore};

/// Answers "may this author post as this profile owner in this country?".
///
/// Pure read-side logic over visit history and active permissions; never
/// mutates anything. Callers translate a `false` into a Conflict with the
/// appropriate message key.
#[derive(Clone)]
pub struct CollaborationAuthorizer {
    permissions: Arc<dyn PermissionStore>,
    posts: Arc<dyn PostStore>,
}

impl CollaborationAuthorizer {
    /// Creates a new authorizer.
    pub fn new(permissions: Arc<dyn PermissionStore>, posts: Arc<dyn PostStore>) -> Self {
        Self { permissions, posts }
    }

    /// Whether the author may publish a personal post in the country.
    ///
    /// True on visit evidence (any post filed under the author's own
    /// profile there) or on an active permission naming the author as
    /// grantee: a permission substitutes for a personal visit.
    pub async fn can_post_personally(&self, author_id: Uuid, country_id: Uuid) -> AppResult<bool> {
        if self.posts.exists_for_profile(author_id, country_id).await? {
            return Ok(true);
        }
        self.permissions.has_active(author_id, country_id).await
    }

    /// Whether the author may publish collaboratively in the country.
    ///
    /// Keyed only on the author's active-permission status for the
    /// country. The named collaborator is deliberately not matched
    /// against the grantor of that permission: the permission is
    /// country-scoped, and an authorized grantee may name any
    /// collaborator.
    pub async fn can_collaborate(
        &self,
        author_id: Uuid,
        _collaborator_id: Uuid,
        country_id: Uuid,
    ) -> AppResult<bool> {
        self.permissions.has_active(author_id, country_id).await
    }
}
