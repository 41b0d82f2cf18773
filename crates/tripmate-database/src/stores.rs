//! Store port traits.
//!
//! The service layer depends on these interfaces only; entities carry
//! plain identifiers and every association is resolved through a lookup
//! call. PostgreSQL implementations live in [`crate::repositories`].

use async_trait::async_trait;
use uuid::Uuid;

use tripmate_core::result::AppResult;
use tripmate_core::types::pagination::{PageRequest, PageResponse};
use tripmate_entity::{
    Collection, Country, NewPermission, NewPost, Permission, PermissionStatus, Post, User,
};

/// User resolution by id or username.
#[async_trait]
pub trait UserLookup: Send + Sync {
    /// Find a user by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Country resolution by code.
#[async_trait]
pub trait CountryLookup: Send + Sync {
    /// Find a country by ISO code.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Country>>;
}

/// Posting collection resolution by code.
#[async_trait]
pub trait CollectionLookup: Send + Sync {
    /// Find a collection by its code.
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Collection>>;
}

/// Travel permission persistence.
#[async_trait]
pub trait PermissionStore: Send + Sync {
    /// Find a permission by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Permission>>;

    /// Find the unique row for a (grantor, grantee, country) triple.
    async fn find_by_triple(
        &self,
        grantor_id: Uuid,
        grantee_id: Uuid,
        country_id: Uuid,
    ) -> AppResult<Option<Permission>>;

    /// Insert a brand-new pending row.
    ///
    /// A concurrent duplicate invitation loses the race at the triple
    /// unique index and surfaces as Conflict `permission.already.exists`.
    async fn insert(&self, data: &NewPermission) -> AppResult<Permission>;

    /// Persist a mutated permission row.
    async fn update(&self, permission: &Permission) -> AppResult<Permission>;

    /// Whether the grantee holds an active permission for the country.
    async fn has_active(&self, grantee_id: Uuid, country_id: Uuid) -> AppResult<bool>;

    /// Permissions granted by a user, newest first, optionally filtered.
    async fn list_by_grantor(
        &self,
        grantor_id: Uuid,
        status: Option<PermissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Permission>>;

    /// Permissions received by a user, newest first, optionally filtered.
    async fn list_by_grantee(
        &self,
        grantee_id: Uuid,
        status: Option<PermissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Permission>>;
}

/// Post persistence.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Find a post by ID.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>>;

    /// Insert all rows of one creation request atomically.
    ///
    /// Either every draft becomes a visible row or none does; a shared
    /// pair is never half-written.
    async fn create_many(&self, drafts: &[NewPost]) -> AppResult<Vec<Post>>;

    /// Persist an edited post row.
    async fn update(&self, post: &Post) -> AppResult<Post>;

    /// Delete exactly one post row. Returns `true` if a row was removed.
    async fn delete(&self, id: Uuid) -> AppResult<bool>;

    /// Visit evidence: does any post filed under this profile exist for
    /// the country?
    async fn exists_for_profile(&self, profile_owner_id: Uuid, country_id: Uuid)
        -> AppResult<bool>;

    /// All posts carrying a shared group token.
    async fn find_by_group(&self, group_id: Uuid) -> AppResult<Vec<Post>>;

    /// Posts filed under a profile, newest first.
    async fn list_by_profile(
        &self,
        profile_owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>>;
}
