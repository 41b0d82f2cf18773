//! In-memory store implementations and fixtures for service tests.
//!
//! The services only see the store ports, so the whole permission and
//! post core runs here without a database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use tripmate_core::error::AppError;
use tripmate_core::events::DomainEvent;
use tripmate_core::result::AppResult;
use tripmate_core::traits::EventSink;
use tripmate_core::types::pagination::{PageRequest, PageResponse};
use tripmate_database::stores::{
    CollectionLookup, CountryLookup, PermissionStore, PostStore, UserLookup,
};
use tripmate_entity::{
    Collection, Country, NewPermission, NewPost, Permission, PermissionStatus, Post,
    PostVisibility, User,
};
use tripmate_service::context::RequestContext;
use tripmate_service::permission::PermissionService;
use tripmate_service::post::{CollaborationAuthorizer, PostLifecycleGuard, PostService};

// ── In-memory stores ─────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryUsers {
    rows: Mutex<Vec<User>>,
}

impl MemoryUsers {
    pub fn add(&self, username: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: None,
            display_name: None,
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(user.clone());
        user
    }
}

#[async_trait]
impl UserLookup for MemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }
}

pub struct MemoryCountries {
    rows: Vec<Country>,
}

impl MemoryCountries {
    pub fn seeded() -> Self {
        let rows = [("BR", "Brazil"), ("FR", "France"), ("JP", "Japan")]
            .into_iter()
            .map(|(code, name)| Country {
                id: Uuid::new_v4(),
                code: code.to_string(),
                name: name.to_string(),
            })
            .collect();
        Self { rows }
    }

    pub fn get(&self, code: &str) -> Country {
        self.rows.iter().find(|c| c.code == code).cloned().unwrap()
    }
}

#[async_trait]
impl CountryLookup for MemoryCountries {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Country>> {
        Ok(self
            .rows
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned())
    }
}

pub struct MemoryCollections {
    rows: Vec<Collection>,
}

impl MemoryCollections {
    pub fn seeded() -> Self {
        let rows = [("cities", "Cities"), ("food", "Food")]
            .into_iter()
            .map(|(code, name)| Collection {
                id: Uuid::new_v4(),
                code: code.to_string(),
                name: name.to_string(),
            })
            .collect();
        Self { rows }
    }

    pub fn get(&self, code: &str) -> Collection {
        self.rows.iter().find(|c| c.code == code).cloned().unwrap()
    }
}

#[async_trait]
impl CollectionLookup for MemoryCollections {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Collection>> {
        Ok(self
            .rows
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned())
    }
}

#[derive(Default)]
pub struct MemoryPermissions {
    rows: Mutex<Vec<Permission>>,
}

fn paginate(mut rows: Vec<Permission>, page: &PageRequest) -> PageResponse<Permission> {
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let total = rows.len() as u64;
    let items = rows
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();
    PageResponse::new(items, page, total)
}

#[async_trait]
impl PermissionStore for MemoryPermissions {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Permission>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_triple(
        &self,
        grantor_id: Uuid,
        grantee_id: Uuid,
        country_id: Uuid,
    ) -> AppResult<Option<Permission>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| {
                p.grantor_id == grantor_id
                    && p.grantee_id == grantee_id
                    && p.country_id == country_id
            })
            .cloned())
    }

    async fn insert(&self, data: &NewPermission) -> AppResult<Permission> {
        let mut rows = self.rows.lock().unwrap();
        // Mirrors the unique index on the triple.
        if rows.iter().any(|p| {
            p.grantor_id == data.grantor_id
                && p.grantee_id == data.grantee_id
                && p.country_id == data.country_id
        }) {
            return Err(AppError::conflict("permission.already.exists"));
        }
        let permission = Permission {
            id: Uuid::new_v4(),
            grantor_id: data.grantor_id,
            grantee_id: data.grantee_id,
            country_id: data.country_id,
            status: PermissionStatus::Pending,
            invitation_message: data.invitation_message.clone(),
            created_at: Utc::now(),
            responded_at: None,
        };
        rows.push(permission.clone());
        Ok(permission)
    }

    async fn update(&self, permission: &Permission) -> AppResult<Permission> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == permission.id)
            .ok_or_else(|| AppError::not_found("permission.not.found"))?;
        *row = permission.clone();
        Ok(permission.clone())
    }

    async fn has_active(&self, grantee_id: Uuid, country_id: Uuid) -> AppResult<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|p| {
            p.grantee_id == grantee_id
                && p.country_id == country_id
                && p.status == PermissionStatus::Active
        }))
    }

    async fn list_by_grantor(
        &self,
        grantor_id: Uuid,
        status: Option<PermissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Permission>> {
        let rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.grantor_id == grantor_id && status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        Ok(paginate(rows, page))
    }

    async fn list_by_grantee(
        &self,
        grantee_id: Uuid,
        status: Option<PermissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Permission>> {
        let rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.grantee_id == grantee_id && status.map_or(true, |s| p.status == s))
            .cloned()
            .collect();
        Ok(paginate(rows, page))
    }
}

#[derive(Default)]
pub struct MemoryPosts {
    rows: Mutex<Vec<Post>>,
}

impl MemoryPosts {
    fn materialize(draft: &NewPost) -> Post {
        let now = Utc::now();
        Post {
            id: Uuid::new_v4(),
            author_id: draft.author_id,
            profile_owner_id: draft.profile_owner_id,
            country_id: draft.country_id,
            collection_id: draft.collection_id,
            city_name: draft.location.city_name.clone(),
            latitude: draft.location.latitude,
            longitude: draft.location.longitude,
            caption: draft.caption.clone(),
            visibility: draft.visibility,
            shared_group_id: draft.shared_group_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn push_visit(&self, profile_owner_id: Uuid, country_id: Uuid, collection_id: Uuid) -> Post {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            author_id: profile_owner_id,
            profile_owner_id,
            country_id,
            collection_id,
            city_name: "Somewhere".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            caption: "visited".to_string(),
            visibility: PostVisibility::Personal,
            shared_group_id: None,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(post.clone());
        post
    }

    pub fn all(&self) -> Vec<Post> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostStore for MemoryPosts {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create_many(&self, drafts: &[NewPost]) -> AppResult<Vec<Post>> {
        let created: Vec<_> = drafts.iter().map(Self::materialize).collect();
        self.rows.lock().unwrap().extend(created.iter().cloned());
        Ok(created)
    }

    async fn update(&self, post: &Post) -> AppResult<Post> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or_else(|| AppError::not_found("post.not.found"))?;
        *row = post.clone();
        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);
        Ok(rows.len() < before)
    }

    async fn exists_for_profile(
        &self,
        profile_owner_id: Uuid,
        country_id: Uuid,
    ) -> AppResult<bool> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.profile_owner_id == profile_owner_id && p.country_id == country_id))
    }

    async fn find_by_group(&self, group_id: Uuid) -> AppResult<Vec<Post>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.shared_group_id == Some(group_id))
            .cloned()
            .collect())
    }

    async fn list_by_profile(
        &self,
        profile_owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.profile_owner_id == profile_owner_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let total = rows.len() as u64;
        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(PageResponse::new(items, page, total))
    }
}

/// Sink that records every emitted event.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<DomainEvent>>,
}

impl RecordingSink {
    pub fn recorded(&self) -> Vec<DomainEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventSink for RecordingSink {
    async fn emit(&self, event: DomainEvent) -> AppResult<()> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }
}

// ── Fixture ──────────────────────────────────────────────────────

/// Fully wired services over in-memory stores, with seeded countries
/// ("BR", "FR", "JP") and collections ("cities", "food").
pub struct TestEnv {
    pub users: Arc<MemoryUsers>,
    pub countries: Arc<MemoryCountries>,
    pub collections: Arc<MemoryCollections>,
    pub permissions: Arc<MemoryPermissions>,
    pub posts: Arc<MemoryPosts>,
    pub events: Arc<RecordingSink>,
    pub permission_service: PermissionService,
    pub post_service: PostService,
}

impl TestEnv {
    pub fn new() -> Self {
        let users = Arc::new(MemoryUsers::default());
        let countries = Arc::new(MemoryCountries::seeded());
        let collections = Arc::new(MemoryCollections::seeded());
        let permissions = Arc::new(MemoryPermissions::default());
        let posts = Arc::new(MemoryPosts::default());
        let events = Arc::new(RecordingSink::default());

        let permission_service = PermissionService::new(
            permissions.clone(),
            posts.clone(),
            users.clone(),
            countries.clone(),
            events.clone(),
        );

        let authorizer = CollaborationAuthorizer::new(permissions.clone(), posts.clone());
        let guard = PostLifecycleGuard::new(permissions.clone());
        let post_service = PostService::new(
            posts.clone(),
            users.clone(),
            countries.clone(),
            collections.clone(),
            authorizer,
            guard,
        );

        Self {
            users,
            countries,
            collections,
            permissions,
            posts,
            events,
            permission_service,
            post_service,
        }
    }

    pub fn user(&self, username: &str) -> User {
        self.users.add(username)
    }

    pub fn ctx(&self, user: &User) -> RequestContext {
        RequestContext::new(user.id, user.username.clone())
    }

    /// Seed visit evidence: a personal post under the user's own profile.
    pub fn seed_visit(&self, user: &User, country_code: &str) -> Post {
        self.posts.push_visit(
            user.id,
            self.countries.get(country_code).id,
            self.collections.get("cities").id,
        )
    }
}
