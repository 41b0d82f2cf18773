//! Post group coordinator: creates one or two post rows per request and
//! handles post retrieval, editing, and deletion.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use tripmate_core::error::AppError;
use tripmate_core::result::AppResult;
use tripmate_core::types::pagination::{PageRequest, PageResponse};
use tripmate_database::stores::{CollectionLookup, CountryLookup, PostStore, UserLookup};
use tripmate_entity::{Location, NewPost, Post};

use super::authorizer::CollaborationAuthorizer;
use super::guard::PostLifecycleGuard;
use crate::context::RequestContext;

/// How the author wants to involve another user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborationOption {
    /// No collaboration: an ordinary personal post.
    #[default]
    Solo,
    /// Publish together with a named collaborator.
    CollaborateWithUser,
}

/// Where a collaborative moment is filed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharingOption {
    /// A linked pair of shared posts, one under each profile.
    BothProfiles,
    /// A single personal post filed entirely under the collaborator's
    /// profile.
    CollaboratorOnly,
}

/// Request to create a post.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreatePostRequest {
    /// ISO code of the country the post documents.
    pub country_code: String,
    /// Code of the collection the post is filed in.
    pub collection_code: String,
    /// Resolved city name.
    pub city_name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Post caption.
    pub caption: String,
    /// Collaboration mode.
    #[serde(default)]
    pub collaboration: CollaborationOption,
    /// The named collaborator (required for collaboration to take effect).
    pub collaborator_id: Option<Uuid>,
    /// Filing choice for collaborative posts; defaults to both profiles.
    pub sharing: Option<SharingOption>,
}

/// Request to edit a post. Only caption and collection are mutable.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdatePostRequest {
    /// New caption.
    pub caption: Option<String>,
    /// New collection code.
    pub collection_code: Option<String>,
}

/// Creates, retrieves, edits, and deletes posts.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserLookup>,
    countries: Arc<dyn CountryLookup>,
    collections: Arc<dyn CollectionLookup>,
    authorizer: CollaborationAuthorizer,
    guard: PostLifecycleGuard,
}

impl PostService {
    /// Creates a new post service.
    pub fn new(
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserLookup>,
        countries: Arc<dyn CountryLookup>,
        collections: Arc<dyn CollectionLookup>,
        authorizer: CollaborationAuthorizer,
        guard: PostLifecycleGuard,
    ) -> Self {
        Self {
            posts,
            users,
            countries,
            collections,
            authorizer,
            guard,
        }
    }

    /// Create the post rows for one publication request.
    ///
    /// Returns one row for personal and collaborator-only publications,
    /// two (author-owned first) for a both-profiles shared pair. All rows
    /// of a request are written atomically; a failure leaves nothing
    /// behind.
    pub async fn create_post(
        &self,
        ctx: &RequestContext,
        req: CreatePostRequest,
    ) -> AppResult<Vec<Post>> {
        let country = self
            .countries
            .find_by_code(&req.country_code)
            .await?
            .ok_or_else(|| AppError::not_found("country.not.found"))?;
        let collection = self
            .collections
            .find_by_code(&req.collection_code)
            .await?
            .ok_or_else(|| AppError::not_found("collection.not.found"))?;

        let location = Location {
            city_name: req.city_name.clone(),
            latitude: req.latitude,
            longitude: req.longitude,
        };

        let collaborator_id = match req.collaboration {
            CollaborationOption::CollaborateWithUser => req.collaborator_id,
            CollaborationOption::Solo => None,
        };

        let drafts = match collaborator_id {
            Some(collaborator_id) => {
                let collaborator = self
                    .users
                    .find_by_id(collaborator_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("user.not.found"))?;

                let allowed = self
                    .authorizer
                    .can_collaborate(ctx.user_id, collaborator.id, country.id)
                    .await?;
                if !allowed {
                    return Err(AppError::conflict(
                        "post.collaboration.permission.required",
                    ));
                }

                match req.sharing.unwrap_or(SharingOption::BothProfiles) {
                    SharingOption::BothProfiles => {
                        let group_id = Uuid::new_v4();
                        vec![
                            NewPost::shared(
                                ctx.user_id,
                                ctx.user_id,
                                country.id,
                                collection.id,
                                location.clone(),
                                req.caption.clone(),
                                group_id,
                            ),
                            NewPost::shared(
                                ctx.user_id,
                                collaborator.id,
                                country.id,
                                collection.id,
                                location,
                                req.caption.clone(),
                                group_id,
                            ),
                        ]
                    }
                    SharingOption::CollaboratorOnly => {
                        // Authored by one user, filed entirely under the
                        // other's profile, and not tagged shared.
                        vec![NewPost::personal_under(
                            ctx.user_id,
                            collaborator.id,
                            country.id,
                            collection.id,
                            location,
                            req.caption.clone(),
                        )]
                    }
                }
            }
            None => {
                let allowed = self
                    .authorizer
                    .can_post_personally(ctx.user_id, country.id)
                    .await?;
                if !allowed {
                    return Err(AppError::conflict("post.permission.required"));
                }
                vec![NewPost::personal(
                    ctx.user_id,
                    country.id,
                    collection.id,
                    location,
                    req.caption.clone(),
                )]
            }
        };

        let created = self.posts.create_many(&drafts).await?;

        info!(
            author_id = %ctx.user_id,
            country = %country.code,
            count = created.len(),
            shared_group_id = ?created.first().and_then(|p| p.shared_group_id),
            "Post(s) created"
        );

        Ok(created)
    }

    /// All posts linked by a shared group token (0, 1, or 2 rows).
    pub async fn shared_group(&self, group_id: Uuid) -> AppResult<Vec<Post>> {
        self.posts.find_by_group(group_id).await
    }

    /// Posts filed under a profile, newest first.
    pub async fn list_by_profile(
        &self,
        profile_owner_id: Uuid,
        page: PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        self.posts.list_by_profile(profile_owner_id, &page).await
    }

    /// Edit a post's caption and/or collection.
    pub async fn update_post(
        &self,
        ctx: &RequestContext,
        post_id: Uuid,
        req: UpdatePostRequest,
    ) -> AppResult<Post> {
        let mut post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("post.not.found"))?;

        if !self.guard.can_edit(&post, ctx.user_id).await? {
            return Err(AppError::unauthorized("post.edit.denied"));
        }

        if let Some(caption) = req.caption {
            post.caption = caption;
        }
        if let Some(code) = req.collection_code {
            let collection = self
                .collections
                .find_by_code(&code)
                .await?
                .ok_or_else(|| AppError::not_found("collection.not.found"))?;
            post.collection_id = collection.id;
        }
        post.updated_at = Utc::now();

        let post = self.posts.update(&post).await?;

        info!(actor_id = %ctx.user_id, post_id = %post.id, "Post updated");
        Ok(post)
    }

    /// Delete exactly one post row.
    ///
    /// Never cascades to, or clears the group token on, a shared sibling;
    /// the sibling survives as a group of one.
    pub async fn delete_post(&self, ctx: &RequestContext, post_id: Uuid) -> AppResult<()> {
        let post = self
            .posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("post.not.found"))?;

        if !self.guard.can_delete(&post, ctx.user_id) {
            return Err(AppError::unauthorized("post.delete.denied"));
        }

        self.posts.delete(post.id).await?;

        info!(actor_id = %ctx.user_id, post_id = %post.id, "Post deleted");
        Ok(())
    }
}
