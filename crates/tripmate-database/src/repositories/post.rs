//! Post repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use tripmate_core::error::{AppError, ErrorKind};
use tripmate_core::result::AppResult;
use tripmate_core::types::pagination::{PageRequest, PageResponse};
use tripmate_entity::{NewPost, Post};

use crate::stores::PostStore;

const COLUMNS: &str = "id, author_id, profile_owner_id, country_id, collection_id, \
                       city_name, latitude, longitude, caption, visibility, \
                       shared_group_id, created_at, updated_at";

/// PostgreSQL-backed post store.
#[derive(Debug, Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    /// Create a new post repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert_one(
        tx: &mut Transaction<'_, Postgres>,
        draft: &NewPost,
    ) -> Result<Post, sqlx::Error> {
        sqlx::query_as::<_, Post>(&format!(
            "INSERT INTO posts \
             (author_id, profile_owner_id, country_id, collection_id, city_name, \
              latitude, longitude, caption, visibility, shared_group_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING {COLUMNS}"
        ))
        .bind(draft.author_id)
        .bind(draft.profile_owner_id)
        .bind(draft.country_id)
        .bind(draft.collection_id)
        .bind(&draft.location.city_name)
        .bind(draft.location.latitude)
        .bind(draft.location.longitude)
        .bind(&draft.caption)
        .bind(draft.visibility)
        .bind(draft.shared_group_id)
        .fetch_one(&mut **tx)
        .await
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Post>> {
        sqlx::query_as::<_, Post>(&format!("SELECT {COLUMNS} FROM posts WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find post", e))
    }

    async fn create_many(&self, drafts: &[NewPost]) -> AppResult<Vec<Post>> {
        // One transaction for the whole creation request: a shared pair is
        // never visible half-written.
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let mut created = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let post = Self::insert_one(&mut tx, draft).await.map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert post", e)
            })?;
            created.push(post);
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit posts", e)
        })?;
        Ok(created)
    }

    async fn update(&self, post: &Post) -> AppResult<Post> {
        sqlx::query_as::<_, Post>(&format!(
            "UPDATE posts SET caption = $2, collection_id = $3, updated_at = $4 \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(post.id)
        .bind(&post.caption)
        .bind(post.collection_id)
        .bind(post.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update post", e))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete post", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn exists_for_profile(
        &self,
        profile_owner_id: Uuid,
        country_id: Uuid,
    ) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM posts \
             WHERE profile_owner_id = $1 AND country_id = $2)",
        )
        .bind(profile_owner_id)
        .bind(country_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check visit evidence", e)
        })
    }

    async fn find_by_group(&self, group_id: Uuid) -> AppResult<Vec<Post>> {
        sqlx::query_as::<_, Post>(&format!(
            "SELECT {COLUMNS} FROM posts WHERE shared_group_id = $1 ORDER BY created_at"
        ))
        .bind(group_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load shared group", e))
    }

    async fn list_by_profile(
        &self,
        profile_owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Post>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE profile_owner_id = $1")
                .bind(profile_owner_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count posts", e)
                })?;

        let posts = sqlx::query_as::<_, Post>(&format!(
            "SELECT {COLUMNS} FROM posts WHERE profile_owner_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        ))
        .bind(profile_owner_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list posts", e))?;

        Ok(PageResponse::new(posts, page, total as u64))
    }
}
