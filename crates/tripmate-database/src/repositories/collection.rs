//! Posting collection lookup repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tripmate_core::error::{AppError, ErrorKind};
use tripmate_core::result::AppResult;
use tripmate_entity::Collection;

use crate::stores::CollectionLookup;

/// PostgreSQL-backed collection lookup.
#[derive(Debug, Clone)]
pub struct CollectionRepository {
    pool: PgPool,
}

impl CollectionRepository {
    /// Create a new collection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CollectionLookup for CollectionRepository {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Collection>> {
        sqlx::query_as::<_, Collection>(
            "SELECT id, code, name FROM collections WHERE code = LOWER($1)",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find collection", e))
    }
}
