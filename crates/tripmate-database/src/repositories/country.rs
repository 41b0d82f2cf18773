//! Country lookup repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tripmate_core::error::{AppError, ErrorKind};
use tripmate_core::result::AppResult;
use tripmate_entity::Country;

use crate::stores::CountryLookup;

/// PostgreSQL-backed country lookup.
#[derive(Debug, Clone)]
pub struct CountryRepository {
    pool: PgPool,
}

impl CountryRepository {
    /// Create a new country repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CountryLookup for CountryRepository {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Country>> {
        sqlx::query_as::<_, Country>(
            "SELECT id, code, name FROM countries WHERE code = UPPER($1)",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find country", e))
    }
}
