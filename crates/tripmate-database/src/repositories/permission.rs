//! Travel permission repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use tripmate_core::error::{AppError, ErrorKind};
use tripmate_core::result::AppResult;
use tripmate_core::types::pagination::{PageRequest, PageResponse};
use tripmate_entity::{NewPermission, Permission, PermissionStatus};

use crate::stores::PermissionStore;

const COLUMNS: &str = "id, grantor_id, grantee_id, country_id, status, \
                       invitation_message, created_at, responded_at";

/// PostgreSQL-backed permission store.
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    pool: PgPool,
}

impl PermissionRepository {
    /// Create a new permission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn list_by_side(
        &self,
        side_column: &str,
        user_id: Uuid,
        status: Option<PermissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Permission>> {
        let filter = if status.is_some() {
            format!("{side_column} = $1 AND status = $2")
        } else {
            format!("{side_column} = $1")
        };

        let count_sql = format!("SELECT COUNT(*) FROM travel_permissions WHERE {filter}");
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql).bind(user_id);
        if let Some(status) = status {
            count_query = count_query.bind(status);
        }
        let total = count_query.fetch_one(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count permissions", e)
        })?;

        let list_sql = format!(
            "SELECT {COLUMNS} FROM travel_permissions WHERE {filter} \
             ORDER BY created_at DESC LIMIT {} OFFSET {}",
            page.limit(),
            page.offset()
        );
        let mut list_query = sqlx::query_as::<_, Permission>(&list_sql).bind(user_id);
        if let Some(status) = status {
            list_query = list_query.bind(status);
        }
        let rows = list_query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list permissions", e)
        })?;

        Ok(PageResponse::new(rows, page, total as u64))
    }
}

#[async_trait]
impl PermissionStore for PermissionRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Permission>> {
        sqlx::query_as::<_, Permission>(&format!(
            "SELECT {COLUMNS} FROM travel_permissions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find permission", e))
    }

    async fn find_by_triple(
        &self,
        grantor_id: Uuid,
        grantee_id: Uuid,
        country_id: Uuid,
    ) -> AppResult<Option<Permission>> {
        sqlx::query_as::<_, Permission>(&format!(
            "SELECT {COLUMNS} FROM travel_permissions \
             WHERE grantor_id = $1 AND grantee_id = $2 AND country_id = $3"
        ))
        .bind(grantor_id)
        .bind(grantee_id)
        .bind(country_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find permission by triple", e)
        })
    }

    async fn insert(&self, data: &NewPermission) -> AppResult<Permission> {
        sqlx::query_as::<_, Permission>(&format!(
            "INSERT INTO travel_permissions \
             (grantor_id, grantee_id, country_id, status, invitation_message) \
             VALUES ($1, $2, $3, 'pending', $4) RETURNING {COLUMNS}"
        ))
        .bind(data.grantor_id)
        .bind(data.grantee_id)
        .bind(data.country_id)
        .bind(&data.invitation_message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            // The unique index on (grantor_id, grantee_id, country_id)
            // makes the loser of a concurrent duplicate invitation fail here.
            sqlx::Error::Database(db) if db.code().as_deref() == Some("23505") => {
                AppError::conflict("permission.already.exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert permission", e),
        })
    }

    async fn update(&self, permission: &Permission) -> AppResult<Permission> {
        sqlx::query_as::<_, Permission>(&format!(
            "UPDATE travel_permissions \
             SET status = $2, invitation_message = $3, created_at = $4, responded_at = $5 \
             WHERE id = $1 RETURNING {COLUMNS}"
        ))
        .bind(permission.id)
        .bind(permission.status)
        .bind(&permission.invitation_message)
        .bind(permission.created_at)
        .bind(permission.responded_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update permission", e))
    }

    async fn has_active(&self, grantee_id: Uuid, country_id: Uuid) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM travel_permissions \
             WHERE grantee_id = $1 AND country_id = $2 AND status = 'active')",
        )
        .bind(grantee_id)
        .bind(country_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check active permission", e)
        })
    }

    async fn list_by_grantor(
        &self,
        grantor_id: Uuid,
        status: Option<PermissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Permission>> {
        self.list_by_side("grantor_id", grantor_id, status, page).await
    }

    async fn list_by_grantee(
        &self,
        grantee_id: Uuid,
        status: Option<PermissionStatus>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Permission>> {
        self.list_by_side("grantee_id", grantee_id, status, page).await
    }
}
