//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use tripmate_core::config::AppConfig;
use tripmate_service::permission::PermissionService;
use tripmate_service::post::PostService;

/// Application state passed to every Axum handler via `State<AppState>`.
///
/// Services are cheap to clone; they hold `Arc`s to the stores.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (used directly by the health probe).
    pub db_pool: PgPool,
    /// Travel permission lifecycle service.
    pub permission_service: PermissionService,
    /// Post creation/lifecycle service.
    pub post_service: PostService,
}
