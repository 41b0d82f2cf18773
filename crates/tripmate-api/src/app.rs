//! Application builder: wires repositories, services, and the router into
//! a running Axum server.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::info;

use tripmate_core::config::AppConfig;
use tripmate_core::error::{AppError, ErrorKind};
use tripmate_core::result::AppResult;
use tripmate_database::repositories::{
    CollectionRepository, CountryRepository, PermissionRepository, PostRepository, UserRepository,
};
use tripmate_database::stores::{
    CollectionLookup, CountryLookup, PermissionStore, PostStore, UserLookup,
};
use tripmate_service::events::LoggingEventSink;
use tripmate_service::permission::PermissionService;
use tripmate_service::post::{CollaborationAuthorizer, PostLifecycleGuard, PostService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the application state from configuration and a database pool.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let users: Arc<dyn UserLookup> = Arc::new(UserRepository::new(db_pool.clone()));
    let countries: Arc<dyn CountryLookup> = Arc::new(CountryRepository::new(db_pool.clone()));
    let collections: Arc<dyn CollectionLookup> =
        Arc::new(CollectionRepository::new(db_pool.clone()));
    let permissions: Arc<dyn PermissionStore> =
        Arc::new(PermissionRepository::new(db_pool.clone()));
    let posts: Arc<dyn PostStore> = Arc::new(PostRepository::new(db_pool.clone()));

    let events = Arc::new(LoggingEventSink);

    let permission_service = PermissionService::new(
        Arc::clone(&permissions),
        Arc::clone(&posts),
        Arc::clone(&users),
        Arc::clone(&countries),
        events,
    );

    let authorizer = CollaborationAuthorizer::new(Arc::clone(&permissions), Arc::clone(&posts));
    let guard = PostLifecycleGuard::new(Arc::clone(&permissions));
    let post_service = PostService::new(
        posts,
        users,
        countries,
        collections,
        authorizer,
        guard,
    );

    AppState {
        config: Arc::new(config),
        db_pool,
        permission_service,
        post_service,
    }
}

/// Runs the TripMate server until shutdown.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> AppResult<()> {
    let addr = config.server.bind_addr();
    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;

    info!("TripMate server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
}
