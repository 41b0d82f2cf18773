//! Route definitions for the TripMate HTTP API.
//!
//! All routes are mounted under `/api` and receive `AppState` via Axum's
//! `State` extractor.

use axum::http::HeaderValue;
use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(permission_routes())
        .merge(post_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Travel permission lifecycle endpoints.
fn permission_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/travel-permissions",
            post(handlers::permission::create_permission),
        )
        .route(
            "/travel-permissions/{id}/accept",
            post(handlers::permission::accept_permission),
        )
        .route(
            "/travel-permissions/{id}/decline",
            post(handlers::permission::decline_permission),
        )
        .route(
            "/travel-permissions/{id}",
            delete(handlers::permission::revoke_permission),
        )
        .route(
            "/travel-permissions/granted",
            get(handlers::permission::list_granted),
        )
        .route(
            "/travel-permissions/received",
            get(handlers::permission::list_received),
        )
}

/// Post creation and lifecycle endpoints.
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(handlers::post::create_post))
        .route("/posts/{id}", put(handlers::post::update_post))
        .route("/posts/{id}", delete(handlers::post::delete_post))
        .route(
            "/posts/shared-group/{group_id}",
            get(handlers::post::shared_group),
        )
        .route(
            "/posts/profile/{user_id}",
            get(handlers::post::list_by_profile),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build the CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors_origins;

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        CorsLayer::new()
            .allow_origin(parsed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
