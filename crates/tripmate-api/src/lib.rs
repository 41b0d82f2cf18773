//! # tripmate-api
//!
//! HTTP API layer for TripMate built on Axum.
//!
//! Provides the REST endpoints for travel permissions and posts, the
//! bearer-token extractor, DTOs with request validation, and the mapping
//! from domain errors to HTTP responses.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
