//! HTTP request handlers, organized by domain.

pub mod health;
pub mod permission;
pub mod post;
