//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered TripMate user.
///
/// Account management lives outside this subsystem; the fields here are
/// what permission and post flows need to resolve and display an actor.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login/handle.
    pub username: String,
    /// Contact email.
    pub email: Option<String>,
    /// Display name shown on the profile.
    pub display_name: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}
