//! Posting collection entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A posting collection a post is filed under ("food", "cities", ...).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Collection {
    /// Unique collection identifier.
    pub id: Uuid,
    /// Unique collection code used in requests.
    pub code: String,
    /// Display name.
    pub name: String,
}
