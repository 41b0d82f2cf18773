//! Country entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A country a user can document visits to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Country {
    /// Unique country identifier.
    pub id: Uuid,
    /// ISO 3166-1 alpha-2 code ("BR", "FR", ...).
    pub code: String,
    /// English short name.
    pub name: String,
}
