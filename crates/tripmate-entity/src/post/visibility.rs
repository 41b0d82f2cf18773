//! Post visibility type.

use serde::{Deserialize, Serialize};

/// How a post relates to profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "post_visibility", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PostVisibility {
    /// A single post filed under one profile, no group linkage.
    Personal,
    /// Part of a cross-profile shared group.
    Shared,
}
