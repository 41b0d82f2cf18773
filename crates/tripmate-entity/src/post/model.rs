//! Post entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::visibility::PostVisibility;

/// Where a post was taken: resolved city name plus coordinates.
///
/// Geocoding happens upstream; this subsystem stores what it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    /// City name.
    pub city_name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

/// One published travel post.
///
/// `author_id` is who created the content; `profile_owner_id` is whose
/// country collection the post appears under. They differ for
/// collaborative posts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    /// Unique post identifier.
    pub id: Uuid,
    /// Who created the content.
    pub author_id: Uuid,
    /// Whose profile the post is filed under.
    pub profile_owner_id: Uuid,
    /// Country the post documents.
    pub country_id: Uuid,
    /// Collection the post is filed in.
    pub collection_id: Uuid,
    /// City name.
    pub city_name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Post caption.
    pub caption: String,
    /// Personal or shared.
    pub visibility: PostVisibility,
    /// Opaque token linking the posts of one collaborative request.
    pub shared_group_id: Option<Uuid>,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
    /// When the post was last edited.
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Visibility/group consistency check.
    ///
    /// Personal posts carry no group token; a group token implies shared
    /// visibility. Note that a personal post may be filed under another
    /// user's profile (collaborator-only publishing), so author and owner
    /// are not required to match here.
    pub fn is_consistent(&self) -> bool {
        match self.visibility {
            PostVisibility::Personal => self.shared_group_id.is_none(),
            PostVisibility::Shared => self.shared_group_id.is_some(),
        }
    }

    /// Whether this post is half of a cross-profile shared group.
    pub fn is_shared(&self) -> bool {
        self.visibility == PostVisibility::Shared
    }
}

/// Data required to create one post row.
///
/// Constructed only through [`NewPost::personal`], [`NewPost::personal_under`],
/// and [`NewPost::shared`], which keep visibility and group linkage
/// consistent by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    /// Who creates the content.
    pub author_id: Uuid,
    /// Whose profile it is filed under.
    pub profile_owner_id: Uuid,
    /// Country the post documents.
    pub country_id: Uuid,
    /// Collection the post is filed in.
    pub collection_id: Uuid,
    /// Where the post was taken.
    pub location: Location,
    /// Post caption.
    pub caption: String,
    /// Personal or shared.
    pub visibility: PostVisibility,
    /// Group token for shared posts.
    pub shared_group_id: Option<Uuid>,
}

impl NewPost {
    /// A user's own personal post.
    pub fn personal(
        author_id: Uuid,
        country_id: Uuid,
        collection_id: Uuid,
        location: Location,
        caption: String,
    ) -> Self {
        Self::personal_under(author_id, author_id, country_id, collection_id, location, caption)
    }

    /// A personal post filed under another user's profile
    /// (collaborator-only publishing).
    pub fn personal_under(
        author_id: Uuid,
        profile_owner_id: Uuid,
        country_id: Uuid,
        collection_id: Uuid,
        location: Location,
        caption: String,
    ) -> Self {
        Self {
            author_id,
            profile_owner_id,
            country_id,
            collection_id,
            location,
            caption,
            visibility: PostVisibility::Personal,
            shared_group_id: None,
        }
    }

    /// One half of a cross-profile shared group.
    pub fn shared(
        author_id: Uuid,
        profile_owner_id: Uuid,
        country_id: Uuid,
        collection_id: Uuid,
        location: Location,
        caption: String,
        group_id: Uuid,
    ) -> Self {
        Self {
            author_id,
            profile_owner_id,
            country_id,
            collection_id,
            location,
            caption,
            visibility: PostVisibility::Shared,
            shared_group_id: Some(group_id),
        }
    }
}
