//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use tripmate_entity::PermissionStatus;
use tripmate_service::post::{CollaborationOption, SharingOption};

/// Body for inviting a user into a country collection.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePermissionRequest {
    /// Username of the user being invited.
    #[validate(length(min = 1, max = 64, message = "Grantee username is required"))]
    pub grantee_username: String,
    /// ISO 3166-1 alpha-2 country code.
    #[validate(length(equal = 2, message = "Country code must be two letters"))]
    pub country_code: String,
    /// Personal message shown with the invitation.
    #[validate(length(max = 500))]
    pub message: Option<String>,
}

/// Status filter for permission list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionStatusFilter {
    /// Only return permissions in this state.
    pub status: Option<PermissionStatus>,
}

/// Body for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePostRequest {
    /// ISO 3166-1 alpha-2 country code.
    #[validate(length(equal = 2, message = "Country code must be two letters"))]
    pub country_code: String,
    /// Code of the collection the post is filed in.
    #[validate(length(min = 1, max = 64))]
    pub collection_code: String,
    /// Resolved city name.
    #[validate(length(min = 1, max = 120))]
    pub city_name: String,
    /// Latitude in degrees.
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    /// Longitude in degrees.
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    /// Post caption.
    #[validate(length(max = 2000))]
    pub caption: String,
    /// Collaboration mode.
    #[serde(default)]
    pub collaboration: CollaborationOption,
    /// The named collaborator.
    pub collaborator_id: Option<Uuid>,
    /// Filing choice for collaborative posts.
    pub sharing: Option<SharingOption>,
}

impl CreatePostRequest {
    /// Converts into the service-layer request.
    pub fn into_service(self) -> tripmate_service::post::CreatePostRequest {
        tripmate_service::post::CreatePostRequest {
            country_code: self.country_code,
            collection_code: self.collection_code,
            city_name: self.city_name,
            latitude: self.latitude,
            longitude: self.longitude,
            caption: self.caption,
            collaboration: self.collaboration,
            collaborator_id: self.collaborator_id,
            sharing: self.sharing,
        }
    }
}

/// Body for editing a post. Only caption and collection are mutable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePostRequest {
    /// New caption.
    #[validate(length(max = 2000))]
    pub caption: Option<String>,
    /// New collection code.
    #[validate(length(min = 1, max = 64))]
    pub collection_code: Option<String>,
}
