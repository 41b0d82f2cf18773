//! Token verification configuration.
//!
//! TripMate does not issue tokens itself; the identity provider is an
//! external collaborator. The API boundary only verifies bearer tokens.

use serde::{Deserialize, Serialize};

/// Settings for verifying bearer tokens at the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret shared with the identity provider.
    pub jwt_secret: String,
    /// Accepted clock skew in seconds when validating expiry.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

fn default_leeway() -> u64 {
    30
}
