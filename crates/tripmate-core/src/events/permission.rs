//! Travel-permission lifecycle events.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Events emitted by travel-permission transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PermissionEvent {
    /// A grantor invited a grantee to post in their country collection.
    InvitationCreated {
        /// The permission row ID.
        permission_id: Uuid,
        /// The inviting user.
        grantor_id: Uuid,
        /// The invited user.
        grantee_id: Uuid,
        /// The country the invitation covers.
        country_id: Uuid,
        /// Personal message attached to the invitation.
        message: Option<String>,
    },
    /// The grantee accepted the invitation.
    InvitationAccepted {
        /// The permission row ID.
        permission_id: Uuid,
        /// The inviting user.
        grantor_id: Uuid,
        /// The accepting user.
        grantee_id: Uuid,
        /// The country the permission covers.
        country_id: Uuid,
    },
    /// The grantee declined the invitation.
    InvitationDeclined {
        /// The permission row ID.
        permission_id: Uuid,
        /// The inviting user.
        grantor_id: Uuid,
        /// The declining user.
        grantee_id: Uuid,
        /// The country the invitation covered.
        country_id: Uuid,
    },
    /// The grantor revoked an active permission.
    PermissionRevoked {
        /// The permission row ID.
        permission_id: Uuid,
        /// The revoking user.
        grantor_id: Uuid,
        /// The user who lost access.
        grantee_id: Uuid,
        /// The country the permission covered.
        country_id: Uuid,
    },
}
