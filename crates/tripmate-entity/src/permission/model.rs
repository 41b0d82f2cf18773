//! Travel permission entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::PermissionStatus;

/// One (grantor, grantee, country) authorization record.
///
/// At most one row exists per triple; re-inviting after a terminal status
/// reopens the same row rather than creating a second one. Rows are never
/// physically deleted by this subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Permission {
    /// Unique permission identifier.
    pub id: Uuid,
    /// The user who grants access to their country collection.
    pub grantor_id: Uuid,
    /// The user who receives posting access.
    pub grantee_id: Uuid,
    /// The country the permission covers.
    pub country_id: Uuid,
    /// Current lifecycle state.
    pub status: PermissionStatus,
    /// Personal message attached to the (latest) invitation.
    pub invitation_message: Option<String>,
    /// When the (latest) invitation was created.
    pub created_at: DateTime<Utc>,
    /// When the grantee or grantor last responded (accept/decline/revoke).
    pub responded_at: Option<DateTime<Utc>>,
}

impl Permission {
    /// Reset a terminal row back to a fresh pending invitation.
    ///
    /// The caller must have validated the transition through
    /// [`PermissionStatus::next`]; this only performs the row mutation:
    /// message and creation timestamp are replaced, the response cleared.
    pub fn reopen(&mut self, message: Option<String>, now: DateTime<Utc>) {
        self.status = PermissionStatus::Pending;
        self.invitation_message = message;
        self.created_at = now;
        self.responded_at = None;
    }

    /// Record a response (accept/decline/revoke outcome).
    pub fn respond(&mut self, status: PermissionStatus, now: DateTime<Utc>) {
        self.status = status;
        self.responded_at = Some(now);
    }
}

/// Data required to create a brand-new permission row (first invitation).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPermission {
    /// The inviting user.
    pub grantor_id: Uuid,
    /// The invited user.
    pub grantee_id: Uuid,
    /// The country the invitation covers.
    pub country_id: Uuid,
    /// Personal message attached to the invitation.
    pub invitation_message: Option<String>,
}
