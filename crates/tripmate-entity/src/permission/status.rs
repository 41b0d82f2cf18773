//! Travel permission status and the closed transition table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use tripmate_core::error::AppError;

/// Lifecycle state of a travel permission.
///
/// A (grantor, grantee, country) triple has no row at all until first
/// invited; there is no explicit "none" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "permission_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PermissionStatus {
    /// Invitation sent, awaiting the grantee's response.
    Pending,
    /// Grantee accepted; collaboration access is live.
    Active,
    /// Grantee declined. Terminal until re-invited.
    Declined,
    /// Grantor withdrew an active permission. Terminal until re-invited.
    Revoked,
}

/// An action applied to a permission row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionAction {
    /// A fresh invitation on the same triple (reopens a terminal row).
    Invite,
    /// Grantee accepts a pending invitation.
    Accept,
    /// Grantee declines a pending invitation.
    Decline,
    /// Grantor revokes an active permission.
    Revoke,
}

impl PermissionStatus {
    /// The validated transition table.
    ///
    /// Returns the successor state, or `None` when the action is illegal
    /// from this state. Every legal transition of the lifecycle is listed
    /// here; no other code path mutates a permission's status.
    pub const fn next(self, action: PermissionAction) -> Option<Self> {
        match (self, action) {
            (Self::Pending, PermissionAction::Accept) => Some(Self::Active),
            (Self::Pending, PermissionAction::Decline) => Some(Self::Declined),
            (Self::Active, PermissionAction::Revoke) => Some(Self::Revoked),
            (Self::Declined | Self::Revoked, PermissionAction::Invite) => Some(Self::Pending),
            _ => None,
        }
    }

    /// Whether this state only leaves via a fresh invitation.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Declined | Self::Revoked)
    }
}

impl fmt::Display for PermissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Active => write!(f, "active"),
            Self::Declined => write!(f, "declined"),
            Self::Revoked => write!(f, "revoked"),
        }
    }
}

impl FromStr for PermissionStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "declined" => Ok(Self::Declined),
            "revoked" => Ok(Self::Revoked),
            other => Err(AppError::validation(format!(
                "unknown permission status: {other}"
            ))),
        }
    }
}
