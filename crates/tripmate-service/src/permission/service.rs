//! Travel permission state machine service.
//!
//! Owns the lifecycle of a (grantor, grantee, country) authorization row:
//! invitation, acceptance, decline, revocation, and terminal-row reopening.
//! Every status change goes through the transition table on
//! [`PermissionStatus`]; illegal transitions surface as Conflict.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use tripmate_core::error::AppError;
use tripmate_core::events::{DomainEvent, EventPayload, PermissionEvent};
use tripmate_core::result::AppResult;
use tripmate_core::traits::EventSink;
use tripmate_core::types::pagination::{PageRequest, PageResponse};
use tripmate_database::stores::{CountryLookup, PermissionStore, PostStore, UserLookup};
use tripmate_entity::{NewPermission, Permission, PermissionAction, PermissionStatus};

use crate::context::RequestContext;

/// Request to invite a grantee into a country collection.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InvitePermissionRequest {
    /// Username of the user being invited.
    pub grantee_username: String,
    /// ISO code of the country the invitation covers.
    pub country_code: String,
    /// Personal message shown with the invitation.
    pub message: Option<String>,
}

/// Manages travel permission invitations and responses.
#[derive(Clone)]
pub struct PermissionService {
    permissions: Arc<dyn PermissionStore>,
    posts: Arc<dyn PostStore>,
    users: Arc<dyn UserLookup>,
    countries: Arc<dyn CountryLookup>,
    events: Arc<dyn EventSink>,
}

impl PermissionService {
    /// Creates a new permission service.
    pub fn new(
        permissions: Arc<dyn PermissionStore>,
        posts: Arc<dyn PostStore>,
        users: Arc<dyn UserLookup>,
        countries: Arc<dyn CountryLookup>,
        events: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            permissions,
            posts,
            users,
            countries,
            events,
        }
    }

    /// Invite another user to post into the grantor's country collection.
    ///
    /// The grantor must have visit evidence (at least one post filed under
    /// their own profile in the country). A terminal row for the same
    /// triple is reopened in place; a pending or active one is a conflict.
    pub async fn invite(
        &self,
        ctx: &RequestContext,
        req: InvitePermissionRequest,
    ) -> AppResult<Permission> {
        let country = self
            .countries
            .find_by_code(&req.country_code)
            .await?
            .ok_or_else(|| AppError::not_found("country.not.found"))?;

        let grantee = self
            .users
            .find_by_username(&req.grantee_username)
            .await?
            .ok_or_else(|| AppError::not_found("user.not.found"))?;

        if grantee.id == ctx.user_id {
            return Err(AppError::conflict("permission.self.grant"));
        }

        let visited = self
            .posts
            .exists_for_profile(ctx.user_id, country.id)
            .await?;
        if !visited {
            return Err(AppError::conflict("permission.country.not.visited"));
        }

        let permission = match self
            .permissions
            .find_by_triple(ctx.user_id, grantee.id, country.id)
            .await?
        {
            Some(mut existing) => {
                if existing.status.next(PermissionAction::Invite).is_none() {
                    return Err(AppError::conflict("permission.already.exists"));
                }
                existing.reopen(req.message.clone(), Utc::now());
                self.permissions.update(&existing).await?
            }
            None => {
                self.permissions
                    .insert(&NewPermission {
                        grantor_id: ctx.user_id,
                        grantee_id: grantee.id,
                        country_id: country.id,
                        invitation_message: req.message.clone(),
                    })
                    .await?
            }
        };

        info!(
            grantor_id = %ctx.user_id,
            grantee_id = %grantee.id,
            country = %country.code,
            permission_id = %permission.id,
            "Travel permission invitation created"
        );

        self.emit(
            ctx.user_id,
            PermissionEvent::InvitationCreated {
                permission_id: permission.id,
                grantor_id: permission.grantor_id,
                grantee_id: permission.grantee_id,
                country_id: permission.country_id,
                message: permission.invitation_message.clone(),
            },
        )
        .await;

        Ok(permission)
    }

    /// Accept a pending invitation. Only the grantee may accept.
    pub async fn accept(&self, ctx: &RequestContext, permission_id: Uuid) -> AppResult<Permission> {
        let permission = self
            .respond(ctx, permission_id, PermissionAction::Accept)
            .await?;

        self.emit(
            ctx.user_id,
            PermissionEvent::InvitationAccepted {
                permission_id: permission.id,
                grantor_id: permission.grantor_id,
                grantee_id: permission.grantee_id,
                country_id: permission.country_id,
            },
        )
        .await;

        Ok(permission)
    }

    /// Decline a pending invitation. Only the grantee may decline.
    pub async fn decline(
        &self,
        ctx: &RequestContext,
        permission_id: Uuid,
    ) -> AppResult<Permission> {
        let permission = self
            .respond(ctx, permission_id, PermissionAction::Decline)
            .await?;

        self.emit(
            ctx.user_id,
            PermissionEvent::InvitationDeclined {
                permission_id: permission.id,
                grantor_id: permission.grantor_id,
                grantee_id: permission.grantee_id,
                country_id: permission.country_id,
            },
        )
        .await;

        Ok(permission)
    }

    /// Revoke an active permission. Only the grantor may revoke.
    pub async fn revoke(&self, ctx: &RequestContext, permission_id: Uuid) -> AppResult<Permission> {
        let permission = self
            .respond(ctx, permission_id, PermissionAction::Revoke)
            .await?;

        self.emit(
            ctx.user_id,
            PermissionEvent::PermissionRevoked {
                permission_id: permission.id,
                grantor_id: permission.grantor_id,
                grantee_id: permission.grantee_id,
                country_id: permission.country_id,
            },
        )
        .await;

        Ok(permission)
    }

    /// Permissions the acting user has granted, newest first.
    pub async fn list_granted(
        &self,
        ctx: &RequestContext,
        status: Option<PermissionStatus>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Permission>> {
        self.permissions
            .list_by_grantor(ctx.user_id, status, &page)
            .await
    }

    /// Permissions the acting user has received, newest first.
    pub async fn list_received(
        &self,
        ctx: &RequestContext,
        status: Option<PermissionStatus>,
        page: PageRequest,
    ) -> AppResult<PageResponse<Permission>> {
        self.permissions
            .list_by_grantee(ctx.user_id, status, &page)
            .await
    }

    /// Shared accept/decline/revoke path: resolve the row, check the
    /// actor, validate the transition, stamp the response.
    async fn respond(
        &self,
        ctx: &RequestContext,
        permission_id: Uuid,
        action: PermissionAction,
    ) -> AppResult<Permission> {
        let mut permission = self
            .permissions
            .find_by_id(permission_id)
            .await?
            .ok_or_else(|| AppError::not_found("permission.not.found"))?;

        let required_actor = match action {
            PermissionAction::Accept | PermissionAction::Decline => permission.grantee_id,
            PermissionAction::Revoke => permission.grantor_id,
            PermissionAction::Invite => unreachable!("invite is not a response"),
        };
        if ctx.user_id != required_actor {
            let key = match action {
                PermissionAction::Revoke => "permission.not.grantor",
                _ => "permission.not.grantee",
            };
            return Err(AppError::unauthorized(key));
        }

        let next = permission.status.next(action).ok_or_else(|| {
            let key = match action {
                PermissionAction::Revoke => "permission.not.active",
                _ => "permission.not.pending",
            };
            AppError::conflict(key)
        })?;

        permission.respond(next, Utc::now());
        let permission = self.permissions.update(&permission).await?;

        info!(
            actor_id = %ctx.user_id,
            permission_id = %permission.id,
            status = %permission.status,
            "Travel permission transitioned"
        );

        Ok(permission)
    }

    /// Best-effort event delivery. A sink failure is logged and never
    /// fails the business operation.
    async fn emit(&self, actor_id: Uuid, event: PermissionEvent) {
        let event = DomainEvent::new(Some(actor_id), EventPayload::Permission(event));
        if let Err(e) = self.events.emit(event).await {
            warn!(error = %e, "Failed to deliver permission event");
        }
    }
}
