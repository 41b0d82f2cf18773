//! Travel permission lifecycle tests: invitation, response, revocation,
//! terminal-row reopening, and the failure paths around each.

mod common;

use common::TestEnv;
use tripmate_core::error::ErrorKind;
use tripmate_core::events::{EventPayload, PermissionEvent};
use tripmate_core::types::pagination::PageRequest;
use tripmate_database::stores::PermissionStore;
use tripmate_entity::PermissionStatus;
use tripmate_service::permission::InvitePermissionRequest;

fn invite_req(username: &str, country: &str, message: &str) -> InvitePermissionRequest {
    InvitePermissionRequest {
        grantee_username: username.to_string(),
        country_code: country.to_string(),
        message: Some(message.to_string()),
    }
}

#[tokio::test]
async fn invite_creates_pending_permission() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    let grantee = env.user("hugo");
    env.seed_visit(&grantor, "BR");

    let permission = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "join me"))
        .await
        .unwrap();

    assert_eq!(permission.status, PermissionStatus::Pending);
    assert_eq!(permission.grantor_id, grantor.id);
    assert_eq!(permission.grantee_id, grantee.id);
    assert_eq!(permission.invitation_message.as_deref(), Some("join me"));
    assert!(permission.responded_at.is_none());

    let events = env.events.recorded();
    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0].payload,
        EventPayload::Permission(PermissionEvent::InvitationCreated { .. })
    ));
}

#[tokio::test]
async fn invite_requires_known_country_and_grantee() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    env.seed_visit(&grantor, "BR");

    let err = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "XX", "hi"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "country.not.found");

    let err = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("nobody", "BR", "hi"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotFound);
    assert_eq!(err.message, "user.not.found");
}

#[tokio::test]
async fn invite_rejects_self_grant() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    env.seed_visit(&grantor, "BR");

    let err = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("gabi", "BR", "me myself"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "permission.self.grant");
}

#[tokio::test]
async fn invite_requires_visit_evidence() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    env.user("hugo");
    // gabi has a visit in BR only.
    env.seed_visit(&grantor, "BR");

    let err = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "FR", "paris?"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "permission.country.not.visited");
}

#[tokio::test]
async fn duplicate_invite_while_pending_conflicts() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    env.user("hugo");
    env.seed_visit(&grantor, "BR");

    env.permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "first"))
        .await
        .unwrap();

    let err = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "second"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert!(err.message.contains("already.exists"));
}

#[tokio::test]
async fn accept_activates_and_stamps_response() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    let grantee = env.user("hugo");
    env.seed_visit(&grantor, "BR");

    let permission = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "join me"))
        .await
        .unwrap();

    let accepted = env
        .permission_service
        .accept(&env.ctx(&grantee), permission.id)
        .await
        .unwrap();

    assert_eq!(accepted.status, PermissionStatus::Active);
    assert!(accepted.responded_at.is_some());

    // An active permission substitutes for a personal visit.
    assert!(env
        .permissions
        .has_active(grantee.id, accepted.country_id)
        .await
        .unwrap());
}

#[tokio::test]
async fn only_the_grantee_may_respond() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    env.user("hugo");
    let outsider = env.user("igor");
    env.seed_visit(&grantor, "BR");

    let permission = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "join"))
        .await
        .unwrap();

    for ctx in [env.ctx(&grantor), env.ctx(&outsider)] {
        let err = env
            .permission_service
            .accept(&ctx, permission.id)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
        assert_eq!(err.message, "permission.not.grantee");
    }
}

#[tokio::test]
async fn responding_twice_conflicts() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    let grantee = env.user("hugo");
    env.seed_visit(&grantor, "BR");

    let permission = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "join"))
        .await
        .unwrap();

    env.permission_service
        .accept(&env.ctx(&grantee), permission.id)
        .await
        .unwrap();

    let err = env
        .permission_service
        .accept(&env.ctx(&grantee), permission.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "permission.not.pending");

    let err = env
        .permission_service
        .decline(&env.ctx(&grantee), permission.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "permission.not.pending");
}

#[tokio::test]
async fn revoke_requires_grantor_and_active_status() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    let grantee = env.user("hugo");
    env.seed_visit(&grantor, "BR");

    let permission = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "join"))
        .await
        .unwrap();

    // Pending cannot be revoked.
    let err = env
        .permission_service
        .revoke(&env.ctx(&grantor), permission.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Conflict);
    assert_eq!(err.message, "permission.not.active");

    env.permission_service
        .accept(&env.ctx(&grantee), permission.id)
        .await
        .unwrap();

    // Grantee cannot revoke.
    let err = env
        .permission_service
        .revoke(&env.ctx(&grantee), permission.id)
        .await
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Unauthorized);
    assert_eq!(err.message, "permission.not.grantor");

    let revoked = env
        .permission_service
        .revoke(&env.ctx(&grantor), permission.id)
        .await
        .unwrap();
    assert_eq!(revoked.status, PermissionStatus::Revoked);
    assert!(!env
        .permissions
        .has_active(grantee.id, revoked.country_id)
        .await
        .unwrap());
}

#[tokio::test]
async fn reinvite_reopens_same_row_after_decline_or_revoke() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    let grantee = env.user("hugo");
    env.seed_visit(&grantor, "BR");

    let first = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "round one"))
        .await
        .unwrap();

    env.permission_service
        .decline(&env.ctx(&grantee), first.id)
        .await
        .unwrap();

    let reopened = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "round two"))
        .await
        .unwrap();

    // Same physical row, fresh invitation.
    assert_eq!(reopened.id, first.id);
    assert_eq!(reopened.status, PermissionStatus::Pending);
    assert_eq!(reopened.invitation_message.as_deref(), Some("round two"));
    assert!(reopened.responded_at.is_none());

    // Accept, revoke, and reopen once more.
    env.permission_service
        .accept(&env.ctx(&grantee), reopened.id)
        .await
        .unwrap();
    env.permission_service
        .revoke(&env.ctx(&grantor), reopened.id)
        .await
        .unwrap();

    let reopened_again = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "round three"))
        .await
        .unwrap();
    assert_eq!(reopened_again.id, first.id);
    assert_eq!(reopened_again.status, PermissionStatus::Pending);

    // Still exactly one row for the triple.
    let granted = env
        .permission_service
        .list_granted(&env.ctx(&grantor), None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(granted.total_items, 1);
}

#[tokio::test]
async fn lists_filter_by_status_and_side() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    let grantee = env.user("hugo");
    env.seed_visit(&grantor, "BR");
    env.seed_visit(&grantor, "FR");

    let br = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "br"))
        .await
        .unwrap();
    env.permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "FR", "fr"))
        .await
        .unwrap();
    env.permission_service
        .accept(&env.ctx(&grantee), br.id)
        .await
        .unwrap();

    let granted = env
        .permission_service
        .list_granted(&env.ctx(&grantor), None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(granted.total_items, 2);

    let active_only = env
        .permission_service
        .list_granted(
            &env.ctx(&grantor),
            Some(PermissionStatus::Active),
            PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(active_only.total_items, 1);
    assert_eq!(active_only.items[0].id, br.id);

    let received = env
        .permission_service
        .list_received(&env.ctx(&grantee), None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(received.total_items, 2);

    let nothing_received = env
        .permission_service
        .list_received(&env.ctx(&grantor), None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(nothing_received.total_items, 0);
}

#[tokio::test]
async fn every_transition_emits_one_event() {
    let env = TestEnv::new();
    let grantor = env.user("gabi");
    let grantee = env.user("hugo");
    env.seed_visit(&grantor, "BR");

    let permission = env
        .permission_service
        .invite(&env.ctx(&grantor), invite_req("hugo", "BR", "join"))
        .await
        .unwrap();
    env.permission_service
        .accept(&env.ctx(&grantee), permission.id)
        .await
        .unwrap();
    env.permission_service
        .revoke(&env.ctx(&grantor), permission.id)
        .await
        .unwrap();

    let kinds: Vec<_> = env
        .events
        .recorded()
        .into_iter()
        .map(|e| match e.payload {
            EventPayload::Permission(PermissionEvent::InvitationCreated { .. }) => "created",
            EventPayload::Permission(PermissionEvent::InvitationAccepted { .. }) => "accepted",
            EventPayload::Permission(PermissionEvent::InvitationDeclined { .. }) => "declined",
            EventPayload::Permission(PermissionEvent::PermissionRevoked { .. }) => "revoked",
        })
        .collect();
    assert_eq!(kinds, vec!["created", "accepted", "revoked"]);
}
