//! # tripmate-service
//!
//! Business logic for TripMate's permission-grant and collaborative-post
//! core:
//!
//! - [`permission::PermissionService`] — the grantor→grantee→country
//!   authorization state machine (invite / accept / decline / revoke).
//! - [`post::CollaborationAuthorizer`] — read-side predicates deciding who
//!   may post as whom in which country.
//! - [`post::PostService`] — creates one or two post rows per request,
//!   linking cross-profile pairs with a shared group token.
//! - [`post::PostLifecycleGuard`] — edit/delete authorization for existing
//!   posts, independent of the creation rules.
//!
//! Services depend on the store ports in `tripmate-database` and emit
//! domain events through the `EventSink` port after mutations succeed.

pub mod context;
pub mod events;
pub mod permission;
pub mod post;
