use std::cell::RefCell;

use super::*;
use crate::net::test_support::{identity_json, mock_client};
use crate::net::transport::Method;
use crate::net::types::Role;
use crate::state::test_support::Cell;
use futures::executor::block_on;

/// Address bar stand-in: clearing drops the fragment from the visible URL.
struct FakeLocation {
    url: RefCell<String>,
}

impl FakeLocation {
    fn new(url: &str) -> Self {
        Self {
            url: RefCell::new(url.to_owned()),
        }
    }

    fn visible_url(&self) -> String {
        self.url.borrow().clone()
    }
}

impl HandoffLocation for FakeLocation {
    fn fragment(&self) -> String {
        let url = self.url.borrow();
        url.find('#').map(|at| url[at..].to_owned()).unwrap_or_default()
    }

    fn clear_fragment(&self) {
        let mut url = self.url.borrow_mut();
        if let Some(at) = url.find('#') {
            url.truncate(at);
        }
    }
}

// =============================================================
// Token extraction
// =============================================================

#[test]
fn extract_session_token_reads_fragment_key() {
    assert_eq!(extract_session_token("#session_id=abc"), Some("abc".to_owned()));
    assert_eq!(
        extract_session_token("state=x&session_id=a%2Bb"),
        Some("a+b".to_owned())
    );
}

#[test]
fn extract_session_token_ignores_missing_or_empty_values() {
    assert_eq!(extract_session_token(""), None);
    assert_eq!(extract_session_token("#"), None);
    assert_eq!(extract_session_token("#session_id="), None);
    assert_eq!(extract_session_token("#token=abc"), None);
}

#[test]
fn session_check_skipped_only_with_pending_token() {
    let callback = AppRoute::AuthCallback.path();
    assert!(should_check_session(callback, ""));
    assert!(should_check_session(callback, "#section-2"));
    assert!(!should_check_session(callback, "#session_id=abc"));
    assert!(!should_check_session("/auth/callback/", "#session_id=abc"));
}

#[test]
fn token_outside_handoff_route_still_checks_session() {
    assert!(should_check_session("/", "#session_id=abc"));
    assert!(should_check_session(AppRoute::Dashboard.path(), "#session_id=abc"));
}

#[test]
fn destinations_follow_outcome() {
    assert_eq!(HandoffState::Pending.destination(), None);
    assert_eq!(HandoffState::Succeeded.destination(), Some(AppRoute::Dashboard));
    assert_eq!(HandoffState::Failed.destination(), Some(AppRoute::Login));
}

// =============================================================
// Flow
// =============================================================

#[test]
fn accepted_token_clears_fragment_and_lands_on_dashboard() {
    let (api, transport) = mock_client();
    transport.respond(
        Method::Post,
        "/api/auth/process-session",
        200,
        serde_json::json!({ "user": identity_json("u-1", Role::Driver) }),
    );
    let session = Cell::new(AuthState::default());
    let location = FakeLocation::new("https://aura.test/auth/callback#session_id=abc");

    let outcome = block_on(run_handoff(&api, &session, &location));

    assert_eq!(outcome, HandoffState::Succeeded);
    assert_eq!(outcome.destination(), Some(AppRoute::Dashboard));
    assert_eq!(location.visible_url(), "https://aura.test/auth/callback");
    assert!(session.get().is_authenticated());
    assert_eq!(
        transport.calls()[0].body.as_deref(),
        Some(r#"{"session_id":"abc"}"#)
    );
}

#[test]
fn missing_token_fails_without_request() {
    let (api, transport) = mock_client();
    let session = Cell::new(AuthState::pending());
    let location = FakeLocation::new("https://aura.test/auth/callback");

    let outcome = block_on(run_handoff(&api, &session, &location));

    assert_eq!(outcome.destination(), Some(AppRoute::Login));
    assert!(transport.calls().is_empty());
    assert!(!session.get().loading);
}

#[test]
fn second_arrival_without_token_fails_safely() {
    let (api, transport) = mock_client();
    transport.respond(
        Method::Post,
        "/api/auth/process-session",
        200,
        serde_json::json!({ "user": identity_json("u-1", Role::Driver) }),
    );
    let session = Cell::new(AuthState::default());
    let location = FakeLocation::new("https://aura.test/auth/callback#session_id=abc");

    assert_eq!(block_on(run_handoff(&api, &session, &location)), HandoffState::Succeeded);
    assert_eq!(block_on(run_handoff(&api, &session, &location)), HandoffState::Failed);
    assert_eq!(transport.count(Method::Post, "/api/auth/process-session"), 1);
}

#[test]
fn rejected_token_goes_to_login_and_keeps_fragment() {
    let (api, transport) = mock_client();
    transport.respond(
        Method::Post,
        "/api/auth/process-session",
        400,
        serde_json::json!({ "detail": "Invalid session ID" }),
    );
    let session = Cell::new(AuthState::default());
    let location = FakeLocation::new("https://aura.test/auth/callback#session_id=bad");

    let outcome = block_on(run_handoff(&api, &session, &location));

    assert_eq!(outcome, HandoffState::Failed);
    assert_eq!(outcome.destination(), Some(AppRoute::Login));
    assert!(!session.get().is_authenticated());
}
