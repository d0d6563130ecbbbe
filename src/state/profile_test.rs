use super::*;
use crate::net::test_support::{identity, identity_json};
use crate::net::transport::Method;
use crate::net::types::Role;
use crate::state::forms::ProfileDraft;
use crate::state::test_support::test_scope;
use futures::executor::block_on;

#[test]
fn refresh_replaces_cached_identity() {
    let t = test_scope(Role::Driver);
    let mut fresh = identity_json("me", Role::Driver);
    fresh["experience_points"] = serde_json::json!(5400);
    t.transport.respond(Method::Get, "/api/users/me", 200, fresh);

    let refreshed = block_on(refresh_identity(&t.scope, &ProfileSaves::default(), "me"));

    let user = t.session.get().user.unwrap();
    assert_eq!(user.experience_points, 5400);
    assert_eq!(refreshed, Some(user));
}

#[test]
fn refresh_after_unmount_keeps_cached_identity() {
    let t = test_scope(Role::Driver);
    let mut fresh = identity_json("me", Role::Driver);
    fresh["name"] = serde_json::json!("Renamed");
    t.transport.respond(Method::Get, "/api/users/me", 200, fresh);
    t.lifetime.end();

    block_on(refresh_identity(&t.scope, &ProfileSaves::default(), "me"));

    assert_eq!(t.session.get().user.unwrap().name, "Driver me");
    assert_eq!(t.session.writes(), 0);
}

#[test]
fn refresh_with_expired_session_signs_out() {
    let t = test_scope(Role::Driver);
    t.transport.respond(
        Method::Get,
        "/api/users/me",
        401,
        serde_json::json!({ "detail": "Session expired" }),
    );

    block_on(refresh_identity(&t.scope, &ProfileSaves::default(), "me"));

    assert!(!t.session.get().is_authenticated());
}

#[test]
fn save_puts_fields_and_updates_session() {
    let t = test_scope(Role::Driver);
    let mut saved = identity_json("me", Role::Driver);
    saved["name"] = serde_json::json!("Night Owl");
    saved["steam_id"] = serde_json::json!("7656");
    t.transport.respond(Method::Put, "/api/users/me", 200, saved);
    let draft = ProfileDraft {
        name: "Night Owl".to_owned(),
        truckers_mp_id: String::new(),
        steam_id: "7656".to_owned(),
    };

    assert!(block_on(save_profile(&t.scope, &ProfileSaves::default(), "me", &draft.validate().unwrap())));

    let sent: serde_json::Value =
        serde_json::from_str(t.transport.calls()[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["name"], "Night Owl");
    assert!(sent.get("role").is_none());
    let user = t.session.get().user.unwrap();
    assert_eq!(user.name, "Night Owl");
    assert_eq!(user.steam_id.as_deref(), Some("7656"));
}

#[test]
fn rejected_save_keeps_identity() {
    let t = test_scope(Role::Driver);
    t.transport.respond(
        Method::Put,
        "/api/users/me",
        400,
        serde_json::json!({ "detail": "Invalid Steam ID" }),
    );
    let update = UserUpdate {
        steam_id: Some("x".to_owned()),
        ..UserUpdate::default()
    };

    assert!(!block_on(save_profile(&t.scope, &ProfileSaves::default(), "me", &update)));
    assert_eq!(t.session.writes(), 0);
    assert!(t.session.get().is_authenticated());
}

#[test]
fn save_started_during_refresh_wins() {
    let t = test_scope(Role::Driver);
    let mut stale = identity_json("me", Role::Driver);
    stale["name"] = serde_json::json!("Old Name");
    t.transport.respond(Method::Get, "/api/users/me", 200, stale);
    let saves = ProfileSaves::default();
    let saving = saves.clone();
    let session = t.session.clone();
    t.transport.on_send(move |_| {
        saving.begin();
        let mut saved = identity("me", Role::Driver);
        saved.name = "New Name".to_owned();
        replace_identity(&session, saved);
    });

    let refreshed = block_on(refresh_identity(&t.scope, &saves, "me"));

    assert_eq!(refreshed, None);
    assert_eq!(t.session.get().user.unwrap().name, "New Name");
}

#[test]
fn earlier_save_does_not_block_refresh() {
    let t = test_scope(Role::Driver);
    t.transport.respond(Method::Put, "/api/users/me", 200, identity_json("me", Role::Driver));
    let mut fresh = identity_json("me", Role::Driver);
    fresh["total_deliveries"] = serde_json::json!(41);
    t.transport.respond(Method::Get, "/api/users/me", 200, fresh);
    let saves = ProfileSaves::default();
    let update = UserUpdate {
        name: Some("Driver me".to_owned()),
        ..UserUpdate::default()
    };

    assert!(block_on(save_profile(&t.scope, &saves, "me", &update)));
    let refreshed = block_on(refresh_identity(&t.scope, &saves, "me"));

    assert_eq!(refreshed.map(|user| user.total_deliveries), Some(41));
    assert_eq!(saves.generation(), 1);
}
