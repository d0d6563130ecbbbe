use super::*;
use crate::net::error::AppError;
use crate::net::test_support::{event_json, job_json, stats_json};
use crate::net::transport::Method;
use crate::net::types::Role;
use crate::state::test_support::{Cell, TestScope, test_scope};
use futures::executor::block_on;

fn script_all(t: &TestScope) {
    t.transport.respond(Method::Get, "/api/company/stats", 200, stats_json());
    t.transport.respond(
        Method::Get,
        "/api/jobs?status=assigned",
        200,
        serde_json::json!([job_json("j-1", "assigned"), job_json("j-2", "assigned")]),
    );
    t.transport.respond(
        Method::Get,
        "/api/events",
        200,
        serde_json::json!([event_json("e-1")]),
    );
}

#[test]
fn load_populates_every_section() {
    let t = test_scope(Role::Driver);
    script_all(&t);
    let view = Cell::new(DashboardState::default());

    block_on(load_dashboard(&t.scope, &view));

    let state = view.get();
    assert_eq!(state.stats.map(|s| s.total_drivers), Some(14));
    assert_eq!(state.assigned_jobs.len(), 2);
    assert_eq!(state.events.len(), 1);
    assert!(!state.loading);
}

#[test]
fn failing_section_keeps_previous_value() {
    let t = test_scope(Role::Driver);
    script_all(&t);
    t.transport.respond(Method::Get, "/api/company/stats", 500, serde_json::json!({ "detail": "x" }));
    let previous = DashboardState {
        stats: Some(CompanyStats {
            total_drivers: 3,
            ..CompanyStats::default()
        }),
        ..DashboardState::default()
    };
    let view = Cell::new(previous);

    // first scripted stats response succeeds, the second (sticky) fails
    block_on(load_dashboard(&t.scope, &view));
    block_on(load_dashboard(&t.scope, &view));

    let state = view.get();
    assert_eq!(state.stats.map(|s| s.total_drivers), Some(14));
    assert_eq!(state.assigned_jobs.len(), 2);
    assert!(t.session.get().is_authenticated());
}

#[test]
fn one_failure_does_not_block_other_sections() {
    let t = test_scope(Role::Driver);
    t.transport.fail(Method::Get, "/api/company/stats", AppError::Timeout);
    t.transport.respond(Method::Get, "/api/jobs?status=assigned", 200, serde_json::json!([]));
    t.transport.respond(
        Method::Get,
        "/api/events",
        200,
        serde_json::json!([event_json("e-1"), event_json("e-2")]),
    );
    let view = Cell::new(DashboardState::default());

    block_on(load_dashboard(&t.scope, &view));

    let state = view.get();
    assert!(state.stats.is_none());
    assert_eq!(state.events.len(), 2);
    assert!(!state.loading);
}

#[test]
fn unauthorized_read_clears_session() {
    let t = test_scope(Role::Driver);
    script_all(&t);
    t.transport.fail(Method::Get, "/api/events", AppError::from_response(401, ""));
    t.transport.fail(Method::Get, "/api/events", AppError::from_response(401, ""));

    // the first queued events response is the success from script_all
    let view = Cell::new(DashboardState::default());
    block_on(load_dashboard(&t.scope, &view));
    assert!(t.session.get().is_authenticated());

    block_on(load_dashboard(&t.scope, &view));
    assert!(!t.session.get().is_authenticated());
}

#[test]
fn unmounted_view_receives_no_writes() {
    let t = test_scope(Role::Driver);
    script_all(&t);
    let lifetime = t.lifetime.clone();
    t.transport.on_send(move |_| lifetime.end());
    let view = Cell::new(DashboardState::default());

    block_on(load_dashboard(&t.scope, &view));

    // only the loading flag was written before the requests went out
    assert_eq!(view.writes(), 1);
    assert!(view.get().loading);
    assert!(view.get().stats.is_none());
}

#[test]
fn summaries_are_truncated_for_display() {
    let jobs: Vec<Job> = (0..8)
        .map(|i| serde_json::from_value(job_json(&format!("j-{i}"), "assigned")).unwrap())
        .collect();
    let events: Vec<Event> = (0..5)
        .map(|i| serde_json::from_value(event_json(&format!("e-{i}"))).unwrap())
        .collect();
    let state = DashboardState {
        assigned_jobs: jobs,
        events,
        ..DashboardState::default()
    };
    assert_eq!(state.recent_jobs().len(), RECENT_JOBS_LIMIT);
    assert_eq!(state.upcoming_events().len(), UPCOMING_EVENTS_LIMIT);
    assert_eq!(DashboardState::default().recent_jobs().len(), 0);
}
