use super::*;
use chrono::{NaiveDate, TimeZone};

// =============================================================
// Role
// =============================================================

#[test]
fn role_wire_values_are_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Driver).unwrap(), "\"driver\"");
    assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_parse_rejects_unknown_values() {
    assert_eq!(Role::parse("admin"), Some(Role::Admin));
    assert_eq!(Role::parse("Admin"), None);
    assert_eq!(Role::parse("dispatcher"), None);
}

#[test]
fn only_managers_and_admins_can_manage() {
    assert!(!Role::Driver.can_manage());
    assert!(Role::Manager.can_manage());
    assert!(Role::Admin.can_manage());
}

#[test]
fn unknown_role_fails_identity_decode() {
    let raw = serde_json::json!({
        "id": "u-1", "name": "A", "email": "a@b.c", "role": "owner"
    });
    assert!(serde_json::from_value::<Identity>(raw).is_err());
}

// =============================================================
// Identity
// =============================================================

#[test]
fn identity_decodes_server_record() {
    let raw = serde_json::json!({
        "id": "u-1",
        "email": "ana@example.com",
        "name": "Ana",
        "picture": null,
        "role": "manager",
        "truckers_mp_id": "12345",
        "steam_id": null,
        "experience_points": 4200,
        "total_distance": 1520.5,
        "total_deliveries": 7,
        "join_date": "2024-03-01T10:00:00.123456+00:00",
        "last_active": "2024-03-08T09:30:00",
        "is_active": true
    });
    let identity: Identity = serde_json::from_value(raw).unwrap();
    assert_eq!(identity.role, Role::Manager);
    assert_eq!(identity.experience_points, 4200);
    assert_eq!(identity.total_deliveries, 7);
    assert_eq!(identity.truckers_mp_id.as_deref(), Some("12345"));
    assert_eq!(
        identity.last_active,
        Some(Utc.with_ymd_and_hms(2024, 3, 8, 9, 30, 0).unwrap())
    );
}

#[test]
fn identity_defaults_missing_counters() {
    let raw = serde_json::json!({ "id": "u-1", "name": "A", "email": "a@b.c" });
    let identity: Identity = serde_json::from_value(raw).unwrap();
    assert_eq!(identity.role, Role::Driver);
    assert_eq!(identity.experience_points, 0);
    assert!(identity.is_active);
    assert!(identity.join_date.is_none());
}

// =============================================================
// Jobs
// =============================================================

#[test]
fn job_status_uses_snake_case() {
    assert_eq!(
        serde_json::from_str::<JobStatus>("\"in_progress\"").unwrap(),
        JobStatus::InProgress
    );
    assert_eq!(JobStatus::InProgress.as_str(), "in_progress");
    assert_eq!(
        serde_json::to_string(&JobStatus::Cancelled).unwrap(),
        "\"cancelled\""
    );
}

#[test]
fn job_accepts_float_encoded_reward() {
    let raw = serde_json::json!({
        "id": "j-1", "title": "Milk run", "description": "", "cargo": "Milk",
        "origin_city": "Berlin", "destination_city": "Hamburg",
        "distance": 290.0, "reward": 1500.0, "difficulty": "Easy",
        "status": "available", "created_by": "u-9"
    });
    let job: Job = serde_json::from_value(raw).unwrap();
    assert_eq!(job.reward, 1500);
    assert_eq!(job.status, JobStatus::Available);
    assert!(job.assigned_driver_id.is_none());
    assert!(job.deadline.is_none());
}

#[test]
fn job_rejects_fractional_reward() {
    let raw = serde_json::json!({
        "id": "j-1", "title": "t", "description": "", "cargo": "c",
        "origin_city": "a", "destination_city": "b",
        "distance": 1.0, "reward": 12.5, "difficulty": "Easy", "status": "available"
    });
    assert!(serde_json::from_value::<Job>(raw).is_err());
}

// =============================================================
// Events
// =============================================================

#[test]
fn event_without_cap_decodes_to_none() {
    let raw = serde_json::json!({
        "id": "e-1", "title": "Convoy", "description": "Night run",
        "event_type": "convoy", "date_time": "2024-05-01T18:00:00",
        "location": "Rotterdam", "max_participants": null, "participants": ["u-1"]
    });
    let event: Event = serde_json::from_value(raw).unwrap();
    assert_eq!(event.max_participants, None);
    assert_eq!(event.participants, vec!["u-1".to_owned()]);
    assert_eq!(event.date_time, Utc.with_ymd_and_hms(2024, 5, 1, 18, 0, 0).unwrap());
}

#[test]
fn odd_caps_do_not_fail_the_event_list() {
    let event = |id: &str, cap: serde_json::Value| {
        serde_json::json!({
            "id": id, "title": "Convoy", "description": "",
            "event_type": "convoy", "date_time": "2024-05-01T18:00:00",
            "location": "Rotterdam", "max_participants": cap, "participants": []
        })
    };
    let raw = serde_json::json!([
        event("e-1", serde_json::json!(-1)),
        event("e-2", serde_json::json!(0)),
        event("e-3", serde_json::json!(5_000_000_000_i64)),
        event("e-4", serde_json::json!(u64::MAX)),
        event("e-5", serde_json::json!(8.0)),
    ]);

    let events: Vec<Event> = serde_json::from_value(raw).unwrap();

    let caps: Vec<_> = events.iter().map(|event| event.max_participants).collect();
    assert_eq!(caps, vec![Some(-1), Some(0), Some(5_000_000_000), Some(i64::MAX), Some(8)]);
    assert_eq!(events[0].participant_cap(), None);
    assert_eq!(events[1].participant_cap(), None);
    assert_eq!(events[4].participant_cap(), Some(8));
}

#[test]
fn new_event_serializes_missing_cap_as_null() {
    let body = NewEvent {
        title: "Convoy".to_owned(),
        description: "Night run".to_owned(),
        event_type: EventType::Convoy,
        date_time: NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap(),
        location: "Rotterdam".to_owned(),
        max_participants: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["max_participants"], serde_json::Value::Null);
    assert_eq!(value["event_type"], "convoy");
    assert_eq!(value["date_time"], "2024-05-01T18:00:00");
}

// =============================================================
// Requests and timestamps
// =============================================================

#[test]
fn role_update_sends_only_role() {
    let value = serde_json::to_value(UserUpdate::role(Role::Admin)).unwrap();
    assert_eq!(value, serde_json::json!({ "role": "admin" }));
}

#[test]
fn parse_timestamp_accepts_offsets_and_naive_values() {
    let expected = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 0).unwrap();
    assert_eq!(parse_timestamp("2024-01-02T05:04:00+02:00"), Some(expected));
    assert_eq!(parse_timestamp("2024-01-02T03:04:00"), Some(expected));
    assert_eq!(parse_timestamp("2024-01-02T03:04"), Some(expected));
    assert_eq!(parse_timestamp("yesterday"), None);
}
