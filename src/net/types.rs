//! Wire DTOs for the `/api` boundary.
//!
//! DESIGN
//! ======
//! These types mirror the API payloads. Server-derived values (XP, totals,
//! job status) are carried as-is and never recomputed on the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Access tier of an identity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Driver,
    Manager,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Driver, Role::Manager, Role::Admin];

    /// Wire value, also used as the `<option>` value in role pickers.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Driver => "driver",
            Role::Manager => "manager",
            Role::Admin => "admin",
        }
    }

    /// Parse a wire value; unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == value)
    }

    /// Whether this role may reach the management view.
    pub fn can_manage(self) -> bool {
        match self {
            Role::Driver => false,
            Role::Manager | Role::Admin => true,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Driver => "Driver",
            Role::Manager => "Manager",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user as returned by `/api/auth/me` and `/api/users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Avatar image URL from the identity provider, if any.
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub role: Role,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub experience_points: i64,
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub total_deliveries: i64,
    /// Kilometres driven across all delivered jobs.
    #[serde(default)]
    pub total_distance: f64,
    #[serde(default)]
    pub truckers_mp_id: Option<String>,
    #[serde(default)]
    pub steam_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub join_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub last_active: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Lifecycle state of a job. Transitions happen server-side only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Available,
    Assigned,
    InProgress,
    Delivered,
    Cancelled,
}

impl JobStatus {
    /// Query-string value for `GET /jobs?status=`.
    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Available => "available",
            JobStatus::Assigned => "assigned",
            JobStatus::InProgress => "in_progress",
            JobStatus::Delivered => "delivered",
            JobStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Available => "Available",
            JobStatus::Assigned => "Assigned",
            JobStatus::InProgress => "In progress",
            JobStatus::Delivered => "Delivered",
            JobStatus::Cancelled => "Cancelled",
        }
    }
}

/// A delivery job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cargo: String,
    pub origin_city: String,
    pub destination_city: String,
    /// Route length in kilometres.
    pub distance: f64,
    /// Experience points credited to the driver on delivery.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub reward: i64,
    /// Free-form difficulty label (`Easy`, `Medium`, `Hard`).
    pub difficulty: String,
    pub status: JobStatus,
    #[serde(default)]
    pub assigned_driver_id: Option<String>,
    #[serde(default)]
    pub assigned_driver_name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub assigned_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Convoy,
    Meeting,
    Training,
    Competition,
}

impl EventType {
    pub const ALL: [EventType; 4] = [
        EventType::Convoy,
        EventType::Meeting,
        EventType::Training,
        EventType::Competition,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Convoy => "convoy",
            EventType::Meeting => "meeting",
            EventType::Training => "training",
            EventType::Competition => "competition",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::Convoy => "Convoy",
            EventType::Meeting => "Meeting",
            EventType::Training => "Training",
            EventType::Competition => "Competition",
        }
    }
}

/// A company event drivers can join.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub date_time: DateTime<Utc>,
    pub location: String,
    /// Raw cap as stored; see [`Event::participant_cap`].
    #[serde(default, deserialize_with = "deserialize_optional_cap")]
    pub max_participants: Option<i64>,
    /// Identity ids of joined participants.
    #[serde(default)]
    pub participants: Vec<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Event {
    /// The effective participant cap. Zero or negative values mean no cap.
    pub fn participant_cap(&self) -> Option<usize> {
        self.max_participants
            .filter(|max| *max > 0)
            .map(|max| usize::try_from(max).unwrap_or(usize::MAX))
    }
}

/// Aggregate counters from `/api/company/stats`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyStats {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_drivers: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub total_deliveries: i64,
    pub total_distance: f64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub active_drivers: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub pending_jobs: i64,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub upcoming_events: i64,
}

/// Body of `POST /api/auth/process-session`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionExchange {
    pub session_id: String,
}

/// Response of `POST /api/auth/process-session`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SessionResponse {
    pub user: Identity,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/jobs`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub cargo: String,
    pub origin_city: String,
    pub destination_city: String,
    pub distance: f64,
    pub reward: i64,
    pub difficulty: String,
    pub deadline: Option<NaiveDateTime>,
}

/// Body of `POST /api/events`.
///
/// `max_participants` is always serialized; `None` goes out as `null` so the
/// event is stored without a cap rather than with a cap of zero.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub date_time: NaiveDateTime,
    pub location: String,
    pub max_participants: Option<u32>,
}

/// Body of `PUT /api/users/{id}`. Only present fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truckers_mp_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steam_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

impl UserUpdate {
    pub fn role(role: Role) -> Self {
        Self {
            role: Some(role),
            ..Self::default()
        }
    }
}

/// Parse an API timestamp. Values without an offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|naive| naive.and_utc())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`")))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp `{raw}`"))),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

/// The server stores any integer as a cap. Values beyond `i64` saturate so
/// one odd record never fails the whole list.
#[allow(clippy::cast_possible_truncation)]
fn deserialize_optional_cap<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(number)) => {
            if let Some(int) = number.as_i64() {
                return Ok(Some(int));
            }
            if number.as_u64().is_some() {
                return Ok(Some(i64::MAX));
            }
            match number.as_f64() {
                Some(float) if float.is_finite() => Ok(Some(float as i64)),
                _ => Err(D::Error::custom("expected integer-compatible number")),
            }
        }
        Some(_) => Err(D::Error::custom("expected number")),
    }
}
