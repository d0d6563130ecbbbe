//! Form drafts: raw input text validated into request bodies.
//!
//! A draft that fails validation yields a message for the form and no request
//! is sent.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use chrono::NaiveDateTime;

use crate::net::types::{EventType, Identity, NewEvent, NewJob, UserUpdate};

pub const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

/// Format produced by `<input type="datetime-local">`.
const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Clone, Debug, PartialEq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
    pub cargo: String,
    pub origin_city: String,
    pub destination_city: String,
    pub distance: String,
    pub reward: String,
    pub difficulty: String,
    pub deadline: String,
}

impl Default for JobDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            cargo: String::new(),
            origin_city: String::new(),
            destination_city: String::new(),
            distance: String::new(),
            reward: String::new(),
            difficulty: "Medium".to_owned(),
            deadline: String::new(),
        }
    }
}

impl JobDraft {
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<NewJob, &'static str> {
        let title = self.title.trim();
        let cargo = self.cargo.trim();
        let origin = self.origin_city.trim();
        let destination = self.destination_city.trim();
        if title.is_empty() || cargo.is_empty() || origin.is_empty() || destination.is_empty() {
            return Err("Fill in title, cargo, origin and destination.");
        }
        let distance = self
            .distance
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|distance| distance.is_finite() && *distance > 0.0)
            .ok_or("Distance must be a positive number.")?;
        let reward = self
            .reward
            .trim()
            .parse::<i64>()
            .ok()
            .filter(|reward| *reward >= 0)
            .ok_or("Reward must be a whole number of XP.")?;
        let difficulty = DIFFICULTIES
            .into_iter()
            .find(|level| *level == self.difficulty.trim())
            .ok_or("Pick a difficulty.")?;
        let deadline = parse_optional_local_datetime(&self.deadline).ok_or("Deadline is not a valid date.")?;

        Ok(NewJob {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            cargo: cargo.to_owned(),
            origin_city: origin.to_owned(),
            destination_city: destination.to_owned(),
            distance,
            reward,
            difficulty: difficulty.to_owned(),
            deadline,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub date_time: String,
    pub location: String,
    pub max_participants: String,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            event_type: EventType::Convoy.as_str().to_owned(),
            date_time: String::new(),
            location: String::new(),
            max_participants: String::new(),
        }
    }
}

impl EventDraft {
    /// A blank participant cap means "no cap" and is sent as `null`.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message naming the first invalid field.
    pub fn validate(&self) -> Result<NewEvent, &'static str> {
        let title = self.title.trim();
        let location = self.location.trim();
        if title.is_empty() || location.is_empty() {
            return Err("Fill in title and location.");
        }
        let event_type = EventType::parse(self.event_type.trim()).ok_or("Pick an event type.")?;
        let date_time = parse_optional_local_datetime(&self.date_time)
            .flatten()
            .ok_or("Pick a date and time.")?;
        let cap = self.max_participants.trim();
        let max_participants = if cap.is_empty() {
            None
        } else {
            Some(
                cap.parse::<u32>()
                    .ok()
                    .filter(|cap| *cap > 0)
                    .ok_or("Max participants must be a positive whole number.")?,
            )
        };

        Ok(NewEvent {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            event_type,
            date_time,
            location: location.to_owned(),
            max_participants,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileDraft {
    pub name: String,
    pub truckers_mp_id: String,
    pub steam_id: String,
}

impl ProfileDraft {
    pub fn from_identity(identity: &Identity) -> Self {
        Self {
            name: identity.name.clone(),
            truckers_mp_id: identity.truckers_mp_id.clone().unwrap_or_default(),
            steam_id: identity.steam_id.clone().unwrap_or_default(),
        }
    }

    /// Account ids are always sent, so clearing a field clears it server-side.
    ///
    /// # Errors
    ///
    /// Returns a message when the display name is blank.
    pub fn validate(&self) -> Result<UserUpdate, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Display name is required.");
        }
        Ok(UserUpdate {
            name: Some(name.to_owned()),
            truckers_mp_id: Some(self.truckers_mp_id.trim().to_owned()),
            steam_id: Some(self.steam_id.trim().to_owned()),
            role: None,
        })
    }
}

/// `Some(None)` for blank input, `Some(Some(_))` for a valid value, `None`
/// when the text does not parse.
fn parse_optional_local_datetime(raw: &str) -> Option<Option<NaiveDateTime>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(None);
    }
    NaiveDateTime::parse_from_str(raw, LOCAL_DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .map(Some)
}
