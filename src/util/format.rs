//! Display formatting for counters, distances and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

/// `45210` -> `45,210`.
pub fn thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Whole kilometres with separators.
#[allow(clippy::cast_possible_truncation)]
pub fn distance_km(km: f64) -> String {
    if !km.is_finite() {
        return "0 km".to_owned();
    }
    format!("{} km", thousands(km.round() as i64))
}

pub fn xp(points: i64) -> String {
    format!("{} XP", thousands(points))
}

pub fn date_time(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y %H:%M").to_string()
}

pub fn date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d, %Y").to_string()
}

/// `3 / 12` with a cap, `3 joined` without one.
pub fn capacity(joined: usize, max: Option<usize>) -> String {
    match max {
        Some(max) => format!("{joined} / {max}"),
        None => format!("{joined} joined"),
    }
}

pub fn route(origin: &str, destination: &str) -> String {
    format!("{origin} → {destination}")
}
