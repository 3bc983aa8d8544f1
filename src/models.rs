// ABOUTME: Input record types consumed by the derived-metrics engine
// ABOUTME: Records arrive pre-filtered to one user from the storage collaborator; the engine reads only
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Input record types.
//!
//! The storage collaborator supplies these, ordered chronologically and
//! filtered to a single user. The engine never fetches or mutates them;
//! every computation is a pure function over already-fetched slices.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One logged workout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Calendar date the workout was logged for
    pub date: NaiveDate,
    /// Distance covered in kilometres, if recorded
    pub distance_km: Option<f64>,
    /// Duration in minutes, if recorded
    pub duration_min: Option<f64>,
}

impl ActivityRecord {
    /// Distance used for aggregation; missing values count as 0
    #[must_use]
    pub fn distance_or_zero(&self) -> f64 {
        self.distance_km.unwrap_or(0.0)
    }

    /// Duration used for aggregation; missing values count as 0
    #[must_use]
    pub fn duration_or_zero(&self) -> f64 {
        self.duration_min.unwrap_or(0.0)
    }
}

/// A latitude/longitude pair in degrees
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180].
/// Ephemeral: constructed from a GPS track or map clicks and consumed
/// immediately by the geodesy functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl GeoPoint {
    /// Construct a point from degree coordinates
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One night of logged sleep
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepSample {
    /// Calendar date of the night
    pub date: NaiveDate,
    /// Hours slept
    pub hours: f64,
}

/// One nutrition log entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionSample {
    /// Calendar date of the entry
    pub date: NaiveDate,
    /// Calories consumed
    pub calories: f64,
}

/// Parse a stored date string leniently, returning `None` for anything
/// unparseable.
///
/// The storage collaborator persists dates as ISO strings but historical
/// rows carry mixed formats; malformed values are dropped silently (treated
/// as missing data, not a hard failure) before computation proceeds.
#[must_use]
pub fn parse_date_lenient(raw: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];

    let trimmed = raw.trim();

    // Full timestamps first: "2024-01-15T07:30:00" and friends
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    debug!(raw, "dropping record with unparseable date");
    None
}
