// ABOUTME: Great-circle distance calculations for GPS tracks and ad-hoc point pairs
// ABOUTME: Haversine in its atan2 form with a spherical Earth radius of 6371 km
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Geodesy: great-circle distances.
//!
//! Used to total the length of a GPS track and to answer ad-hoc two-point
//! distance queries from the route map. Pure functions, no side effects.

use crate::constants::geodesy::EARTH_RADIUS_KM;
use crate::models::GeoPoint;

/// Great-circle distance in kilometres between two points.
///
/// Uses the atan2 form of the haversine formula, which stays in-domain for
/// antipodal inputs where `asin(sqrt(a))` can leave [-1, 1] through rounding.
/// Identical points yield exactly 0; the function is symmetric in its
/// arguments.
#[must_use]
pub fn haversine_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let half_chord = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * half_chord.sqrt().atan2((1.0 - half_chord).sqrt())
}

/// Total length of an ordered GPS track in kilometres.
///
/// Sums consecutive-pair distances over the sequence; empty and
/// single-point tracks have length 0.
#[must_use]
pub fn track_distance_km(points: &[GeoPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_distance_km(pair[0], pair[1]))
        .sum()
}
