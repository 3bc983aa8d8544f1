// ABOUTME: Fixed engine constants shared across the derived-metrics modules
// ABOUTME: Presentation-tuned values; treat as configuration, not invariants to optimize
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Fixed constants used throughout the engine.
//!
//! The XP coefficients and stress sub-score caps are presentation-tuned
//! values carried over from the dashboard product; they have no physiological
//! derivation and are grouped here so the formulas read against named values.

/// Geodesic constants
pub mod geodesy {
    /// Mean Earth radius in kilometres, spherical model
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
}

/// XP/leveling constants
pub mod gamification {
    /// XP granted per logged workout
    pub const XP_PER_WORKOUT: f64 = 10.0;

    /// XP granted per kilometre of lifetime distance
    pub const XP_PER_KM: f64 = 5.0;

    /// XP granted per minute of lifetime duration
    pub const XP_PER_MINUTE: f64 = 2.0;

    /// XP span of a single level
    pub const XP_PER_LEVEL: f64 = 100.0;
}

/// Mood label score lookup values (0-100 scale)
pub mod mood_scores {
    /// Score for an "Energized" journal entry
    pub const ENERGIZED: f64 = 90.0;
    /// Score for a "Good" journal entry
    pub const GOOD: f64 = 75.0;
    /// Score for an "Okay" journal entry
    pub const OKAY: f64 = 60.0;
    /// Score for a "Low" journal entry
    pub const LOW: f64 = 40.0;
    /// Score for a "Tired" journal entry
    pub const TIRED: f64 = 30.0;
    /// Mid-scale score used for unrecognized labels and missing mood data
    pub const NEUTRAL: f64 = 50.0;
}

/// Trend fitting and forecasting constants
pub mod trend {
    /// Minimum sample count before a line is fitted; fewer points would
    /// overfit a line to noise
    pub const MIN_TREND_SAMPLES: usize = 5;

    /// Default look-ahead used for the "next workout" prediction and the
    /// growth-direction classification
    pub const DEFAULT_HORIZON_DAYS: i64 = 7;

    /// Horizons for the 5-point weekly forecast table
    pub const WEEKLY_HORIZONS: [i64; 5] = [7, 14, 21, 28, 35];
}

/// Stress/recovery index constants
pub mod recovery {
    /// Maximum contribution of each of the four components
    pub const SUB_SCORE_CAP: f64 = 25.0;

    /// Daily workout-duration target in minutes for a full workout sub-score
    pub const WORKOUT_TARGET_MIN: f64 = 60.0;

    /// Nightly sleep target in hours for a full sleep sub-score
    pub const SLEEP_TARGET_HOURS: f64 = 8.0;

    /// Top of the mood score scale
    pub const MOOD_SCALE_MAX: f64 = 100.0;

    /// Daily calorie target for a full nutrition sub-score
    pub const CALORIE_TARGET_KCAL: f64 = 2000.0;

    /// Inclusive lower bound of the "balanced" classification band
    pub const BALANCED_THRESHOLD: f64 = 75.0;

    /// Inclusive lower bound of the "slightly stressed" classification band
    pub const STRESSED_THRESHOLD: f64 = 50.0;

    /// Number of most-recent samples averaged per category
    pub const RECENT_WINDOW: usize = 7;
}
