// ABOUTME: Derived-metrics engine for a personal fitness-tracking dashboard
// ABOUTME: Pure stateless computations: geodesy, streaks, XP, goal progress, trends, stress index
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # FitPulse Intelligence
//!
//! The derived-metrics engine behind the FitPulse dashboard screens.
//! Calling code supplies time-ordered records already fetched from storage;
//! each sub-engine is a pure function from records to derived values and
//! retains no state between invocations. Because no sub-engine reads or
//! writes shared memory, concurrent per-user invocation needs no locking
//! discipline, and identical inputs always produce identical outputs.
//!
//! Sub-engines:
//!
//! - **Geodesy** ([`geodesy`]): haversine distances and GPS track lengths
//! - **Streak tracker** ([`streaks`]): consecutive-day activity streaks
//! - **XP/level engine** ([`gamification`]): score, level, and badges from
//!   lifetime totals
//! - **Goal progress** ([`goals`]): clamped completion ratios and aggregate
//!   semantics for the three goal types
//! - **Trend & prediction** ([`trends`]): OLS linear fit and fixed-horizon
//!   forecasting
//! - **Stress/recovery index** ([`recovery`]): composite 0-100 score over
//!   workout, sleep, mood, and nutrition averages
//!
//! Outputs are plain numeric/enumerated values; formatting and localization
//! belong to the presentation collaborator.
//!
//! ## Example
//!
//! ```rust
//! use fitpulse_intelligence::{compute_xp, LifetimeTotals};
//!
//! let state = compute_xp(&LifetimeTotals {
//!     workouts: 10,
//!     distance_km: 50.0,
//!     duration_min: 500.0,
//! });
//! assert_eq!(state.level, 13);
//! ```

/// Fixed engine constants (XP coefficients, targets, thresholds)
pub mod constants;
/// Engine error types
pub mod errors;
/// XP, levels, and achievement badges
pub mod gamification;
/// Great-circle distance calculations
pub mod geodesy;
/// Goal progress normalization and aggregate semantics
pub mod goals;
/// Input record types from the storage collaborator
pub mod models;
/// Mood label scoring
pub mod mood;
/// Composite stress/recovery index
pub mod recovery;
/// Consecutive-day streak tracking
pub mod streaks;
/// Linear trend fitting and forecasting
pub mod trends;

pub use errors::{EngineError, EngineResult};
pub use gamification::{compute_xp, unlocked_achievements, Achievement, LifetimeTotals, XpState};
pub use geodesy::{haversine_distance_km, track_distance_km};
pub use goals::{aggregate_current_value, clamped_progress, AggregateKind, GoalSpec, GoalType};
pub use models::{parse_date_lenient, ActivityRecord, GeoPoint, NutritionSample, SleepSample};
pub use mood::{mood_score, MoodLabel, MoodSample};
pub use recovery::{
    stress_index, StressAssessment, StressClassification, StressComponents, StressInputs,
};
pub use streaks::{calculate_streaks, StreakSummary};
pub use trends::{
    forecast, forecast_next, weekly_forecast, HorizonPrediction, TrendDirection, TrendForecast,
    TrendModel, TrendSample,
};
