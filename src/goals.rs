// ABOUTME: Goal progress normalization and aggregate semantics for dashboard goals
// ABOUTME: The engine owns the clamp formula and goal-type mapping; storage owns the data
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Goal progress engine.
//!
//! A goal maps to a goal-type-specific aggregate (SUM of distance, COUNT of
//! workouts, or SUM of calories) that the storage collaborator computes and
//! supplies as `current_value`; this module only defines the recognized goal
//! types, their aggregate semantics, and the normalization/clamp contract.
//! The aggregate read must be at least read-committed — a requirement
//! imposed on the storage layer, not satisfied here.

use crate::errors::EngineError;
use crate::models::{ActivityRecord, NutritionSample};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three recognized goal types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalType {
    /// Total distance across workouts, kilometres (SUM)
    TotalDistance,
    /// Number of logged workouts (COUNT)
    TotalWorkouts,
    /// Total calories across nutrition entries (SUM)
    TargetCalories,
}

/// Aggregate the storage collaborator runs for a goal type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    /// SUM over a numeric column
    Sum,
    /// COUNT of matching rows
    Count,
}

impl GoalType {
    /// Label the goal picker stores for this type
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TotalDistance => "Total Distance (km)",
            Self::TotalWorkouts => "Total Workouts",
            Self::TargetCalories => "Target Calories",
        }
    }

    /// Aggregate semantics for this goal type
    #[must_use]
    pub const fn aggregate_kind(self) -> AggregateKind {
        match self {
            Self::TotalDistance | Self::TargetCalories => AggregateKind::Sum,
            Self::TotalWorkouts => AggregateKind::Count,
        }
    }
}

impl FromStr for GoalType {
    type Err = EngineError;

    /// Parse a stored goal-type label.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidGoalType`] for labels outside the three
    /// recognized values; the caller should treat the goal's current value
    /// as undefined rather than guessing an aggregate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Total Distance (km)" | "total_distance" => Ok(Self::TotalDistance),
            "Total Workouts" | "total_workouts" => Ok(Self::TotalWorkouts),
            "Target Calories" | "target_calories" => Ok(Self::TargetCalories),
            other => Err(EngineError::InvalidGoalType(other.to_owned())),
        }
    }
}

/// A goal specification, as stored by the goals screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSpec {
    /// What is being totalled
    pub goal_type: GoalType,
    /// Target value for the aggregate; positive
    pub target_value: f64,
    /// Start of the goal's date range, inclusive
    pub start_date: NaiveDate,
    /// End of the goal's date range, inclusive
    pub end_date: NaiveDate,
}

impl GoalSpec {
    /// Clamped completion ratio for a caller-supplied aggregate value
    #[must_use]
    pub fn progress(&self, current_value: f64) -> f64 {
        clamped_progress(self.target_value, current_value)
    }

    /// Whether a record date falls inside the goal's inclusive date range
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}

/// Completion ratio in [0, 1]: `min(current / target, 1.0)`, with a zero or
/// negative target yielding 0 so there is no division by zero
#[must_use]
pub fn clamped_progress(target_value: f64, current_value: f64) -> f64 {
    if target_value > 0.0 {
        (current_value / target_value).min(1.0)
    } else {
        0.0
    }
}

/// Goal-type aggregate over already-fetched records.
///
/// Pure counterpart of the storage collaborator's SUM/COUNT queries, for
/// callers that already hold the record slices. Missing numeric fields
/// count as 0. Date-range filtering is the caller's choice; pass pre-filtered
/// slices to scope the aggregate to the goal's range.
#[must_use]
pub fn aggregate_current_value(
    goal_type: GoalType,
    workouts: &[ActivityRecord],
    nutrition: &[NutritionSample],
) -> f64 {
    match goal_type {
        GoalType::TotalDistance => workouts.iter().map(ActivityRecord::distance_or_zero).sum(),
        GoalType::TotalWorkouts => workouts.len() as f64,
        GoalType::TargetCalories => nutrition.iter().map(|entry| entry.calories).sum(),
    }
}
