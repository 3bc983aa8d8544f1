// ABOUTME: Integration tests for the goal progress engine
// ABOUTME: Validates the clamp contract, goal-type parsing, and date-scoped aggregation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::NaiveDate;
use fitpulse_intelligence::{
    aggregate_current_value, ActivityRecord, EngineError, GoalSpec, GoalType, NutritionSample,
};

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap() + chrono::Duration::days(offset)
}

fn workout(offset: i64, distance_km: Option<f64>) -> ActivityRecord {
    ActivityRecord {
        date: day(offset),
        distance_km,
        duration_min: Some(30.0),
    }
}

#[test]
fn test_progress_clamps_overshoot_to_one() {
    let goal = GoalSpec {
        goal_type: GoalType::TotalDistance,
        target_value: 50.0,
        start_date: day(0),
        end_date: day(30),
    };
    assert!((goal.progress(75.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_zero_target_never_divides() {
    let goal = GoalSpec {
        goal_type: GoalType::TotalWorkouts,
        target_value: 0.0,
        start_date: day(0),
        end_date: day(30),
    };
    assert!((goal.progress(10.0) - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_distance_aggregate_treats_missing_as_zero() {
    let workouts = [
        workout(0, Some(5.0)),
        workout(1, None),
        workout(2, Some(7.5)),
    ];
    let total = aggregate_current_value(GoalType::TotalDistance, &workouts, &[]);
    assert!((total - 12.5).abs() < f64::EPSILON);
}

#[test]
fn test_workout_aggregate_counts_rows() {
    let workouts = [workout(0, None), workout(1, None), workout(2, Some(3.0))];
    let total = aggregate_current_value(GoalType::TotalWorkouts, &workouts, &[]);
    assert!((total - 3.0).abs() < f64::EPSILON);
}

#[test]
fn test_calorie_aggregate_sums_nutrition() {
    let nutrition = [
        NutritionSample {
            date: day(0),
            calories: 1800.0,
        },
        NutritionSample {
            date: day(1),
            calories: 2200.0,
        },
    ];
    let total = aggregate_current_value(GoalType::TargetCalories, &[], &nutrition);
    assert!((total - 4000.0).abs() < f64::EPSILON);
}

#[test]
fn test_date_range_scoping_via_contains() {
    let goal = GoalSpec {
        goal_type: GoalType::TotalDistance,
        target_value: 20.0,
        start_date: day(5),
        end_date: day(10),
    };

    let workouts = [
        workout(0, Some(100.0)), // before the range
        workout(5, Some(4.0)),   // range start, inclusive
        workout(10, Some(6.0)),  // range end, inclusive
        workout(15, Some(100.0)), // after the range
    ];

    let in_range: Vec<ActivityRecord> = workouts
        .iter()
        .copied()
        .filter(|record| goal.contains(record.date))
        .collect();

    let current = aggregate_current_value(goal.goal_type, &in_range, &[]);
    assert!((current - 10.0).abs() < f64::EPSILON);
    assert!((goal.progress(current) - 0.5).abs() < f64::EPSILON);
}

#[test]
fn test_unrecognized_stored_label_errors() {
    let err = "Weekly Step Count".parse::<GoalType>().unwrap_err();
    assert!(matches!(err, EngineError::InvalidGoalType(label) if label == "Weekly Step Count"));
}

#[test]
fn test_round_trip_of_picker_labels() {
    for goal_type in [
        GoalType::TotalDistance,
        GoalType::TotalWorkouts,
        GoalType::TargetCalories,
    ] {
        assert_eq!(goal_type.label().parse::<GoalType>().unwrap(), goal_type);
    }
}
