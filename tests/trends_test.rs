// ABOUTME: Integration tests for the trend & prediction engine
// ABOUTME: Validates OLS fitting, horizon forecasting, growth classification, and error paths
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::NaiveDate;
use fitpulse_intelligence::{
    forecast_next, weekly_forecast, ActivityRecord, EngineError, TrendDirection, TrendModel,
    TrendSample,
};

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Duration::days(offset)
}

fn sample(offset: i64, value: f64) -> TrendSample {
    TrendSample {
        date: day(offset),
        value,
    }
}

#[test]
fn test_four_points_is_insufficient_data() {
    let samples: Vec<TrendSample> = (0..4).map(|i| sample(i * 7, i as f64)).collect();
    let err = TrendModel::fit(&samples).unwrap_err();
    assert_eq!(
        err,
        EngineError::InsufficientData {
            required: 5,
            actual: 4
        }
    );
}

#[test]
fn test_perfectly_linear_series_extrapolates_exactly() {
    // value == days elapsed: slope 1, intercept 0
    let samples: Vec<TrendSample> = [0, 7, 14, 21, 28]
        .iter()
        .map(|&d| sample(d, d as f64))
        .collect();

    let model = TrendModel::fit(&samples).unwrap();
    assert!((model.slope - 1.0).abs() < 1e-9);
    assert!(model.intercept.abs() < 1e-9);
    assert_eq!(model.max_day, 28);

    // Predicted at day 35 (max_day + default 7-day horizon)
    let result = forecast_next(&samples).unwrap();
    assert!((result.next_predicted_value - 35.0).abs() < 1e-6);
    assert_eq!(result.direction, TrendDirection::Improving);
}

#[test]
fn test_fitted_values_overlay_matches_perfect_line() {
    let samples: Vec<TrendSample> = [0, 7, 14, 21, 28]
        .iter()
        .map(|&d| sample(d, d as f64))
        .collect();
    let model = TrendModel::fit(&samples).unwrap();

    for (fitted, actual) in model.fitted_values(&samples).iter().zip(&samples) {
        assert!((fitted - actual.value).abs() < 1e-9);
    }
}

#[test]
fn test_flat_series_classifies_as_stable() {
    // Constant value: slope exactly 0, prediction exactly equals last actual
    let samples: Vec<TrendSample> = [0, 7, 14, 21, 28]
        .iter()
        .map(|&d| sample(d, 5.0))
        .collect();

    let result = forecast_next(&samples).unwrap();
    assert_eq!(result.direction, TrendDirection::Stable);
    assert!((result.growth - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_declining_series_classifies_as_declining() {
    let samples: Vec<TrendSample> = [0, 7, 14, 21, 28]
        .iter()
        .map(|&d| sample(d, 30.0 - d as f64))
        .collect();

    let result = forecast_next(&samples).unwrap();
    assert_eq!(result.direction, TrendDirection::Declining);
    assert!(result.growth < 0.0);
}

#[test]
fn test_same_day_ties_are_included_not_merged() {
    // Two observations on day 14; both contribute to the fit
    let samples = vec![
        sample(0, 0.0),
        sample(7, 7.0),
        sample(14, 13.0),
        sample(14, 15.0),
        sample(21, 21.0),
        sample(28, 28.0),
    ];

    let model = TrendModel::fit(&samples).unwrap();
    // The tie pair averages onto the line, so slope stays 1
    assert!((model.slope - 1.0).abs() < 1e-9);
}

#[test]
fn test_all_samples_on_one_day_is_zero_variance() {
    let samples: Vec<TrendSample> = (0..5).map(|i| sample(0, i as f64)).collect();
    assert_eq!(TrendModel::fit(&samples).unwrap_err(), EngineError::ZeroVariance);
}

#[test]
fn test_weekly_forecast_produces_five_points() {
    let samples: Vec<TrendSample> = [0, 7, 14, 21, 28]
        .iter()
        .map(|&d| sample(d, d as f64))
        .collect();

    let result = weekly_forecast(&samples).unwrap();
    assert_eq!(result.predictions.len(), 5);

    let horizons: Vec<i64> = result.predictions.iter().map(|p| p.horizon_days).collect();
    assert_eq!(horizons, vec![7, 14, 21, 28, 35]);

    // Perfect line: prediction at max_day + h is max_day + h
    for prediction in &result.predictions {
        let expected = (28 + prediction.horizon_days) as f64;
        assert!((prediction.predicted_value - expected).abs() < 1e-6);
    }
}

#[test]
fn test_records_without_distance_are_dropped_before_the_count_check() {
    let mut records: Vec<ActivityRecord> = (0..4)
        .map(|i| ActivityRecord {
            date: day(i * 7),
            distance_km: Some(i as f64),
            duration_min: Some(30.0),
        })
        .collect();
    // A fifth record with no distance does not rescue the sample count
    records.push(ActivityRecord {
        date: day(28),
        distance_km: None,
        duration_min: Some(30.0),
    });

    let samples = TrendSample::from_activity_distances(&records);
    assert_eq!(samples.len(), 4);
    assert!(matches!(
        TrendModel::fit(&samples),
        Err(EngineError::InsufficientData { actual: 4, .. })
    ));
}

#[test]
fn test_repeated_forecasts_are_identical() {
    let samples: Vec<TrendSample> = [0, 3, 9, 14, 21, 28]
        .iter()
        .map(|&d| sample(d, 2.0 + d as f64 * 0.3))
        .collect();

    let first = forecast_next(&samples).unwrap();
    let second = forecast_next(&samples).unwrap();
    assert_eq!(first, second);
}
