// ABOUTME: Linear trend fitting and fixed-horizon distance forecasting
// ABOUTME: Ordinary least squares over elapsed days; intentionally a simple extrapolation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(clippy::cast_precision_loss)] // Safe: day counts and sample sizes are small

//! Trend & prediction engine.
//!
//! Fits `value = slope * days_elapsed + intercept` by ordinary least
//! squares over a chronological series, then extrapolates at fixed
//! horizons past the most recent sample. This is deliberately a simple
//! linear extrapolation: no seasonality, no outlier rejection, no
//! model selection. Upgrading it silently would change the dashboard's
//! published numbers, so the limitation is documented instead.

use crate::constants::trend::{DEFAULT_HORIZON_DAYS, MIN_TREND_SAMPLES, WEEKLY_HORIZONS};
use crate::errors::{EngineError, EngineResult};
use crate::models::ActivityRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One (date, value) observation in a metric series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendSample {
    /// Calendar date of the observation
    pub date: NaiveDate,
    /// Observed metric value
    pub value: f64,
}

impl TrendSample {
    /// Build a distance series from workout records, dropping records with
    /// no recorded distance before any sample-count check is applied
    #[must_use]
    pub fn from_activity_distances(records: &[ActivityRecord]) -> Vec<Self> {
        records
            .iter()
            .filter_map(|record| {
                record.distance_km.map(|value| Self {
                    date: record.date,
                    value,
                })
            })
            .collect()
    }
}

/// A fitted linear model over (elapsed days, value) pairs.
///
/// Ephemeral: rebuilt on every prediction request, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendModel {
    /// Rate of change per elapsed day
    pub slope: f64,
    /// Fitted value at day 0
    pub intercept: f64,
    /// Earliest sample date; day 0 of the elapsed-days axis
    pub origin: NaiveDate,
    /// Elapsed days of the most recent sample
    pub max_day: i64,
}

impl TrendModel {
    /// Fit a line over the series by ordinary least squares.
    ///
    /// Each date is converted to integer days elapsed since the earliest
    /// sample. Same-day ties are all included, not merged — two workouts on
    /// one day are two observations at the same x.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InsufficientData`] when fewer than 5 samples
    /// are supplied, and [`EngineError::ZeroVariance`] when every sample
    /// falls on the same day.
    pub fn fit(samples: &[TrendSample]) -> EngineResult<Self> {
        if samples.len() < MIN_TREND_SAMPLES {
            return Err(EngineError::InsufficientData {
                required: MIN_TREND_SAMPLES,
                actual: samples.len(),
            });
        }

        let mut origin = samples[0].date;
        for sample in samples {
            origin = origin.min(sample.date);
        }

        let points: Vec<(f64, f64)> = samples
            .iter()
            .map(|sample| ((sample.date - origin).num_days() as f64, sample.value))
            .collect();

        let n = points.len() as f64;
        let sum_x = points.iter().map(|(x, _)| x).sum::<f64>();
        let sum_y = points.iter().map(|(_, y)| y).sum::<f64>();
        let sum_xx = points.iter().map(|(x, _)| x * x).sum::<f64>();
        let sum_x_y = points.iter().map(|(x, y)| x * y).sum::<f64>();

        let mean_x = sum_x / n;
        let mean_y = sum_y / n;

        let denominator = (n * mean_x).mul_add(-mean_x, sum_xx);
        if denominator.abs() < f64::EPSILON {
            return Err(EngineError::ZeroVariance);
        }

        let slope = (n * mean_x).mul_add(-mean_y, sum_x_y) / denominator;
        let intercept = slope.mul_add(-mean_x, mean_y);

        let mut max_day = 0i64;
        for sample in samples {
            max_day = max_day.max((sample.date - origin).num_days());
        }

        debug!(slope, intercept, samples = samples.len(), "fitted trend");

        Ok(Self {
            slope,
            intercept,
            origin,
            max_day,
        })
    }

    /// Predicted value at an elapsed-days coordinate
    #[must_use]
    pub fn predict_at_day(&self, day: i64) -> f64 {
        self.slope.mul_add(day as f64, self.intercept)
    }

    /// Predicted value at a calendar date
    #[must_use]
    pub fn predict_at(&self, date: NaiveDate) -> f64 {
        self.predict_at_day((date - self.origin).num_days())
    }

    /// Fitted value per historical sample, for the trend overlay chart
    #[must_use]
    pub fn fitted_values(&self, samples: &[TrendSample]) -> Vec<f64> {
        samples
            .iter()
            .map(|sample| self.predict_at(sample.date))
            .collect()
    }
}

/// Growth-direction classification for the default 7-day look-ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Predicted value exceeds the last actual value
    Improving,
    /// Predicted value falls below the last actual value
    Declining,
    /// Predicted value exactly equals the last actual value
    Stable,
}

/// One forecast point at a fixed horizon past the most recent sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonPrediction {
    /// Days past the most recent sample
    pub horizon_days: i64,
    /// Predicted metric value at that horizon
    pub predicted_value: f64,
}

/// Forecast handed to the presentation collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendForecast {
    /// The fitted model behind the predictions
    pub model: TrendModel,
    /// Predictions at each requested horizon
    pub predictions: Vec<HorizonPrediction>,
    /// Prediction at the default 7-day horizon
    pub next_predicted_value: f64,
    /// `next_predicted_value - last_actual_value`
    pub growth: f64,
    /// Sign of `growth`; the stable band is zero-width by design
    pub direction: TrendDirection,
}

/// Fit the series and predict at each requested horizon past the most
/// recent sample.
///
/// The growth classification compares the 7-day prediction against the last
/// actual value in the series: any positive delta is improving, any
/// negative delta declining, and only exact equality reads as stable. There
/// is intentionally no tolerance band — near-zero deltas may flap between
/// labels, and that is the documented behavior rather than a hidden
/// epsilon.
///
/// # Errors
///
/// Propagates [`EngineError::InsufficientData`] and
/// [`EngineError::ZeroVariance`] from the fit.
pub fn forecast(samples: &[TrendSample], horizons: &[i64]) -> EngineResult<TrendForecast> {
    let model = TrendModel::fit(samples)?;

    let predictions = horizons
        .iter()
        .map(|&horizon_days| HorizonPrediction {
            horizon_days,
            predicted_value: model.predict_at_day(model.max_day + horizon_days),
        })
        .collect();

    // Series arrives chronologically ordered; the final entry is the last actual.
    let last_actual = samples.last().map_or(0.0, |sample| sample.value);
    let next_predicted_value = model.predict_at_day(model.max_day + DEFAULT_HORIZON_DAYS);
    let growth = next_predicted_value - last_actual;

    let direction = if growth > 0.0 {
        TrendDirection::Improving
    } else if growth < 0.0 {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    Ok(TrendForecast {
        model,
        predictions,
        next_predicted_value,
        growth,
        direction,
    })
}

/// Forecast at the single default horizon of 7 days
///
/// # Errors
///
/// Propagates fit errors from [`forecast`].
pub fn forecast_next(samples: &[TrendSample]) -> EngineResult<TrendForecast> {
    forecast(samples, &[DEFAULT_HORIZON_DAYS])
}

/// Five-point weekly forecast table (horizons 7, 14, 21, 28, 35 days)
///
/// # Errors
///
/// Propagates fit errors from [`forecast`].
pub fn weekly_forecast(samples: &[TrendSample]) -> EngineResult<TrendForecast> {
    forecast(samples, &WEEKLY_HORIZONS)
}
