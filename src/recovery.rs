// ABOUTME: Composite stress/recovery index blending workout, sleep, mood, and nutrition averages
// ABOUTME: Four sub-scores capped at 25 each; missing activity data scores 0, missing mood is neutral
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Stress/recovery index.
//!
//! Blends four normalized component scores — workout volume, sleep, mood,
//! and nutrition — into a single 0-100 index. The missing-data defaults are
//! asymmetric on purpose: absent workout, sleep, or nutrition data reads as
//! a deficiency signal and scores 0, while absent mood data reads as
//! neutral and scores mid-scale.

use crate::constants::mood_scores;
use crate::constants::recovery::{
    BALANCED_THRESHOLD, CALORIE_TARGET_KCAL, MOOD_SCALE_MAX, RECENT_WINDOW, SLEEP_TARGET_HOURS,
    STRESSED_THRESHOLD, SUB_SCORE_CAP, WORKOUT_TARGET_MIN,
};
use crate::models::{ActivityRecord, NutritionSample, SleepSample};
use crate::mood::MoodSample;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Per-category averages feeding the index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressInputs {
    /// Average workout duration over the recent window, minutes
    pub avg_workout_min: f64,
    /// Average nightly sleep over the recent window, hours
    pub avg_sleep_hours: f64,
    /// Average mood score over the recent window, 0-100
    pub avg_mood_score: f64,
    /// Average daily calories over the recent window
    pub avg_calories: f64,
}

impl StressInputs {
    /// Average the most recent window (7 samples) of each category.
    ///
    /// Record slices arrive chronologically ordered, so the trailing entries
    /// are the most recent. Empty categories take their defaults here:
    /// workouts, sleep, and nutrition average to 0, mood to the neutral 50.
    #[must_use]
    pub fn from_recent_records(
        workouts: &[ActivityRecord],
        sleep: &[SleepSample],
        moods: &[MoodSample],
        nutrition: &[NutritionSample],
    ) -> Self {
        Self {
            avg_workout_min: tail_average(
                workouts.iter().map(ActivityRecord::duration_or_zero),
                workouts.len(),
            )
            .unwrap_or(0.0),
            avg_sleep_hours: tail_average(sleep.iter().map(|s| s.hours), sleep.len())
                .unwrap_or(0.0),
            avg_mood_score: tail_average(moods.iter().map(MoodSample::score), moods.len())
                .unwrap_or(mood_scores::NEUTRAL),
            avg_calories: tail_average(nutrition.iter().map(|n| n.calories), nutrition.len())
                .unwrap_or(0.0),
        }
    }
}

/// Mean of the last [`RECENT_WINDOW`] values, or `None` when empty
fn tail_average(values: impl Iterator<Item = f64>, len: usize) -> Option<f64> {
    let skip = len.saturating_sub(RECENT_WINDOW);
    let window: Vec<f64> = values.skip(skip).collect();
    if window.is_empty() {
        None
    } else {
        Some(window.iter().sum::<f64>() / window.len() as f64)
    }
}

/// The four component sub-scores, each in [0, 25]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressComponents {
    /// Workout volume sub-score
    pub workout_score: f64,
    /// Sleep sub-score
    pub sleep_score: f64,
    /// Mood sub-score
    pub mood_score: f64,
    /// Nutrition sub-score
    pub nutrition_score: f64,
}

/// Classification bands for the index; lower bounds are inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressClassification {
    /// Index ≥ 75: balanced and recovered
    Balanced,
    /// Index ≥ 50: slightly stressed
    SlightlyStressed,
    /// Index < 50: overtraining risk
    OvertrainingRisk,
}

impl StressClassification {
    /// Band for an index value; exactly 75.0 and 50.0 fall into the
    /// higher band
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= BALANCED_THRESHOLD {
            Self::Balanced
        } else if score >= STRESSED_THRESHOLD {
            Self::SlightlyStressed
        } else {
            Self::OvertrainingRisk
        }
    }
}

/// Composite assessment handed to the presentation collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StressAssessment {
    /// Composite index in [0, 100]
    pub score: f64,
    /// Per-component breakdown
    pub components: StressComponents,
    /// Classification band for the score
    pub classification: StressClassification,
}

/// Normalize one category average against its target, capped at 25
fn sub_score(average: f64, target: f64) -> f64 {
    (average / target * SUB_SCORE_CAP).min(SUB_SCORE_CAP)
}

/// Compute the stress/recovery index from per-category averages.
///
/// Each input is normalized to a sub-score capped at 25 (`min(avg / target
/// * 25, 25)`) against targets of 60 min workout, 8 h sleep, 100 mood, and
/// 2000 kcal; the index is the sum of the four.
#[must_use]
pub fn stress_index(inputs: &StressInputs) -> StressAssessment {
    let components = StressComponents {
        workout_score: sub_score(inputs.avg_workout_min, WORKOUT_TARGET_MIN),
        sleep_score: sub_score(inputs.avg_sleep_hours, SLEEP_TARGET_HOURS),
        mood_score: sub_score(inputs.avg_mood_score, MOOD_SCALE_MAX),
        nutrition_score: sub_score(inputs.avg_calories, CALORIE_TARGET_KCAL),
    };

    let score = components.workout_score
        + components.sleep_score
        + components.mood_score
        + components.nutrition_score;

    debug!(score, "computed stress index");

    StressAssessment {
        score,
        components,
        classification: StressClassification::from_score(score),
    }
}
