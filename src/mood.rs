// ABOUTME: Mood label enumeration and numeric scoring lookup
// ABOUTME: Maps journal mood labels to 0-100 scores used by analytics and the stress index
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Mood scoring.
//!
//! Journal entries store mood as a display label (historically prefixed with
//! an emoji, e.g. "💪 Energized"). The engine maps labels to a fixed 0-100
//! score; any label outside the recognized set scores the neutral 50 rather
//! than failing, matching the lenient-parsing policy of the storage layer.

use crate::constants::mood_scores;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One journal entry's mood, as logged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSample {
    /// Calendar date of the journal entry
    pub date: NaiveDate,
    /// Raw mood label from storage; may carry emoji prefixes
    pub label: String,
}

impl MoodSample {
    /// Numeric score for this entry's label
    #[must_use]
    pub fn score(&self) -> f64 {
        mood_score(&self.label)
    }
}

/// Recognized mood labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodLabel {
    /// High-energy positive mood
    Energized,
    /// Positive mood
    Good,
    /// Neutral mood
    Okay,
    /// Low mood
    Low,
    /// Exhausted mood
    Tired,
}

impl MoodLabel {
    /// Numeric score on the 0-100 scale
    #[must_use]
    pub const fn score(self) -> f64 {
        match self {
            Self::Energized => mood_scores::ENERGIZED,
            Self::Good => mood_scores::GOOD,
            Self::Okay => mood_scores::OKAY,
            Self::Low => mood_scores::LOW,
            Self::Tired => mood_scores::TIRED,
        }
    }

    /// Parse a raw stored label, tolerating emoji prefixes and casing
    #[must_use]
    pub fn parse(label: &str) -> Option<Self> {
        let normalized = label
            .trim()
            .trim_start_matches(|c: char| !c.is_ascii_alphabetic())
            .to_ascii_lowercase();

        match normalized.as_str() {
            "energized" => Some(Self::Energized),
            "good" => Some(Self::Good),
            "okay" => Some(Self::Okay),
            "low" => Some(Self::Low),
            "tired" => Some(Self::Tired),
            _ => None,
        }
    }
}

/// Score for a raw label string; unrecognized labels get the neutral 50
#[must_use]
pub fn mood_score(label: &str) -> f64 {
    MoodLabel::parse(label).map_or(mood_scores::NEUTRAL, MoodLabel::score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_recognized_labels() {
        assert!((mood_score("Energized") - 90.0).abs() < f64::EPSILON);
        assert!((mood_score("Good") - 75.0).abs() < f64::EPSILON);
        assert!((mood_score("Okay") - 60.0).abs() < f64::EPSILON);
        assert!((mood_score("Low") - 40.0).abs() < f64::EPSILON);
        assert!((mood_score("Tired") - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn tolerates_emoji_prefixes() {
        assert!((mood_score("💪 Energized") - 90.0).abs() < f64::EPSILON);
        assert!((mood_score("😴 Tired") - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unrecognized_label_defaults_to_neutral() {
        assert!((mood_score("Ecstatic") - 50.0).abs() < f64::EPSILON);
        assert!((mood_score("") - 50.0).abs() < f64::EPSILON);
    }
}
