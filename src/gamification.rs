// ABOUTME: Deterministic XP, level, and achievement computation from lifetime activity totals
// ABOUTME: Pure projection recomputed per call; nothing here is persisted or mutated in place
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! XP/level engine and achievement badges.
//!
//! XP is a monotonic score over lifetime totals: it is strictly
//! non-decreasing as any input increases, and level is a non-decreasing step
//! function of XP. Because the state is recomputed from current totals on
//! every call, concurrent reads of the underlying totals carry no
//! lost-update risk; there is no incremental mutation anywhere.

use crate::constants::gamification::{XP_PER_KM, XP_PER_LEVEL, XP_PER_MINUTE, XP_PER_WORKOUT};
use serde::{Deserialize, Serialize};

/// Lifetime activity totals, as aggregated by the storage collaborator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LifetimeTotals {
    /// Count of logged workouts
    pub workouts: u64,
    /// Total distance across all workouts, kilometres
    pub distance_km: f64,
    /// Total duration across all workouts, minutes
    pub duration_min: f64,
}

/// Derived XP state; never persisted by this engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XpState {
    /// Experience points, unbounded
    pub xp: f64,
    /// Current level, `floor(xp / 100)`
    pub level: u32,
    /// XP threshold of the next level
    pub next_level_xp: f64,
    /// Fraction of the current level completed, in [0, 1]
    pub progress_fraction: f64,
}

/// Compute XP, level, and progress from lifetime totals.
///
/// `xp = workouts * 10 + distance_km * 5 + duration_min * 2`
#[must_use]
pub fn compute_xp(totals: &LifetimeTotals) -> XpState {
    let xp = (totals.workouts as f64).mul_add(
        XP_PER_WORKOUT,
        totals
            .distance_km
            .mul_add(XP_PER_KM, totals.duration_min * XP_PER_MINUTE),
    );
    let level = (xp / XP_PER_LEVEL).floor() as u32;

    XpState {
        xp,
        level,
        next_level_xp: f64::from(level + 1) * XP_PER_LEVEL,
        progress_fraction: (xp % XP_PER_LEVEL) / XP_PER_LEVEL,
    }
}

/// Milestone badges unlocked by lifetime totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    /// 5 workouts logged
    StarterFiveWorkouts,
    /// 10 workouts logged
    TenWorkouts,
    /// 25 workouts logged
    WarriorTwentyFiveWorkouts,
    /// 20 km lifetime distance
    WalkerTwentyKm,
    /// 50 km lifetime distance
    FiftyKmMilestone,
    /// 100 km lifetime distance
    EliteHundredKm,
    /// 200 minutes lifetime duration
    TwoHundredMinutesActive,
    /// 500 minutes lifetime duration
    FiveHundredMinutesChampion,
    /// 1000 minutes lifetime duration
    ThousandMinutesLegend,
}

impl Achievement {
    /// Every badge the engine knows about, in display order
    pub const ALL: [Self; 9] = [
        Self::StarterFiveWorkouts,
        Self::TenWorkouts,
        Self::WarriorTwentyFiveWorkouts,
        Self::WalkerTwentyKm,
        Self::FiftyKmMilestone,
        Self::EliteHundredKm,
        Self::TwoHundredMinutesActive,
        Self::FiveHundredMinutesChampion,
        Self::ThousandMinutesLegend,
    ];

    /// Display title for the badge
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::StarterFiveWorkouts => "5 Workouts Starter",
            Self::TenWorkouts => "10 Workouts Completed",
            Self::WarriorTwentyFiveWorkouts => "25 Workouts Warrior",
            Self::WalkerTwentyKm => "20 KM Walker",
            Self::FiftyKmMilestone => "50 KM Milestone",
            Self::EliteHundredKm => "100 KM Elite",
            Self::TwoHundredMinutesActive => "200 Minutes Active",
            Self::FiveHundredMinutesChampion => "500 Minutes Champion",
            Self::ThousandMinutesLegend => "1000 Minutes Legend",
        }
    }

    /// Whether the badge is unlocked by the given totals
    #[must_use]
    pub fn is_unlocked(self, totals: &LifetimeTotals) -> bool {
        match self {
            Self::StarterFiveWorkouts => totals.workouts >= 5,
            Self::TenWorkouts => totals.workouts >= 10,
            Self::WarriorTwentyFiveWorkouts => totals.workouts >= 25,
            Self::WalkerTwentyKm => totals.distance_km >= 20.0,
            Self::FiftyKmMilestone => totals.distance_km >= 50.0,
            Self::EliteHundredKm => totals.distance_km >= 100.0,
            Self::TwoHundredMinutesActive => totals.duration_min >= 200.0,
            Self::FiveHundredMinutesChampion => totals.duration_min >= 500.0,
            Self::ThousandMinutesLegend => totals.duration_min >= 1000.0,
        }
    }
}

/// Badges unlocked by the given totals, in display order
#[must_use]
pub fn unlocked_achievements(totals: &LifetimeTotals) -> Vec<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|badge| badge.is_unlocked(totals))
        .collect()
}
