// ABOUTME: Error types for the derived-metrics engine
// ABOUTME: Every failure here is a synchronous input-validation failure; nothing is retried
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Engine error types.
//!
//! The engine has no I/O of its own, so every error is a pure-function
//! input-validation failure reported synchronously to the caller. Callers
//! surface these as user-facing states ("need more data") rather than
//! treating them as fatal.

use thiserror::Error;

/// Errors produced by the derived-metrics engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Too few valid samples to fit a trend line without overfitting noise
    #[error("insufficient data for trend fit: need at least {required} samples, got {actual}")]
    InsufficientData {
        /// Minimum number of valid samples required
        required: usize,
        /// Number of valid samples actually supplied
        actual: usize,
    },

    /// Trend series has no day-to-day variation to regress over
    #[error("cannot fit trend: zero variance in elapsed days")]
    ZeroVariance,

    /// Goal-type label not recognized by the progress engine; the caller
    /// should treat the goal's current value as undefined rather than guess
    #[error("unrecognized goal type: {0}")]
    InvalidGoalType(String),
}

/// Convenience result alias used throughout the engine
pub type EngineResult<T> = Result<T, EngineError>;
