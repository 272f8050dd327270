// ABOUTME: Key-frame detection over validated feature series for each lift pattern
// ABOUTME: Two-phase extremum search (search, partition, search) yielding one representative repetition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Key-Frame Detectors
//!
//! Detection is a pure function of the ordered frame series: locate a global
//! extremum of the driving signal, split the series at it, then locate the
//! opposite extremum on one side of the split. The same input always yields
//! the same key frames, and ties resolve to the earliest frame.

use liftlab_core::models::{
    ExerciseFeatures, FeatureFrame, KeyFrame, KeyFrameRole, NoRepetition, Repetition,
};
use tracing::debug;

/// Deadlift detector
pub mod deadlift;
/// Overhead press detector
pub mod press;
/// Bent-over row detector
pub mod row;
/// Squat detector
pub mod squat;

pub use deadlift::DeadliftDetector;
pub use press::PressDetector;
pub use row::RowDetector;
pub use squat::SquatDetector;

/// Locates the single representative repetition in a feature series
pub trait KeyFrameDetector: Send + Sync {
    /// Feature set consumed
    type Features: ExerciseFeatures;

    /// Find the key frames and repetition metrics
    ///
    /// # Errors
    ///
    /// Returns `NoRepetition` when the series is too short, a search window
    /// is empty or the movement is rejected by an exercise-specific rule
    fn detect(
        &self,
        frames: &[FeatureFrame<Self::Features>],
    ) -> Result<Repetition<Self::Features>, NoRepetition>;
}

/// Fail with `InsufficientFrames` below the minimum series length
///
/// # Errors
///
/// Returns `NoRepetition::InsufficientFrames` when `found < required`
pub const fn require_frames(found: usize, required: usize) -> Result<(), NoRepetition> {
    if found < required {
        return Err(NoRepetition::InsufficientFrames { found, required });
    }
    Ok(())
}

/// Position of the smallest key, first occurrence on ties
///
/// Non-finite keys are skipped; `None` when no finite key exists.
pub fn index_of_min<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<usize> {
    extremum(items, key, |candidate, best| candidate < best)
}

/// Position of the largest key, first occurrence on ties
///
/// Non-finite keys are skipped; `None` when no finite key exists.
pub fn index_of_max<T>(items: &[T], key: impl Fn(&T) -> f64) -> Option<usize> {
    extremum(items, key, |candidate, best| candidate > best)
}

fn extremum<T>(
    items: &[T],
    key: impl Fn(&T) -> f64,
    better: impl Fn(f64, f64) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, item) in items.iter().enumerate() {
        let value = key(item);
        if !value.is_finite() {
            continue;
        }
        match best {
            Some((_, current)) if !better(value, current) => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

/// Tag a located frame with its role
pub(crate) fn locate<F: Clone>(role: KeyFrameRole, frame: &FeatureFrame<F>) -> KeyFrame<F> {
    debug!(
        role = %role,
        frame_index = frame.frame_index,
        timestamp = frame.timestamp,
        "located key frame"
    );
    KeyFrame {
        role,
        frame: frame.clone(),
    }
}

/// Seconds between two frames
pub(crate) fn duration_between<F>(a: &FeatureFrame<F>, b: &FeatureFrame<F>) -> f64 {
    (b.timestamp - a.timestamp).abs()
}
