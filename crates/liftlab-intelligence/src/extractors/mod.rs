// ABOUTME: Per-exercise frame feature extraction from raw landmark frames
// ABOUTME: Selects the measured body side, computes the angle set and drops implausible frames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Frame Feature Extractors
//!
//! One extractor per lift. A frame whose windowed angles fall outside the
//! plausibility windows is not returned at all; downstream code never sees a
//! flagged or partial frame.

use crate::geometry::VerticalReading;
use liftlab_core::models::{ExerciseFeatures, FeatureFrame, RawFrame};

/// Deadlift extractor
pub mod deadlift;
/// Overhead press extractor
pub mod press;
/// Bent-over row extractor
pub mod row;
/// Squat extractor
pub mod squat;

pub use deadlift::DeadliftExtractor;
pub use press::PressExtractor;
pub use row::RowExtractor;
pub use squat::SquatExtractor;

/// Turns a raw landmark frame into an exercise feature frame
pub trait FrameFeatureExtractor: Send + Sync {
    /// Feature set produced
    type Features: ExerciseFeatures;

    /// Torso convention of this exercise's `torso_angle`
    const VERTICAL_READING: VerticalReading;

    /// Extract the features of one frame, `None` when the frame is implausible
    fn extract(&self, frame: &RawFrame, frame_index: usize)
        -> Option<FeatureFrame<Self::Features>>;

    /// Extract every plausible frame, indexing by position in `frames`
    fn extract_series(&self, frames: &[RawFrame]) -> Vec<FeatureFrame<Self::Features>> {
        frames
            .iter()
            .enumerate()
            .filter_map(|(index, frame)| self.extract(frame, index))
            .collect()
    }
}
