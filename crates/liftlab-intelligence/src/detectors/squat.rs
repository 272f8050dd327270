// ABOUTME: Squat key-frame detection: topmost hip as inicio, bottommost hip as peak
// ABOUTME: Search restricted to the knee search window; peak also decides whether parallel was broken
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::{duration_between, index_of_max, index_of_min, locate, require_frames, KeyFrameDetector};
use crate::config::{AngleWindow, TechniqueConfig};
use liftlab_core::constants::thresholds::{self, squat};
use liftlab_core::models::{FeatureFrame, KeyFrameRole, NoRepetition, Repetition, SquatFeatures};

/// Squat detector
#[derive(Debug, Clone, PartialEq)]
pub struct SquatDetector {
    min_valid_frames: usize,
    knee_search: AngleWindow,
    parallel_tolerance: f64,
}

impl SquatDetector {
    /// Create a detector with explicit thresholds
    #[must_use]
    pub const fn new(min_valid_frames: usize, knee_search: AngleWindow, parallel_tolerance: f64) -> Self {
        Self {
            min_valid_frames,
            knee_search,
            parallel_tolerance,
        }
    }

    /// Create a detector from the technique configuration
    #[must_use]
    pub const fn from_config(config: &TechniqueConfig) -> Self {
        Self::new(
            config.detection.min_valid_frames,
            config.validity.squat.knee_search,
            config.detection.parallel_tolerance,
        )
    }

    /// Hip at or below knee height, within the tolerance
    #[must_use]
    pub fn broke_parallel(&self, bottom: &SquatFeatures) -> bool {
        bottom.hip_y - bottom.knee_y > -self.parallel_tolerance
    }
}

impl Default for SquatDetector {
    fn default() -> Self {
        Self::new(
            thresholds::MIN_VALID_FRAMES,
            squat::KNEE_SEARCH.into(),
            squat::PARALLEL_TOLERANCE,
        )
    }
}

impl KeyFrameDetector for SquatDetector {
    type Features = SquatFeatures;

    fn detect(
        &self,
        frames: &[FeatureFrame<SquatFeatures>],
    ) -> Result<Repetition<SquatFeatures>, NoRepetition> {
        require_frames(frames.len(), self.min_valid_frames)?;

        let candidates: Vec<&FeatureFrame<SquatFeatures>> = frames
            .iter()
            .filter(|frame| self.knee_search.contains(frame.features.knee_angle))
            .collect();

        let top = index_of_min(&candidates, |frame| frame.features.hip_y)
            .ok_or(NoRepetition::EmptySearchWindow)?;
        let bottom = index_of_max(&candidates, |frame| frame.features.hip_y)
            .ok_or(NoRepetition::EmptySearchWindow)?;
        let (start, peak) = (candidates[top], candidates[bottom]);

        Ok(Repetition {
            key_frames: vec![
                locate(KeyFrameRole::Inicio, start),
                locate(KeyFrameRole::Peak, peak),
            ],
            amplitude: (peak.features.hip_y - start.features.hip_y).abs(),
            duration_secs: duration_between(start, peak),
            safety_flags: None,
            broke_parallel: Some(self.broke_parallel(&peak.features)),
        })
    }
}
