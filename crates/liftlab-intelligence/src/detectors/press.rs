// ABOUTME: Overhead press key-frame detection: highest wrist as lockout, lowest wrist before it as inicio
// ABOUTME: Lockout is located first and the start is searched for in the frames preceding it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::{duration_between, index_of_max, index_of_min, locate, require_frames, KeyFrameDetector};
use crate::config::TechniqueConfig;
use liftlab_core::constants::thresholds::MIN_VALID_FRAMES;
use liftlab_core::models::{FeatureFrame, KeyFrameRole, NoRepetition, PressFeatures, Repetition};

/// Overhead press detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PressDetector {
    min_valid_frames: usize,
}

impl PressDetector {
    /// Create a detector with an explicit frame floor
    #[must_use]
    pub const fn new(min_valid_frames: usize) -> Self {
        Self { min_valid_frames }
    }

    /// Create a detector from the technique configuration
    #[must_use]
    pub const fn from_config(config: &TechniqueConfig) -> Self {
        Self::new(config.detection.min_valid_frames)
    }
}

impl Default for PressDetector {
    fn default() -> Self {
        Self::new(MIN_VALID_FRAMES)
    }
}

impl KeyFrameDetector for PressDetector {
    type Features = PressFeatures;

    fn detect(
        &self,
        frames: &[FeatureFrame<PressFeatures>],
    ) -> Result<Repetition<PressFeatures>, NoRepetition> {
        require_frames(frames.len(), self.min_valid_frames)?;

        let top = index_of_min(frames, |frame| frame.features.wrist_y)
            .ok_or(NoRepetition::EmptySearchWindow)?;
        let before = &frames[..top];
        let bottom = index_of_max(before, |frame| frame.features.wrist_y)
            .ok_or(NoRepetition::EmptySearchWindow)?;

        let start = &before[bottom];
        let lockout = &frames[top];

        Ok(Repetition {
            key_frames: vec![
                locate(KeyFrameRole::Inicio, start),
                locate(KeyFrameRole::Lockout, lockout),
            ],
            amplitude: (start.features.wrist_y - lockout.features.wrist_y).abs(),
            duration_secs: duration_between(start, lockout),
            safety_flags: None,
            broke_parallel: None,
        })
    }
}
