// ABOUTME: Bent-over row key-frame detection: lowest wrist as inicio, highest wrist afterwards as peak
// ABOUTME: Arms-extended start is found globally, the contraction in the frames that follow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::{duration_between, index_of_max, index_of_min, locate, require_frames, KeyFrameDetector};
use crate::config::TechniqueConfig;
use liftlab_core::constants::thresholds::MIN_VALID_FRAMES;
use liftlab_core::models::{FeatureFrame, KeyFrameRole, NoRepetition, Repetition, RowFeatures};

/// Bent-over row detector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDetector {
    min_valid_frames: usize,
}

impl RowDetector {
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

impl Default for RowDetector {
    fn default() -> Self {
        Self::new(MIN_VALID_FRAMES)
    }
}

impl KeyFrameDetector for RowDetector {
    type Features = RowFeatures;

    fn detect(
        &self,
        frames: &[FeatureFrame<RowFeatures>],
    ) -> Result<Repetition<RowFeatures>, NoRepetition> {
        require_frames(frames.len(), self.min_valid_frames)?;

        let extended = index_of_max(frames, |frame| frame.features.wrist_y)
            .ok_or(NoRepetition::EmptySearchWindow)?;
        let after = &frames[extended + 1..];
        let contracted = index_of_min(after, |frame| frame.features.wrist_y)
            .ok_or(NoRepetition::EmptySearchWindow)?;

        let start = &frames[extended];
        let peak = &after[contracted];

        Ok(Repetition {
            key_frames: vec![
                locate(KeyFrameRole::Inicio, start),
                locate(KeyFrameRole::Peak, peak),
            ],
            amplitude: (start.features.wrist_y - peak.features.wrist_y).abs(),
            duration_secs: duration_between(start, peak),
            safety_flags: None,
            broke_parallel: None,
        })
    }
}
