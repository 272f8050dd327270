// ABOUTME: Deadlift key-frame detection: lowest hip as inicio, most upright shoulder afterwards as lockout
// ABOUTME: Rejects movements below the travel floor and raises torso safety flags at the start
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::{duration_between, index_of_max, index_of_min, locate, require_frames, KeyFrameDetector};
use crate::config::TechniqueConfig;
use liftlab_core::constants::thresholds::{self, deadlift};
use liftlab_core::models::{
    DeadliftFeatures, FeatureFrame, KeyFrameRole, NoRepetition, Repetition, SafetyFlags,
};
use tracing::debug;

/// Deadlift detector
#[derive(Debug, Clone, PartialEq)]
pub struct DeadliftDetector {
    min_valid_frames: usize,
    min_travel: f64,
    near_horizontal_max_deg: f64,
}

impl DeadliftDetector {
    /// Create a detector with explicit thresholds
    #[must_use]
    pub const fn new(min_valid_frames: usize, min_travel: f64, near_horizontal_max_deg: f64) -> Self {
        Self {
            min_valid_frames,
            min_travel,
            near_horizontal_max_deg,
        }
    }

    /// Create a detector from the technique configuration
    #[must_use]
    pub const fn from_config(config: &TechniqueConfig) -> Self {
        Self::new(
            config.detection.min_valid_frames,
            config.detection.deadlift_min_travel,
            config.detection.near_horizontal_max_deg,
        )
    }

    /// Safety flags for the starting position
    #[must_use]
    pub fn safety_flags(&self, start: &DeadliftFeatures) -> SafetyFlags {
        SafetyFlags {
            shoulder_below_hip: start.shoulder_y > start.hip_y,
            torso_angle_negative: start.torso_angle < 0.0,
            torso_near_horizontal: (0.0..self.near_horizontal_max_deg).contains(&start.torso_angle),
        }
    }
}

impl Default for DeadliftDetector {
    fn default() -> Self {
        Self::new(
            thresholds::MIN_VALID_FRAMES,
            deadlift::MIN_TRAVEL,
            deadlift::NEAR_HORIZONTAL_MAX_DEG,
        )
    }
}

impl KeyFrameDetector for DeadliftDetector {
    type Features = DeadliftFeatures;

    fn detect(
        &self,
        frames: &[FeatureFrame<DeadliftFeatures>],
    ) -> Result<Repetition<DeadliftFeatures>, NoRepetition> {
        require_frames(frames.len(), self.min_valid_frames)?;

        let bottom = index_of_max(frames, |frame| frame.features.hip_y)
            .ok_or(NoRepetition::EmptySearchWindow)?;
        let after = &frames[bottom + 1..];
        let upright = index_of_min(after, |frame| frame.features.shoulder_y)
            .ok_or(NoRepetition::EmptySearchWindow)?;

        let start = &frames[bottom];
        let lockout = &after[upright];

        let hip_travel = (start.features.hip_y - lockout.features.hip_y).abs();
        let shoulder_travel = (start.features.shoulder_y - lockout.features.shoulder_y).abs();
        let amplitude = hip_travel.max(shoulder_travel);
        if amplitude < self.min_travel {
            debug!(
                hip_travel,
                shoulder_travel,
                threshold = self.min_travel,
                "deadlift movement below travel floor"
            );
            return Err(NoRepetition::InsufficientAmplitude {
                amplitude,
                threshold: self.min_travel,
            });
        }

        Ok(Repetition {
            key_frames: vec![
                locate(KeyFrameRole::Inicio, start),
                locate(KeyFrameRole::Lockout, lockout),
            ],
            amplitude,
            duration_secs: duration_between(start, lockout),
            safety_flags: Some(self.safety_flags(&start.features)),
            broke_parallel: None,
        })
    }
}
