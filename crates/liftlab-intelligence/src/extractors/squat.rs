// ABOUTME: Squat feature extraction: knee, alignment, hip flexion and torso angles plus hip/knee heights
// ABOUTME: Frames outside the knee or alignment plausibility windows are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::FrameFeatureExtractor;
use crate::config::{SquatWindows, TechniqueConfig};
use crate::geometry::{angle_at, flexion_bearing_angle, torso_inclination, VerticalReading};
use crate::side_selection::{DepthDifferenceSelector, DepthPair, SideSelector};
use liftlab_core::models::{FeatureFrame, RawFrame, SquatFeatures};
use tracing::trace;

/// Squat frame extractor
#[derive(Debug)]
pub struct SquatExtractor {
    windows: SquatWindows,
    selector: Box<dyn SideSelector>,
}

impl SquatExtractor {
    /// Create an extractor with the default side selector
    #[must_use]
    pub fn new(windows: SquatWindows) -> Self {
        Self::with_selector(windows, Box::new(DepthDifferenceSelector))
    }

    /// Create an extractor with a custom side selector
    #[must_use]
    pub fn with_selector(windows: SquatWindows, selector: Box<dyn SideSelector>) -> Self {
        Self { windows, selector }
    }

    /// Create an extractor from the technique configuration
    #[must_use]
    pub fn from_config(config: &TechniqueConfig) -> Self {
        Self::new(config.validity.squat.clone())
    }
}

impl Default for SquatExtractor {
    fn default() -> Self {
        Self::new(SquatWindows::default())
    }
}

impl FrameFeatureExtractor for SquatExtractor {
    type Features = SquatFeatures;

    const VERTICAL_READING: VerticalReading = VerticalReading::Ninety;

    fn extract(&self, frame: &RawFrame, frame_index: usize) -> Option<FeatureFrame<SquatFeatures>> {
        let side = self.selector.select(&frame.landmarks, DepthPair::HipKnee);
        let chain = frame.landmarks.side(side);

        let knee_angle = angle_at(chain.hip, chain.knee, chain.ankle);
        let alignment_angle = flexion_bearing_angle(chain.shoulder, chain.hip, chain.ankle);

        if !self.windows.knee.contains(knee_angle) || !self.windows.alignment.contains(alignment_angle)
        {
            trace!(
                frame_index,
                knee_angle,
                alignment_angle,
                "squat frame outside plausibility window"
            );
            return None;
        }

        Some(FeatureFrame {
            timestamp: frame.timestamp,
            frame_index,
            side,
            features: SquatFeatures {
                knee_angle,
                alignment_angle,
                hip_flexion_angle: flexion_bearing_angle(chain.shoulder, chain.hip, chain.knee),
                torso_angle: torso_inclination(
                    chain.shoulder,
                    chain.hip,
                    false,
                    Self::VERTICAL_READING,
                ),
                hip_y: chain.hip.y,
                knee_y: chain.knee.y,
            },
        })
    }
}
