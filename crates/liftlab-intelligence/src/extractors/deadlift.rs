// ABOUTME: Deadlift feature extraction: knee, hip, alignment and signed torso angles plus hip/shoulder heights
// ABOUTME: Frames outside the knee or hip plausibility windows are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::FrameFeatureExtractor;
use crate::config::{DeadliftWindows, TechniqueConfig};
use crate::geometry::{angle_at, torso_inclination, VerticalReading};
use crate::side_selection::{DepthDifferenceSelector, DepthPair, SideSelector};
use liftlab_core::models::{DeadliftFeatures, FeatureFrame, RawFrame};
use tracing::trace;

/// Deadlift frame extractor
#[derive(Debug)]
pub struct DeadliftExtractor {
    windows: DeadliftWindows,
    selector: Box<dyn SideSelector>,
}

impl DeadliftExtractor {
    /// Create an extractor with the default side selector
    #[must_use]
    pub fn new(windows: DeadliftWindows) -> Self {
        Self::with_selector(windows, Box::new(DepthDifferenceSelector))
    }

    /// Create an extractor with a custom side selector
    #[must_use]
    pub fn with_selector(windows: DeadliftWindows, selector: Box<dyn SideSelector>) -> Self {
        Self { windows, selector }
    }

    /// Create an extractor from the technique configuration
    #[must_use]
    pub fn from_config(config: &TechniqueConfig) -> Self {
        Self::new(config.validity.deadlift.clone())
    }
}

impl Default for DeadliftExtractor {
    fn default() -> Self {
        Self::new(DeadliftWindows::default())
    }
}

impl FrameFeatureExtractor for DeadliftExtractor {
    type Features = DeadliftFeatures;

    // Torso measured from horizontal, so a flat back reads near 0. The
    // near-horizontal safety band (0-20 degrees) depends on this; read from
    // vertical the same band would flag an upright torso instead.
    const VERTICAL_READING: VerticalReading = VerticalReading::Ninety;

    fn extract(
        &self,
        frame: &RawFrame,
        frame_index: usize,
    ) -> Option<FeatureFrame<DeadliftFeatures>> {
        let side = self.selector.select(&frame.landmarks, DepthPair::HipKnee);
        let chain = frame.landmarks.side(side);

        let knee_angle = angle_at(chain.hip, chain.knee, chain.ankle);
        let hip_angle = angle_at(chain.shoulder, chain.hip, chain.knee);

        if !self.windows.knee.contains(knee_angle) || !self.windows.hip.contains(hip_angle) {
            trace!(
                frame_index,
                knee_angle,
                hip_angle,
                "deadlift frame outside plausibility window"
            );
            return None;
        }

        Some(FeatureFrame {
            timestamp: frame.timestamp,
            frame_index,
            side,
            features: DeadliftFeatures {
                knee_angle,
                hip_angle,
                alignment_angle: angle_at(chain.ankle, chain.hip, chain.shoulder),
                torso_angle: torso_inclination(
                    chain.shoulder,
                    chain.hip,
                    true,
                    Self::VERTICAL_READING,
                ),
                hip_y: chain.hip.y,
                shoulder_y: chain.shoulder.y,
            },
        })
    }
}
