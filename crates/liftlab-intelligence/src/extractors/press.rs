// ABOUTME: Overhead press feature extraction: elbow, torso and alignment angles plus wrist/elbow heights
// ABOUTME: Frames outside the elbow plausibility window are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::FrameFeatureExtractor;
use crate::config::{PressWindows, TechniqueConfig};
use crate::geometry::{angle_at, torso_inclination, VerticalReading};
use crate::side_selection::{DepthDifferenceSelector, DepthPair, SideSelector};
use liftlab_core::models::{FeatureFrame, PressFeatures, RawFrame};
use tracing::trace;

/// Overhead press frame extractor
#[derive(Debug)]
pub struct PressExtractor {
    windows: PressWindows,
    selector: Box<dyn SideSelector>,
}

impl PressExtractor {
    /// Create an extractor with the default side selector
    #[must_use]
    pub fn new(windows: PressWindows) -> Self {
        Self::with_selector(windows, Box::new(DepthDifferenceSelector))
    }

    /// Create an extractor with a custom side selector
    #[must_use]
    pub fn with_selector(windows: PressWindows, selector: Box<dyn SideSelector>) -> Self {
        Self { windows, selector }
    }

    /// Create an extractor from the technique configuration
    #[must_use]
    pub fn from_config(config: &TechniqueConfig) -> Self {
        Self::new(config.validity.press.clone())
    }
}

impl Default for PressExtractor {
    fn default() -> Self {
        Self::new(PressWindows::default())
    }
}

impl FrameFeatureExtractor for PressExtractor {
    type Features = PressFeatures;

    const VERTICAL_READING: VerticalReading = VerticalReading::Ninety;

    fn extract(&self, frame: &RawFrame, frame_index: usize) -> Option<FeatureFrame<PressFeatures>> {
        let side = self.selector.select(&frame.landmarks, DepthPair::ElbowWrist);
        let chain = frame.landmarks.side(side);

        let elbow_angle = angle_at(chain.shoulder, chain.elbow, chain.wrist);
        if !self.windows.elbow.contains(elbow_angle) {
            trace!(frame_index, elbow_angle, "press frame outside plausibility window");
            return None;
        }

        Some(FeatureFrame {
            timestamp: frame.timestamp,
            frame_index,
            side,
            features: PressFeatures {
                elbow_angle,
                // Measured hip to shoulder; unsigned, so the magnitude matches the squat reading
                torso_angle: torso_inclination(
                    chain.hip,
                    chain.shoulder,
                    false,
                    Self::VERTICAL_READING,
                ),
                alignment_angle: angle_at(chain.ankle, chain.hip, chain.shoulder),
                wrist_y: chain.wrist.y,
                elbow_y: chain.elbow.y,
            },
        })
    }
}
