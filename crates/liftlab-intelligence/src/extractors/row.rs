// ABOUTME: Bent-over row feature extraction: elbow, signed torso, knee and alignment angles
// ABOUTME: Frames outside the elbow plausibility window are dropped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::FrameFeatureExtractor;
use crate::config::{RowWindows, TechniqueConfig};
use crate::geometry::{angle_at, torso_inclination, VerticalReading};
use crate::side_selection::{DepthDifferenceSelector, DepthPair, SideSelector};
use liftlab_core::models::{FeatureFrame, RawFrame, RowFeatures};
use tracing::trace;

/// Bent-over row frame extractor
#[derive(Debug)]
pub struct RowExtractor {
    windows: RowWindows,
    selector: Box<dyn SideSelector>,
}

impl RowExtractor {
    /// Create an extractor with the default side selector
    #[must_use]
    pub fn new(windows: RowWindows) -> Self {
        Self::with_selector(windows, Box::new(DepthDifferenceSelector))
    }

    /// Create an extractor with a custom side selector
    #[must_use]
    pub fn with_selector(windows: RowWindows, selector: Box<dyn SideSelector>) -> Self {
        Self { windows, selector }
    }

    /// Create an extractor from the technique configuration
    #[must_use]
    pub fn from_config(config: &TechniqueConfig) -> Self {
        Self::new(config.validity.row.clone())
    }
}

impl Default for RowExtractor {
    fn default() -> Self {
        Self::new(RowWindows::default())
    }
}

impl FrameFeatureExtractor for RowExtractor {
    type Features = RowFeatures;

    // Upright reads 0, so a typical hinged row torso reports 45-80 degrees
    const VERTICAL_READING: VerticalReading = VerticalReading::Zero;

    fn extract(&self, frame: &RawFrame, frame_index: usize) -> Option<FeatureFrame<RowFeatures>> {
        let side = self.selector.select(&frame.landmarks, DepthPair::ElbowWrist);
        let chain = frame.landmarks.side(side);

        let elbow_angle = angle_at(chain.shoulder, chain.elbow, chain.wrist);
        if !self.windows.elbow.contains(elbow_angle) {
            trace!(frame_index, elbow_angle, "row frame outside plausibility window");
            return None;
        }

        Some(FeatureFrame {
            timestamp: frame.timestamp,
            frame_index,
            side,
            features: RowFeatures {
                elbow_angle,
                torso_angle: torso_inclination(
                    chain.shoulder,
                    chain.hip,
                    true,
                    Self::VERTICAL_READING,
                ),
                knee_angle: angle_at(chain.hip, chain.knee, chain.ankle),
                alignment_angle: angle_at(chain.knee, chain.hip, chain.shoulder),
                wrist_y: chain.wrist.y,
                shoulder_y: chain.shoulder.y,
            },
        })
    }
}
