// ABOUTME: Strategy for choosing which body side's limb chain measures a frame
// ABOUTME: Default rule prefers the side whose joint pair has the smaller depth difference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use liftlab_core::models::{BodySide, LandmarkSet, SideLandmarks};
use std::fmt::Debug;

/// Joint pair whose depth difference is compared between sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthPair {
    /// Hip and knee (lower-body lifts)
    HipKnee,
    /// Elbow and wrist (upper-body lifts)
    ElbowWrist,
}

impl DepthPair {
    fn depth_difference(self, chain: &SideLandmarks) -> f64 {
        match self {
            Self::HipKnee => (chain.hip.z - chain.knee.z).abs(),
            Self::ElbowWrist => (chain.elbow.z - chain.wrist.z).abs(),
        }
    }
}

/// Picks the limb chain used for a frame's angles
///
/// Implementations must be deterministic for a given landmark set.
pub trait SideSelector: Debug + Send + Sync {
    /// Side to measure on
    fn select(&self, landmarks: &LandmarkSet, pair: DepthPair) -> BodySide;
}

/// Treats the chain whose joint pair lies flatter in depth as camera-facing
///
/// A visibility proxy, not an occlusion test. Ties resolve to the left side.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthDifferenceSelector;

impl SideSelector for DepthDifferenceSelector {
    fn select(&self, landmarks: &LandmarkSet, pair: DepthPair) -> BodySide {
        let left = pair.depth_difference(&landmarks.side(BodySide::Left));
        let right = pair.depth_difference(&landmarks.side(BodySide::Right));
        if right < left {
            BodySide::Right
        } else {
            BodySide::Left
        }
    }
}
