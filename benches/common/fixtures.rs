// ABOUTME: Benchmark fixtures generating side-view landmark tracks
// ABOUTME: Deterministic squat and press repetitions sized for extraction and detection benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! Benchmark fixtures for generating landmark tracks.

use liftlab_core::constants::landmarks::LANDMARK_COUNT;
use liftlab_core::models::{BodySide, Landmark, LandmarkSet, RawFrame};

/// Seconds between generated frames
pub const FRAME_STEP_SECS: f64 = 0.1;

/// Predefined track lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum TrackLength {
    /// A short clip (30 frames)
    Short,
    /// The default sampling cap (150 frames)
    Capped,
    /// Long clip used for stress runs (600 frames)
    Long,
}

impl TrackLength {
    #[must_use]
    pub const fn frames(self) -> usize {
        match self {
            Self::Short => 30,
            Self::Capped => 150,
            Self::Long => 600,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Capped => "capped",
            Self::Long => "long",
        }
    }
}

/// 0 at both ends of the track, 1 in the middle
#[allow(clippy::cast_precision_loss)]
fn phase(index: usize, frames: usize) -> f64 {
    if frames < 2 {
        return 0.0;
    }
    1.0 - (2.0 * index as f64 / (frames - 1) as f64 - 1.0).abs()
}

/// Landmark set with the seven chain joints on both sides
fn landmarks(joints: [(f64, f64); 7], index: usize) -> LandmarkSet {
    let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
    for (side, depth) in [(BodySide::Left, -0.05), (BodySide::Right, 0.05)] {
        // Alternate which side faces the camera so both selector branches run
        let depth = if index % 2 == 0 { depth } else { -depth };
        for (point, (x, y)) in side.indices().into_iter().zip(joints) {
            points[point] = Landmark::new(x, y, depth);
        }
    }
    LandmarkSet::try_from(points).unwrap()
}

#[allow(clippy::cast_precision_loss)]
fn track(length: TrackLength, pose: impl Fn(f64) -> [(f64, f64); 7]) -> Vec<RawFrame> {
    let frames = length.frames();
    (0..frames)
        .map(|index| RawFrame {
            timestamp: index as f64 * FRAME_STEP_SECS,
            landmarks: landmarks(pose(phase(index, frames)), index),
        })
        .collect()
}

/// Squat track: the hip travels from 0.3 to 0.7
#[must_use]
pub fn squat_track(length: TrackLength) -> Vec<RawFrame> {
    track(length, |depth| {
        let hip = (0.10f64.mul_add(-depth, 0.50), 0.4f64.mul_add(depth, 0.3));
        let shoulder = (0.12f64.mul_add(depth, hip.0), 0.05f64.mul_add(depth, hip.1 - 0.30));
        [
            shoulder,
            (shoulder.0 + 0.05, shoulder.1 + 0.12),
            (shoulder.0 + 0.10, shoulder.1 + 0.05),
            hip,
            (0.60, 0.70),
            (0.50, 0.90),
            (0.56, 0.92),
        ]
    })
}

/// Overhead press track: rack, lockout, rack
#[must_use]
pub fn press_track(length: TrackLength) -> Vec<RawFrame> {
    track(length, |p| {
        [
            (0.50, 0.30),
            (0.06f64.mul_add(-p, 0.56), 0.22f64.mul_add(-p, 0.38)),
            (0.10f64.mul_add(-p, 0.60), 0.24f64.mul_add(-p, 0.26)),
            (0.50, 0.60),
            (0.50, 0.75),
            (0.50, 0.90),
            (0.56, 0.92),
        ]
    })
}
