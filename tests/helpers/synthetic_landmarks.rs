// ABOUTME: Synthetic pose-landmark generator for automated technique-pipeline testing
// ABOUTME: Creates side-view squat, deadlift, press and row repetitions with seeded depth jitter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use liftlab_core::constants::landmarks::{LANDMARK_COUNT, NOSE};
use liftlab_core::models::{BodySide, Landmark, LandmarkSet, RawFrame};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Default time between generated frames in seconds
pub const FRAME_STEP_SECS: f64 = 0.1;

/// Image-plane joint positions of one limb chain, copied to both body sides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidePose {
    pub shoulder: (f64, f64),
    pub elbow: (f64, f64),
    pub wrist: (f64, f64),
    pub hip: (f64, f64),
    pub knee: (f64, f64),
    pub ankle: (f64, f64),
    pub foot: (f64, f64),
}

impl SidePose {
    fn joints(&self) -> [(f64, f64); 7] {
        [
            self.shoulder,
            self.elbow,
            self.wrist,
            self.hip,
            self.knee,
            self.ankle,
            self.foot,
        ]
    }

    /// Squat pose at depth `depth` in [0, 1]; the hip moves between `top_hip_y` and `bottom_hip_y`
    #[must_use]
    pub fn squat(depth: f64, top_hip_y: f64, bottom_hip_y: f64) -> Self {
        let hip = (
            0.10f64.mul_add(-depth, 0.50),
            (bottom_hip_y - top_hip_y).mul_add(depth, top_hip_y),
        );
        let shoulder = (0.12f64.mul_add(depth, hip.0), 0.05f64.mul_add(depth, hip.1 - 0.30));
        Self {
            shoulder,
            elbow: (shoulder.0 + 0.05, shoulder.1 + 0.12),
            wrist: (shoulder.0 + 0.10, shoulder.1 + 0.05),
            hip,
            knee: (0.60, 0.70),
            ankle: (0.50, 0.90),
            foot: (0.56, 0.92),
        }
    }

    /// Deadlift pose at extension `extension` in [0, 1] (0 = floor, 1 = lockout)
    #[must_use]
    pub fn deadlift(extension: f64) -> Self {
        let e = extension;
        let shoulder = (0.14f64.mul_add(-e, 0.64), 0.26f64.mul_add(-e, 0.46));
        Self {
            shoulder,
            elbow: (shoulder.0, shoulder.1 + 0.14),
            wrist: (shoulder.0, shoulder.1 + 0.28),
            hip: (0.10f64.mul_add(e, 0.40), 0.10f64.mul_add(-e, 0.60)),
            knee: (0.06f64.mul_add(-e, 0.56), 0.02f64.mul_add(-e, 0.72)),
            ankle: (0.50, 0.90),
            foot: (0.56, 0.92),
        }
    }

    /// Overhead press pose at progress `progress` in [0, 1] (0 = rack, 1 = lockout)
    #[must_use]
    pub fn press(progress: f64) -> Self {
        let p = progress;
        Self {
            shoulder: (0.50, 0.30),
            elbow: (0.06f64.mul_add(-p, 0.56), 0.22f64.mul_add(-p, 0.38)),
            wrist: (0.10f64.mul_add(-p, 0.60), 0.24f64.mul_add(-p, 0.26)),
            hip: (0.50, 0.60),
            knee: (0.50, 0.75),
            ankle: (0.50, 0.90),
            foot: (0.56, 0.92),
        }
    }

    /// Bent-over row pose at pull `pull` in [0, 1] (0 = arms extended, 1 = bar at torso)
    #[must_use]
    pub fn row(pull: f64) -> Self {
        let q = pull;
        Self {
            shoulder: (0.72, 0.42),
            elbow: (0.10f64.mul_add(-q, 0.72), 0.06f64.mul_add(-q, 0.56)),
            wrist: (0.06f64.mul_add(-q, 0.72), 0.10f64.mul_add(-q, 0.70)),
            hip: (0.50, 0.55),
            knee: (0.54, 0.72),
            ankle: (0.50, 0.90),
            foot: (0.56, 0.92),
        }
    }
}

/// Position in a there-and-back repetition: 0 at both ends, 1 in the middle
#[must_use]
pub fn triangle(index: usize, frames: usize) -> f64 {
    if frames < 2 {
        return 0.0;
    }
    let phase = 2.0 * index as f64 / (frames - 1) as f64;
    1.0 - (phase - 1.0).abs()
}

/// Builder for synthetic landmark tracks
///
/// Joint depth (`z`) gets seeded jitter so side selection is exercised, while
/// image-plane positions stay exact unless `with_jitter` is set.
#[derive(Debug, Clone)]
pub struct SyntheticPoseBuilder {
    #[allow(dead_code)]
    seed: u64,
    rng: ChaCha8Rng,
    jitter: f64,
    step_secs: f64,
}

impl SyntheticPoseBuilder {
    /// Create new builder with deterministic seed for reproducibility
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            jitter: 0.0,
            step_secs: FRAME_STEP_SECS,
        }
    }

    /// Add uniform image-plane noise of up to `amount` to every joint
    #[must_use]
    pub fn with_jitter(mut self, amount: f64) -> Self {
        self.jitter = amount;
        self
    }

    /// Change the time between frames
    #[must_use]
    pub fn with_step(mut self, step_secs: f64) -> Self {
        self.step_secs = step_secs;
        self
    }

    /// Landmark set with `pose` on both sides
    pub fn landmarks(&mut self, pose: &SidePose) -> LandmarkSet {
        let mut points = vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        let (head_x, head_y) = pose.shoulder;
        points[NOSE] = Landmark::new(head_x, head_y - 0.10, 0.0);

        for side in [BodySide::Left, BodySide::Right] {
            let side_offset = if side == BodySide::Left { -0.05 } else { 0.05 };
            for (index, (x, y)) in side.indices().into_iter().zip(pose.joints()) {
                let (dx, dy) = self.noise();
                let z = side_offset + self.rng.gen_range(-0.01..0.01);
                points[index] = Landmark::new(x + dx, y + dy, z);
            }
        }
        LandmarkSet::try_from(points).unwrap()
    }

    /// Frames for a sequence of poses, timestamped at the builder's step
    pub fn frames(&mut self, poses: impl IntoIterator<Item = SidePose>) -> Vec<RawFrame> {
        let step = self.step_secs;
        poses
            .into_iter()
            .enumerate()
            .map(|(index, pose)| RawFrame {
                timestamp: index as f64 * step,
                landmarks: self.landmarks(&pose),
            })
            .collect()
    }

    /// One squat: the hip descends from `top_hip_y` to `bottom_hip_y` and back
    pub fn squat_rep(&mut self, frames: usize, top_hip_y: f64, bottom_hip_y: f64) -> Vec<RawFrame> {
        self.frames(
            (0..frames).map(|i| SidePose::squat(triangle(i, frames), top_hip_y, bottom_hip_y)),
        )
    }

    /// One deadlift: floor, lockout, floor
    pub fn deadlift_rep(&mut self, frames: usize) -> Vec<RawFrame> {
        self.frames((0..frames).map(|i| SidePose::deadlift(triangle(i, frames))))
    }

    /// One overhead press: rack, lockout, rack
    pub fn press_rep(&mut self, frames: usize) -> Vec<RawFrame> {
        self.frames((0..frames).map(|i| SidePose::press(triangle(i, frames))))
    }

    /// One bent-over row: extended, pulled, extended
    pub fn row_rep(&mut self, frames: usize) -> Vec<RawFrame> {
        self.frames((0..frames).map(|i| SidePose::row(triangle(i, frames))))
    }

    fn noise(&mut self) -> (f64, f64) {
        if self.jitter <= 0.0 {
            return (0.0, 0.0);
        }
        (
            self.rng.gen_range(-self.jitter..self.jitter),
            self.rng.gen_range(-self.jitter..self.jitter),
        )
    }
}
