// ABOUTME: Pose landmark types consumed from the external detector
// ABOUTME: Landmark, fixed-size LandmarkSet, per-side joint selection and RawFrame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use crate::constants::landmarks::{
    LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_FOOT, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER,
    LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_FOOT, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER,
    RIGHT_WRIST,
};
use crate::errors::AppError;
use serde::{Deserialize, Serialize};

/// A single detected joint position
///
/// `x` and `y` are normalized to the frame (0-1, `y` grows downward),
/// `z` is the detector's relative depth proxy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Horizontal position (0 = left edge)
    pub x: f64,
    /// Vertical position (0 = top edge)
    pub y: f64,
    /// Relative depth
    #[serde(default)]
    pub z: f64,
}

impl Landmark {
    /// Create a landmark from its coordinates
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Complete set of 33 landmarks for one detection
///
/// The length invariant is enforced on construction, so fixed indices from
/// `constants::landmarks` are always in bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Landmark>", into = "Vec<Landmark>")]
pub struct LandmarkSet {
    points: Vec<Landmark>,
}

impl LandmarkSet {
    /// Get a landmark by index, `None` outside the scheme
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied()
    }

    /// The limb chain of one body side
    #[must_use]
    pub fn side(&self, side: BodySide) -> SideLandmarks {
        let [shoulder, elbow, wrist, hip, knee, ankle, _] = side.indices();
        SideLandmarks {
            shoulder: self.points[shoulder],
            elbow: self.points[elbow],
            wrist: self.points[wrist],
            hip: self.points[hip],
            knee: self.points[knee],
            ankle: self.points[ankle],
        }
    }
}

impl TryFrom<Vec<Landmark>> for LandmarkSet {
    type Error = AppError;

    fn try_from(points: Vec<Landmark>) -> Result<Self, Self::Error> {
        if points.len() != LANDMARK_COUNT {
            return Err(AppError::invalid_format(format!(
                "Invalid landmark count: {} (expected {LANDMARK_COUNT})",
                points.len()
            )));
        }
        Ok(Self { points })
    }
}

impl From<LandmarkSet> for Vec<Landmark> {
    fn from(set: LandmarkSet) -> Self {
        set.points
    }
}

/// Body side whose limb chain is used for a frame's angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySide {
    /// Athlete's left side
    Left,
    /// Athlete's right side
    Right,
}

impl BodySide {
    /// Landmark indices ordered shoulder, elbow, wrist, hip, knee, ankle, foot
    #[must_use]
    pub const fn indices(self) -> [usize; 7] {
        match self {
            Self::Left => [
                LEFT_SHOULDER,
                LEFT_ELBOW,
                LEFT_WRIST,
                LEFT_HIP,
                LEFT_KNEE,
                LEFT_ANKLE,
                LEFT_FOOT,
            ],
            Self::Right => [
                RIGHT_SHOULDER,
                RIGHT_ELBOW,
                RIGHT_WRIST,
                RIGHT_HIP,
                RIGHT_KNEE,
                RIGHT_ANKLE,
                RIGHT_FOOT,
            ],
        }
    }
}

/// Joints of one body side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideLandmarks {
    /// Shoulder
    pub shoulder: Landmark,
    /// Elbow
    pub elbow: Landmark,
    /// Wrist
    pub wrist: Landmark,
    /// Hip
    pub hip: Landmark,
    /// Knee
    pub knee: Landmark,
    /// Ankle
    pub ankle: Landmark,
}

/// One sampled instant of the video with its detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFrame {
    /// Seconds from the start of the video
    pub timestamp: f64,
    /// Detected landmarks
    pub landmarks: LandmarkSet,
}
