// ABOUTME: Key frames and the single representative repetition located in a video
// ABOUTME: Includes deadlift safety flags and the structured reasons no repetition was found
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::features::FeatureFrame;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Structural role of a key frame within a repetition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFrameRole {
    /// Starting position
    Inicio,
    /// Bottom or contracted position
    Peak,
    /// Fully extended end position
    Lockout,
}

impl KeyFrameRole {
    /// Uppercase label drawn on key-frame images
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inicio => "INICIO",
            Self::Peak => "PEAK",
            Self::Lockout => "LOCKOUT",
        }
    }

    /// Serialized name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inicio => "inicio",
            Self::Peak => "peak",
            Self::Lockout => "lockout",
        }
    }
}

impl fmt::Display for KeyFrameRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature frame tagged with its role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFrame<F> {
    /// Role within the repetition
    pub role: KeyFrameRole,
    /// The located frame with every angle field
    pub frame: FeatureFrame<F>,
}

/// Deadlift safety flags evaluated at the starting frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SafetyFlags {
    /// Shoulder sits lower on screen than the hip
    pub shoulder_below_hip: bool,
    /// Signed torso inclination is negative
    pub torso_angle_negative: bool,
    /// Torso inclination is in the near-horizontal band
    pub torso_near_horizontal: bool,
}

impl SafetyFlags {
    /// Whether any flag is raised
    #[must_use]
    pub const fn any(&self) -> bool {
        self.shoulder_below_hip || self.torso_angle_negative || self.torso_near_horizontal
    }
}

/// The single representative repetition of a video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repetition<F> {
    /// Located key frames in role order (starting role first)
    ///
    /// Timestamps usually increase, but the squat's inicio is the highest hip
    /// anywhere in the series and may follow its peak.
    pub key_frames: Vec<KeyFrame<F>>,
    /// Travel of the driving Y signal between the key frames (normalized units)
    pub amplitude: f64,
    /// Seconds between the key frames
    pub duration_secs: f64,
    /// Deadlift only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_flags: Option<SafetyFlags>,
    /// Squat only: hip reached knee height at the bottom
    #[serde(
        default,
        alias = "rompioParalelo",
        skip_serializing_if = "Option::is_none"
    )]
    pub broke_parallel: Option<bool>,
}

impl<F> Repetition<F> {
    /// Key frame with the given role
    #[must_use]
    pub fn key_frame(&self, role: KeyFrameRole) -> Option<&KeyFrame<F>> {
        self.key_frames.iter().find(|key| key.role == role)
    }
}

/// Why no repetition could be located in a validated frame series
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoRepetition {
    /// Too few valid frames to search
    #[error("only {found} valid frames, at least {required} required")]
    InsufficientFrames {
        /// Valid frames available
        found: usize,
        /// Minimum needed
        required: usize,
    },
    /// The restricted search window held no frames
    #[error("search window is empty")]
    EmptySearchWindow,
    /// The movement was too small to be a repetition
    #[error("movement amplitude {amplitude:.3} below threshold {threshold:.3}")]
    InsufficientAmplitude {
        /// Measured travel
        amplitude: f64,
        /// Noise floor
        threshold: f64,
    },
}
