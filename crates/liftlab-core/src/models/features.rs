// ABOUTME: Per-frame feature sets computed from pose landmarks for each lift pattern
// ABOUTME: Angles in degrees at 0.1 precision, Y positions normalized with larger values lower on screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::analysis::{AnalysisOutcome, ExerciseOutcome};
use super::exercise::Exercise;
use super::landmark::BodySide;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Exercise-specific feature set carried by a `FeatureFrame`
pub trait ExerciseFeatures: Debug + Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync {
    /// Exercise these features describe
    const EXERCISE: Exercise;

    /// Whether the whole validated series is forwarded to feedback generation
    const FORWARD_SERIES: bool;

    /// Tag a typed outcome with its exercise
    fn wrap_outcome(outcome: AnalysisOutcome<Self>) -> ExerciseOutcome;
}

/// One validated sample of the video
///
/// Only frames whose angles fall inside the exercise's plausibility windows
/// exist; rejected samples are never materialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureFrame<F> {
    /// Seconds from the start of the video
    pub timestamp: f64,
    /// Position of the sample in the sampled sequence (counting rejected samples)
    pub frame_index: usize,
    /// Limb chain the angles were measured on
    pub side: BodySide,
    /// Angles and positions
    #[serde(flatten)]
    pub features: F,
}

/// Squat features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SquatFeatures {
    /// Hip-knee-ankle vertex angle
    pub knee_angle: f64,
    /// Shoulder-hip-ankle bearing angle
    pub alignment_angle: f64,
    /// Shoulder-hip-knee bearing angle
    pub hip_flexion_angle: f64,
    /// Unsigned torso inclination
    pub torso_angle: f64,
    /// Hip height
    pub hip_y: f64,
    /// Knee height
    pub knee_y: f64,
}

/// Deadlift features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeadliftFeatures {
    /// Hip-knee-ankle vertex angle
    pub knee_angle: f64,
    /// Shoulder-hip-knee vertex angle
    pub hip_angle: f64,
    /// Ankle-hip-shoulder vertex angle
    pub alignment_angle: f64,
    /// Signed torso inclination, negative when the shoulder is below the hip
    pub torso_angle: f64,
    /// Hip height
    pub hip_y: f64,
    /// Shoulder height
    pub shoulder_y: f64,
}

/// Overhead press features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressFeatures {
    /// Shoulder-elbow-wrist vertex angle
    pub elbow_angle: f64,
    /// Unsigned torso inclination
    pub torso_angle: f64,
    /// Ankle-hip-shoulder vertex angle
    pub alignment_angle: f64,
    /// Wrist height
    pub wrist_y: f64,
    /// Elbow height
    pub elbow_y: f64,
}

/// Bent-over row features
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RowFeatures {
    /// Shoulder-elbow-wrist vertex angle
    pub elbow_angle: f64,
    /// Signed torso inclination
    pub torso_angle: f64,
    /// Hip-knee-ankle vertex angle
    pub knee_angle: f64,
    /// Knee-hip-shoulder vertex angle
    pub alignment_angle: f64,
    /// Wrist height
    pub wrist_y: f64,
    /// Shoulder height
    pub shoulder_y: f64,
}

impl ExerciseFeatures for SquatFeatures {
    const EXERCISE: Exercise = Exercise::Squat;
    const FORWARD_SERIES: bool = false;

    fn wrap_outcome(outcome: AnalysisOutcome<Self>) -> ExerciseOutcome {
        ExerciseOutcome::Squat(outcome)
    }
}

impl ExerciseFeatures for DeadliftFeatures {
    const EXERCISE: Exercise = Exercise::Deadlift;
    const FORWARD_SERIES: bool = false;

    fn wrap_outcome(outcome: AnalysisOutcome<Self>) -> ExerciseOutcome {
        ExerciseOutcome::Deadlift(outcome)
    }
}

impl ExerciseFeatures for PressFeatures {
    const EXERCISE: Exercise = Exercise::OverheadPress;
    // In-rep stability is judged downstream from the whole press series
    const FORWARD_SERIES: bool = true;

    fn wrap_outcome(outcome: AnalysisOutcome<Self>) -> ExerciseOutcome {
        ExerciseOutcome::OverheadPress(outcome)
    }
}

impl ExerciseFeatures for RowFeatures {
    const EXERCISE: Exercise = Exercise::BentRow;
    const FORWARD_SERIES: bool = false;

    fn wrap_outcome(outcome: AnalysisOutcome<Self>) -> ExerciseOutcome {
        ExerciseOutcome::BentRow(outcome)
    }
}
