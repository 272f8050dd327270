// ABOUTME: Core data models for the technique analysis pipeline
// ABOUTME: Landmarks, per-exercise feature frames, key frames, repetitions and analysis outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Data Models
//!
//! Every entity here is created fresh per analysis invocation, is immutable
//! once produced and has no persisted identity.

/// Analysis outcomes and the payload handed to feedback generation
pub mod analysis;
/// Supported lift patterns
pub mod exercise;
/// Per-exercise feature frames
pub mod features;
/// Pose landmarks, landmark sets and raw sampled frames
pub mod landmark;
/// Key frames, repetitions and safety flags
pub mod repetition;

pub use analysis::{
    AnalysisOutcome, AnalysisResult, ExerciseOutcome, KeyFrameImage, OutcomeStatus,
    TechniqueReport,
};
pub use exercise::Exercise;
pub use features::{
    DeadliftFeatures, ExerciseFeatures, FeatureFrame, PressFeatures, RowFeatures, SquatFeatures,
};
pub use landmark::{BodySide, Landmark, LandmarkSet, RawFrame, SideLandmarks};
pub use repetition::{KeyFrame, KeyFrameRole, NoRepetition, Repetition, SafetyFlags};
