// ABOUTME: Analysis outcomes handed to the downstream feedback generator
// ABOUTME: Metrics report, the two structured no-result outcomes, and the exercise-tagged result envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use super::exercise::Exercise;
use super::features::{
    DeadliftFeatures, ExerciseFeatures, FeatureFrame, PressFeatures, RowFeatures, SquatFeatures,
};
use super::repetition::{KeyFrameRole, NoRepetition, Repetition};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Rendered snapshot of a key frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFrameImage {
    /// Role label drawn on the image
    pub role: KeyFrameRole,
    /// Seconds from the start of the video
    pub timestamp: f64,
    /// Index of the sampled frame
    pub frame_index: usize,
    /// Encoded image, absent when rendering failed
    pub image: Option<String>,
}

/// Metrics produced when a repetition was located
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechniqueReport<F> {
    /// Number of frames that survived validation
    pub valid_frame_count: usize,
    /// Whole validated series, forwarded only where the consumer needs it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<FeatureFrame<F>>>,
    /// Located repetition with key frames and metrics
    pub repetition: Repetition<F>,
    /// Key-frame snapshots (empty when rendering is disabled)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<KeyFrameImage>,
}

/// Result of analysing one video for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisOutcome<F> {
    /// A repetition was located
    Metrics(TechniqueReport<F>),
    /// No sample survived validation; usually framing, lighting or occlusion
    NoPoseDetected {
        /// Samples taken from the video
        frames_sampled: usize,
    },
    /// Valid frames exist but no representative repetition could be found
    NoValidRepetition {
        /// Samples taken from the video
        frames_sampled: usize,
        /// Samples that survived validation
        valid_frames: usize,
        /// Why detection failed
        reason: NoRepetition,
    },
}

impl<F> AnalysisOutcome<F> {
    /// Outcome discriminant
    #[must_use]
    pub const fn status(&self) -> OutcomeStatus {
        match self {
            Self::Metrics(_) => OutcomeStatus::Metrics,
            Self::NoPoseDetected { .. } => OutcomeStatus::NoPoseDetected,
            Self::NoValidRepetition { .. } => OutcomeStatus::NoValidRepetition,
        }
    }

    /// Metrics report, if a repetition was located
    #[must_use]
    pub const fn report(&self) -> Option<&TechniqueReport<F>> {
        match self {
            Self::Metrics(report) => Some(report),
            _ => None,
        }
    }
}

/// Outcome discriminant used for logging and exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    /// Metrics produced
    Metrics,
    /// No pose detected
    NoPoseDetected,
    /// No valid repetition
    NoValidRepetition,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Metrics => "metrics",
            Self::NoPoseDetected => "no_pose_detected",
            Self::NoValidRepetition => "no_valid_repetition",
        })
    }
}

/// Outcome tagged with the exercise it was computed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "exercise", content = "result", rename_all = "snake_case")]
pub enum ExerciseOutcome {
    /// Squat
    Squat(AnalysisOutcome<SquatFeatures>),
    /// Deadlift
    Deadlift(AnalysisOutcome<DeadliftFeatures>),
    /// Overhead press
    OverheadPress(AnalysisOutcome<PressFeatures>),
    /// Bent-over row
    BentRow(AnalysisOutcome<RowFeatures>),
}

impl ExerciseOutcome {
    /// Exercise of this outcome
    #[must_use]
    pub const fn exercise(&self) -> Exercise {
        match self {
            Self::Squat(_) => SquatFeatures::EXERCISE,
            Self::Deadlift(_) => DeadliftFeatures::EXERCISE,
            Self::OverheadPress(_) => PressFeatures::EXERCISE,
            Self::BentRow(_) => RowFeatures::EXERCISE,
        }
    }

    /// Outcome discriminant
    #[must_use]
    pub const fn status(&self) -> OutcomeStatus {
        match self {
            Self::Squat(outcome) => outcome.status(),
            Self::Deadlift(outcome) => outcome.status(),
            Self::OverheadPress(outcome) => outcome.status(),
            Self::BentRow(outcome) => outcome.status(),
        }
    }
}

/// Payload crossing into the feedback-generation collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Correlates the result with its log records
    pub analysis_id: Uuid,
    /// When the analysis finished
    pub analyzed_at: DateTime<Utc>,
    /// Exercise-tagged outcome
    pub outcome: ExerciseOutcome,
}

impl AnalysisResult {
    /// Wrap an outcome with fresh correlation metadata
    #[must_use]
    pub fn new(analysis_id: Uuid, outcome: ExerciseOutcome) -> Self {
        Self {
            analysis_id,
            analyzed_at: Utc::now(),
            outcome,
        }
    }

    /// Exercise analysed
    #[must_use]
    pub const fn exercise(&self) -> Exercise {
        self.outcome.exercise()
    }

    /// Outcome discriminant
    #[must_use]
    pub const fn status(&self) -> OutcomeStatus {
        self.outcome.status()
    }
}
