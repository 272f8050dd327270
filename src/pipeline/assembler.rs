// ABOUTME: Packages detection output into the analysis outcome handed to feedback generation
// ABOUTME: Chooses between metrics and the two structured no-result outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use liftlab_core::models::{
    AnalysisOutcome, ExerciseFeatures, FeatureFrame, KeyFrameImage, NoRepetition, Repetition,
    TechniqueReport,
};

/// Builds `AnalysisOutcome` values
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAssembler;

impl ResultAssembler {
    /// Outcome for an analysis that produced no valid frame
    #[must_use]
    pub const fn no_pose<F>(frames_sampled: usize) -> AnalysisOutcome<F> {
        AnalysisOutcome::NoPoseDetected { frames_sampled }
    }

    /// Outcome for an analysis whose detection failed
    ///
    /// Falls back to `NoPoseDetected` when the series is empty, since an empty
    /// series means no pose survived validation at all.
    #[must_use]
    pub fn no_repetition<F>(
        frames_sampled: usize,
        valid_frames: usize,
        reason: NoRepetition,
    ) -> AnalysisOutcome<F> {
        if valid_frames == 0 {
            return Self::no_pose(frames_sampled);
        }
        AnalysisOutcome::NoValidRepetition {
            frames_sampled,
            valid_frames,
            reason,
        }
    }

    /// Metrics outcome
    ///
    /// The whole series is kept only for exercises whose feedback judges
    /// in-rep stability; the others carry just the valid frame count.
    #[must_use]
    pub fn metrics<F: ExerciseFeatures>(
        frames: Vec<FeatureFrame<F>>,
        repetition: Repetition<F>,
        images: Vec<KeyFrameImage>,
    ) -> AnalysisOutcome<F> {
        let valid_frame_count = frames.len();
        AnalysisOutcome::Metrics(TechniqueReport {
            valid_frame_count,
            frames: F::FORWARD_SERIES.then_some(frames),
            repetition,
            images,
        })
    }
}
