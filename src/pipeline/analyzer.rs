// ABOUTME: Entry point running one technique analysis from video to assembled result
// ABOUTME: Owns the lazily created pose provider and releases the video on every exit path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Technique Analyzer
//!
//! One call to [`TechniqueAnalyzer::analyze`] samples the video, extracts
//! feature frames, locates the repetition, renders its key frames and returns
//! the assembled result. The pose provider is created on first use and kept
//! for the analyzer's lifetime; analyses sharing an analyzer take turns on it.

use super::assembler::ResultAssembler;
use super::sampler::FrameSampler;
use crate::logging::AppLogger;
use crate::ports::{CanvasFactory, PoseLandmarkProvider, PoseProviderFactory, VideoSource};
use crate::visualizer::Visualizer;
use futures_util::StreamExt;
use liftlab_core::errors::{AppError, AppResult, ErrorCode};
use liftlab_core::models::{AnalysisResult, Exercise, ExerciseFeatures, ExerciseOutcome, LandmarkSet};
use liftlab_intelligence::{
    DeadliftDetector, DeadliftExtractor, FrameFeatureExtractor, KeyFrameDetector, PressDetector,
    PressExtractor, RowDetector, RowExtractor, SquatDetector, SquatExtractor, TechniqueConfig,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, field, info, info_span, Instrument, Span};
use uuid::Uuid;

/// Shared, lazily initialized pose provider
type ProviderHandle = Mutex<Box<dyn PoseLandmarkProvider>>;

/// Runs technique analyses
pub struct TechniqueAnalyzer {
    config: TechniqueConfig,
    provider_factory: Arc<dyn PoseProviderFactory>,
    provider: OnceCell<ProviderHandle>,
    visualizer: Option<Visualizer>,
}

impl TechniqueAnalyzer {
    /// Create an analyzer that renders no images
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when the configuration fails validation
    pub fn new(
        config: TechniqueConfig,
        provider_factory: Arc<dyn PoseProviderFactory>,
    ) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            provider_factory,
            provider: OnceCell::new(),
            visualizer: None,
        })
    }

    /// Render key-frame images on canvases from `factory`
    #[must_use]
    pub fn with_canvas(mut self, factory: Arc<dyn CanvasFactory>) -> Self {
        self.visualizer = Some(Visualizer::from_config(factory, &self.config.rendering));
        self
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &TechniqueConfig {
        &self.config
    }

    /// Analyse `video` for `exercise`
    ///
    /// The video is released whether or not the analysis succeeds. "No pose"
    /// and "no repetition" are successful results, not errors.
    ///
    /// # Errors
    ///
    /// Returns an error when a collaborator fails (provider initialization,
    /// seeking, detection or release)
    pub async fn analyze(
        &self,
        exercise: Exercise,
        video: &mut dyn VideoSource,
    ) -> AppResult<AnalysisResult> {
        let analysis_id = Uuid::new_v4();
        let span = info_span!(
            "technique_analysis",
            analysis_id = %analysis_id,
            exercise = %exercise,
            duration_ms = field::Empty,
        );

        async move {
            let started = Instant::now();
            info!(
                video_duration_secs = video.duration(),
                "Starting technique analysis"
            );

            let outcome = self.run(exercise, video).await;
            let released = video.release().await;

            let outcome = match (outcome, released) {
                (Ok(outcome), Ok(())) => outcome,
                (Ok(_), Err(e)) => return Err(e),
                (Err(e), released) => {
                    if let Err(release_error) = released {
                        AppLogger::log_collaborator_failure("video", &release_error);
                    }
                    return Err(e);
                }
            };

            let result = AnalysisResult::new(analysis_id, outcome);
            let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            Span::current().record("duration_ms", duration_ms);
            AppLogger::log_analysis_outcome(&result, duration_ms);
            Ok(result)
        }
        .instrument(span)
        .await
    }

    async fn run(
        &self,
        exercise: Exercise,
        video: &mut dyn VideoSource,
    ) -> AppResult<ExerciseOutcome> {
        let config = &self.config;
        match exercise {
            Exercise::Squat => {
                self.run_exercise(
                    &SquatExtractor::from_config(config),
                    &SquatDetector::from_config(config),
                    video,
                )
                .await
            }
            Exercise::Deadlift => {
                self.run_exercise(
                    &DeadliftExtractor::from_config(config),
                    &DeadliftDetector::from_config(config),
                    video,
                )
                .await
            }
            Exercise::OverheadPress => {
                self.run_exercise(
                    &PressExtractor::from_config(config),
                    &PressDetector::from_config(config),
                    video,
                )
                .await
            }
            Exercise::BentRow => {
                self.run_exercise(
                    &RowExtractor::from_config(config),
                    &RowDetector::from_config(config),
                    video,
                )
                .await
            }
        }
    }

    // Long function: sampling, detection, rendering and assembly share the landmark map
    async fn run_exercise<E, D>(
        &self,
        extractor: &E,
        detector: &D,
        video: &mut dyn VideoSource,
    ) -> AppResult<ExerciseOutcome>
    where
        E: FrameFeatureExtractor,
        D: KeyFrameDetector<Features = E::Features>,
    {
        let wrap = <E::Features as ExerciseFeatures>::wrap_outcome;
        let sampler = FrameSampler::new(&self.config.sampling);
        let frames_sampled = sampler.sample_count(video.duration());

        let mut series = Vec::new();
        let mut landmarks: HashMap<usize, LandmarkSet> = HashMap::new();
        {
            let mut provider = self.provider().await?.lock().await;
            let mut samples = sampler.sample(&mut *video, &mut **provider);
            while let Some(sample) = samples.next().await {
                let sample = sample?;
                if let Some(frame) = extractor.extract(&sample.frame, sample.sample_index) {
                    landmarks.insert(sample.sample_index, sample.frame.landmarks);
                    series.push(frame);
                }
            }
        }

        let valid_frames = series.len();
        info!(frames_sampled, valid_frames, "Feature extraction complete");

        if series.is_empty() {
            return Ok(wrap(ResultAssembler::no_pose(frames_sampled)));
        }

        let repetition = match detector.detect(&series) {
            Ok(repetition) => repetition,
            Err(reason) => {
                info!(%reason, "No valid repetition located");
                return Ok(wrap(ResultAssembler::no_repetition(
                    frames_sampled,
                    valid_frames,
                    reason,
                )));
            }
        };

        landmarks.retain(|index, _| {
            repetition
                .key_frames
                .iter()
                .any(|key| key.frame.frame_index == *index)
        });

        let images = match &self.visualizer {
            Some(visualizer) if self.config.rendering.enabled => {
                visualizer
                    .render_key_frames(video, &repetition.key_frames, &landmarks)
                    .await
            }
            _ => {
                debug!("Key-frame rendering disabled");
                Vec::new()
            }
        };

        Ok(wrap(ResultAssembler::metrics(series, repetition, images)))
    }

    async fn provider(&self) -> AppResult<&ProviderHandle> {
        self.provider
            .get_or_try_init(|| async {
                info!("Initializing pose landmark provider");
                let provider = self.provider_factory.create().await.map_err(|e| {
                    AppError::new(
                        ErrorCode::ExternalServiceUnavailable,
                        format!("Pose landmark provider initialization failed: {}", e.message),
                    )
                    .with_source(e)
                })?;
                Ok::<_, AppError>(Mutex::new(provider))
            })
            .await
    }
}
