// ABOUTME: Adapters replaying a recorded landmark track through the pipeline ports
// ABOUTME: RecordedTrack loader, RecordedVideo source and nearest-sample RecordedPoseProvider
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Recorded Tracks
//!
//! A recorded track is a JSON document holding the landmark samples a pose
//! detector produced for a video, either as a bare list of
//! `{timestamp, landmarks}` objects or as an object with `width`, `height`,
//! an optional `duration_secs` and `samples`. Replaying it through
//! [`RecordedVideo`] and [`RecordedPoseProvider`] runs the full analysis
//! without a decoder or a detector.

use crate::ports::{PoseLandmarkProvider, PoseProviderFactory, VideoFrame, VideoSource};
use async_trait::async_trait;
use liftlab_core::constants::sampling::DEFAULT_INTERVAL_SECS;
use liftlab_core::errors::{AppError, AppResult};
use liftlab_core::models::{LandmarkSet, RawFrame};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

/// Frame width assumed when the track does not record one
pub const DEFAULT_FRAME_WIDTH: u32 = 720;
/// Frame height assumed when the track does not record one
pub const DEFAULT_FRAME_HEIGHT: u32 = 1280;

/// Slack added to the half-step match window; sample gaps carry rounding noise
const NEAREST_SLACK_SECS: f64 = 1e-6;

const fn default_width() -> u32 {
    DEFAULT_FRAME_WIDTH
}

const fn default_height() -> u32 {
    DEFAULT_FRAME_HEIGHT
}

/// On-disk layouts accepted by [`RecordedTrack::from_json`]
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TrackDocument {
    Samples(Vec<RawFrame>),
    Described(RecordedTrackFile),
}

/// Track document with frame geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedTrackFile {
    /// Frame width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Frame height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
    /// Video length; derived from the samples when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_secs: Option<f64>,
    /// Detections in timestamp order
    pub samples: Vec<RawFrame>,
}

/// Validated landmark recording
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedTrack {
    width: u32,
    height: u32,
    duration_secs: f64,
    step_secs: f64,
    samples: Vec<RawFrame>,
}

impl RecordedTrack {
    /// Build a track from samples
    ///
    /// Samples are sorted by timestamp. Without an explicit duration the
    /// track lasts one recording step past its last sample.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a zero frame dimension, a non-finite or
    /// negative timestamp, or a duration that ends before the last sample
    pub fn new(
        width: u32,
        height: u32,
        duration_secs: Option<f64>,
        mut samples: Vec<RawFrame>,
    ) -> AppResult<Self> {
        if width == 0 || height == 0 {
            return Err(AppError::invalid_input(format!(
                "Track frame dimensions must be positive, got {width}x{height}"
            )));
        }
        if let Some(bad) = samples
            .iter()
            .find(|sample| !sample.timestamp.is_finite() || sample.timestamp < 0.0)
        {
            return Err(AppError::invalid_input(format!(
                "Track sample timestamp {} is not a non-negative number",
                bad.timestamp
            )));
        }
        samples.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

        let step_secs = Self::recording_step(&samples);
        let last = samples.last().map_or(0.0, |sample| sample.timestamp);
        let duration_secs = match duration_secs {
            Some(duration) if !duration.is_finite() || duration < 0.0 => {
                return Err(AppError::invalid_input(format!(
                    "Track duration {duration} is not a non-negative number"
                )));
            }
            Some(duration) if !samples.is_empty() && duration <= last => {
                return Err(AppError::invalid_input(format!(
                    "Track duration {duration}s ends before the last sample at {last}s"
                )));
            }
            Some(duration) => duration,
            None if samples.is_empty() => 0.0,
            None => last + step_secs,
        };

        Ok(Self {
            width,
            height,
            duration_secs,
            step_secs,
            samples,
        })
    }

    /// Parse a track document
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` for malformed JSON (including landmark
    /// lists that are not 33 long) and the errors of [`RecordedTrack::new`]
    pub fn from_json(json: &str) -> AppResult<Self> {
        match serde_json::from_str::<TrackDocument>(json)? {
            TrackDocument::Samples(samples) => {
                Self::new(DEFAULT_FRAME_WIDTH, DEFAULT_FRAME_HEIGHT, None, samples)
            }
            TrackDocument::Described(file) => {
                Self::new(file.width, file.height, file.duration_secs, file.samples)
            }
        }
    }

    /// Read and parse a track file
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the file cannot be read, otherwise the
    /// errors of [`RecordedTrack::from_json`]
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).await?;
        let track = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            samples = track.samples.len(),
            duration_secs = track.duration_secs,
            "Loaded recorded track"
        );
        Ok(track)
    }

    /// Serializable form of the track
    #[must_use]
    pub fn to_file(&self) -> RecordedTrackFile {
        RecordedTrackFile {
            width: self.width,
            height: self.height,
            duration_secs: Some(self.duration_secs),
            samples: self.samples.clone(),
        }
    }

    /// Frame width in pixels
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Length of the recorded video in seconds
    #[must_use]
    pub const fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Smallest gap between consecutive samples
    #[must_use]
    pub const fn step_secs(&self) -> f64 {
        self.step_secs
    }

    /// Samples in timestamp order
    #[must_use]
    pub fn samples(&self) -> &[RawFrame] {
        &self.samples
    }

    /// Landmarks of the sample nearest to `timestamp`, if within half a step
    #[must_use]
    pub fn nearest(&self, timestamp: f64) -> Option<&LandmarkSet> {
        if !timestamp.is_finite() {
            return None;
        }
        let split = self
            .samples
            .partition_point(|sample| sample.timestamp < timestamp);
        let before = split.checked_sub(1).and_then(|i| self.samples.get(i));
        let after = self.samples.get(split);

        let nearest = match (before, after) {
            (Some(b), Some(a)) => {
                if timestamp - b.timestamp <= a.timestamp - timestamp {
                    b
                } else {
                    a
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => return None,
        };

        ((nearest.timestamp - timestamp).abs() <= self.step_secs / 2.0 + NEAREST_SLACK_SECS)
            .then_some(&nearest.landmarks)
    }

    fn recording_step(samples: &[RawFrame]) -> f64 {
        samples
            .windows(2)
            .map(|pair| pair[1].timestamp - pair[0].timestamp)
            .filter(|gap| *gap > 0.0)
            .fold(None, |smallest: Option<f64>, gap| {
                Some(smallest.map_or(gap, |s| s.min(gap)))
            })
            .unwrap_or(DEFAULT_INTERVAL_SECS)
    }
}

/// Video source over a recorded track's timeline
///
/// Frames carry no pixels, so rendered key frames get a blank background.
#[derive(Debug, Clone)]
pub struct RecordedVideo {
    track: Arc<RecordedTrack>,
    released: bool,
}

impl RecordedVideo {
    /// Open the track as a video
    #[must_use]
    pub const fn new(track: Arc<RecordedTrack>) -> Self {
        Self {
            track,
            released: false,
        }
    }

    /// Whether `release` has been called
    #[must_use]
    pub const fn is_released(&self) -> bool {
        self.released
    }
}

#[async_trait]
impl VideoSource for RecordedVideo {
    fn duration(&self) -> f64 {
        self.track.duration_secs
    }

    fn width(&self) -> u32 {
        self.track.width
    }

    fn height(&self) -> u32 {
        self.track.height
    }

    async fn seek(&mut self, timestamp: f64) -> AppResult<VideoFrame> {
        if self.released {
            return Err(AppError::unavailable("Recorded video was already released"));
        }
        if !timestamp.is_finite() || timestamp < 0.0 || timestamp > self.track.duration_secs {
            return Err(AppError::out_of_range(format!(
                "Seek to {timestamp}s outside recorded video of {}s",
                self.track.duration_secs
            )));
        }
        Ok(VideoFrame {
            timestamp,
            width: self.track.width,
            height: self.track.height,
            image: None,
        })
    }

    async fn release(&mut self) -> AppResult<()> {
        if !self.released {
            debug!("Releasing recorded video");
            self.released = true;
        }
        Ok(())
    }
}

/// Pose provider answering from a recorded track
#[derive(Debug, Clone)]
pub struct RecordedPoseProvider {
    track: Arc<RecordedTrack>,
}

impl RecordedPoseProvider {
    /// Provider over `track`
    #[must_use]
    pub const fn new(track: Arc<RecordedTrack>) -> Self {
        Self { track }
    }
}

#[async_trait]
impl PoseLandmarkProvider for RecordedPoseProvider {
    async fn detect(
        &mut self,
        frame: &VideoFrame,
        _timestamp_hint: f64,
    ) -> AppResult<Option<LandmarkSet>> {
        Ok(self.track.nearest(frame.timestamp).cloned())
    }
}

/// Creates [`RecordedPoseProvider`] instances for an analyzer
#[derive(Debug, Clone)]
pub struct RecordedProviderFactory {
    track: Arc<RecordedTrack>,
}

impl RecordedProviderFactory {
    /// Factory over `track`
    #[must_use]
    pub const fn new(track: Arc<RecordedTrack>) -> Self {
        Self { track }
    }
}

#[async_trait]
impl PoseProviderFactory for RecordedProviderFactory {
    async fn create(&self) -> AppResult<Box<dyn PoseLandmarkProvider>> {
        Ok(Box::new(RecordedPoseProvider::new(Arc::clone(&self.track))))
    }
}
