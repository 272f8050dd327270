// ABOUTME: Fixed-step frame sampler driving seek-then-detect over a video
// ABOUTME: Exposes an ordered async stream of detected landmark frames bounded by a frame cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Frame Sampler
//!
//! Samples are strictly sequential: the next timestamp is not sought until
//! the detector has answered for the current one, so emitted timestamps are
//! non-decreasing. Samples without a detection are skipped silently.

use crate::ports::{PoseLandmarkProvider, VideoSource};
use async_stream::try_stream;
use futures_util::Stream;
use liftlab_core::errors::AppResult;
use liftlab_core::models::RawFrame;
use liftlab_intelligence::config::SamplingConfig;
use std::pin::Pin;
use tracing::trace;

/// A detected frame with its position in the sampled sequence
#[derive(Debug, Clone, PartialEq)]
pub struct SampledFrame {
    /// Index of the sample, counting samples without a detection
    pub sample_index: usize,
    /// Timestamp and landmarks
    pub frame: RawFrame,
}

/// Stream of detected frames
pub type SampleStream<'a> = Pin<Box<dyn Stream<Item = AppResult<SampledFrame>> + Send + 'a>>;

/// Walks a video at a fixed time step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSampler {
    interval_secs: f64,
    max_frames: usize,
}

impl FrameSampler {
    /// Create a sampler; the configuration is assumed validated
    #[must_use]
    pub const fn new(config: &SamplingConfig) -> Self {
        Self {
            interval_secs: config.interval_secs,
            max_frames: config.max_frames,
        }
    }

    /// Timestamps `0, step, 2*step, ...` strictly before `duration`, at most `max_frames`
    ///
    /// Timestamps are computed as `index * step` so rounding never accumulates.
    pub fn timestamps(&self, duration: f64) -> impl Iterator<Item = f64> {
        let step = self.interval_secs;
        let valid = step.is_finite() && step > 0.0 && duration.is_finite();
        (0..self.max_frames)
            .map(move |index| index as f64 * step)
            .take_while(move |&timestamp| valid && timestamp < duration)
    }

    /// Number of samples that will be taken from a video of `duration` seconds
    #[must_use]
    pub fn sample_count(&self, duration: f64) -> usize {
        self.timestamps(duration).count()
    }

    /// Sample `video`, running `provider` on each sought frame
    pub fn sample<'a>(
        &self,
        video: &'a mut dyn VideoSource,
        provider: &'a mut dyn PoseLandmarkProvider,
    ) -> SampleStream<'a> {
        let timestamps: Vec<f64> = self.timestamps(video.duration()).collect();

        Box::pin(try_stream! {
            for (sample_index, timestamp) in timestamps.into_iter().enumerate() {
                let frame = video.seek(timestamp).await?;
                match provider.detect(&frame, timestamp).await? {
                    Some(landmarks) => {
                        yield SampledFrame {
                            sample_index,
                            frame: RawFrame { timestamp, landmarks },
                        };
                    }
                    None => trace!(sample_index, timestamp, "no pose detected in sample"),
                }
            }
        })
    }
}
