// ABOUTME: In-memory collaborator doubles for pipeline tests
// ABOUTME: Scripted video source, counting provider factory and failing canvas factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use async_trait::async_trait;
use liftlab::ports::{
    Canvas, CanvasFactory, EncodedImage, PoseLandmarkProvider, PoseProviderFactory, VideoFrame,
    VideoSource,
};
use liftlab::recorded::{RecordedPoseProvider, RecordedTrack};
use liftlab_core::errors::{AppError, AppResult};
use liftlab_core::models::LandmarkSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared counters a test keeps after handing the video to the analyzer
#[derive(Debug, Clone, Default)]
pub struct VideoProbe {
    pub seeks: Arc<AtomicUsize>,
    pub snapshots: Arc<AtomicUsize>,
    pub releases: Arc<AtomicUsize>,
    pub released: Arc<AtomicBool>,
}

impl VideoProbe {
    pub fn seeks(&self) -> usize {
        self.seeks.load(Ordering::SeqCst)
    }

    pub fn snapshots(&self) -> usize {
        self.snapshots.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

/// Video source whose failures are scripted by the test
#[derive(Debug, Clone)]
pub struct ScriptedVideo {
    duration: f64,
    width: u32,
    height: u32,
    probe: VideoProbe,
    fail_seek_at: Option<usize>,
    fail_snapshot: bool,
    fail_release: bool,
    image: Option<EncodedImage>,
}

impl ScriptedVideo {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            width: 640,
            height: 480,
            probe: VideoProbe::default(),
            fail_seek_at: None,
            fail_snapshot: false,
            fail_release: false,
            image: None,
        }
    }

    pub fn probe(&self) -> VideoProbe {
        self.probe.clone()
    }

    /// Fail the seek with this zero-based call number
    pub fn failing_seek(mut self, call: usize) -> Self {
        self.fail_seek_at = Some(call);
        self
    }

    pub fn failing_snapshot(mut self) -> Self {
        self.fail_snapshot = true;
        self
    }

    pub fn failing_release(mut self) -> Self {
        self.fail_release = true;
        self
    }

    pub fn with_image(mut self, mime_type: &str, bytes: &[u8]) -> Self {
        self.image = Some(EncodedImage {
            mime_type: mime_type.to_owned(),
            bytes: bytes.to_vec(),
        });
        self
    }

    fn frame(&self, timestamp: f64) -> VideoFrame {
        VideoFrame {
            timestamp,
            width: self.width,
            height: self.height,
            image: self.image.clone(),
        }
    }
}

#[async_trait]
impl VideoSource for ScriptedVideo {
    fn duration(&self) -> f64 {
        self.duration
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    async fn seek(&mut self, timestamp: f64) -> AppResult<VideoFrame> {
        let call = self.probe.seeks.fetch_add(1, Ordering::SeqCst);
        if self.probe.released.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("video released"));
        }
        if self.fail_seek_at == Some(call) {
            return Err(AppError::external_service("video", "decoder crashed"));
        }
        Ok(self.frame(timestamp))
    }

    async fn snapshot(&mut self, timestamp: f64) -> AppResult<VideoFrame> {
        self.probe.snapshots.fetch_add(1, Ordering::SeqCst);
        if self.fail_snapshot {
            return Err(AppError::external_service("video", "snapshot failed"));
        }
        Ok(self.frame(timestamp))
    }

    async fn release(&mut self) -> AppResult<()> {
        self.probe.releases.fetch_add(1, Ordering::SeqCst);
        self.probe.released.store(true, Ordering::SeqCst);
        if self.fail_release {
            return Err(AppError::external_service("video", "handle leak"));
        }
        Ok(())
    }
}

/// Provider factory that counts creations and can refuse to initialize
#[derive(Debug, Clone)]
pub struct CountingProviderFactory {
    track: Option<Arc<RecordedTrack>>,
    pub creations: Arc<AtomicUsize>,
}

impl CountingProviderFactory {
    /// Factory answering from `track`
    pub fn new(track: Arc<RecordedTrack>) -> Self {
        Self {
            track: Some(track),
            creations: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Factory whose detector never initializes
    pub fn unavailable() -> Self {
        Self {
            track: None,
            creations: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn creations(&self) -> usize {
        self.creations.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PoseProviderFactory for CountingProviderFactory {
    async fn create(&self) -> AppResult<Box<dyn PoseLandmarkProvider>> {
        self.creations.fetch_add(1, Ordering::SeqCst);
        match &self.track {
            Some(track) => Ok(Box::new(RecordedPoseProvider::new(Arc::clone(track)))),
            None => Err(AppError::external_service("pose", "model weights missing")),
        }
    }
}

/// Provider whose detector fails on every frame
#[derive(Debug, Clone, Copy, Default)]
pub struct BrokenProviderFactory;

struct BrokenProvider;

#[async_trait]
impl PoseLandmarkProvider for BrokenProvider {
    async fn detect(
        &mut self,
        _frame: &VideoFrame,
        _timestamp_hint: f64,
    ) -> AppResult<Option<LandmarkSet>> {
        Err(AppError::external_service("pose", "inference failed"))
    }
}

#[async_trait]
impl PoseProviderFactory for BrokenProviderFactory {
    async fn create(&self) -> AppResult<Box<dyn PoseLandmarkProvider>> {
        Ok(Box::new(BrokenProvider))
    }
}

/// Canvas factory that cannot allocate canvases
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingCanvasFactory;

impl CanvasFactory for FailingCanvasFactory {
    fn create(&self, _width: u32, _height: u32) -> AppResult<Box<dyn Canvas>> {
        Err(AppError::internal("out of canvas memory"))
    }
}
