// ABOUTME: Port traits for the collaborators the pipeline drives but does not implement
// ABOUTME: Pose landmark provider, video source, drawing canvas and canvas factory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Collaborator Ports
//!
//! The numeric crates never touch these. The pipeline owns one `VideoSource`
//! per analysis, shares one `PoseLandmarkProvider` across analyses and creates
//! a fresh `Canvas` for every rendered key frame.

use async_trait::async_trait;
use liftlab_core::errors::AppResult;
use liftlab_core::models::LandmarkSet;
use liftlab_intelligence::config::ImageFormat;

/// Still image bytes in a container the canvas can embed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// MIME type of `bytes` (e.g. `image/png`)
    pub mime_type: String,
    /// Encoded image data
    pub bytes: Vec<u8>,
}

/// A decoded video frame at a given instant
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    /// Seconds from the start of the video
    pub timestamp: f64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Frame pixels, when the source can provide them
    pub image: Option<EncodedImage>,
}

/// Detects the 33-point pose in a video frame
///
/// Implementations may keep state between calls (tracking detectors expect
/// non-decreasing timestamps), so detection takes `&mut self`.
#[async_trait]
pub trait PoseLandmarkProvider: Send {
    /// Landmarks for the frame, `None` when no person was detected
    ///
    /// # Errors
    ///
    /// Returns an error when the detector itself failed
    async fn detect(
        &mut self,
        frame: &VideoFrame,
        timestamp_hint: f64,
    ) -> AppResult<Option<LandmarkSet>>;
}

/// Creates the process-wide pose provider on first use
#[async_trait]
pub trait PoseProviderFactory: Send + Sync {
    /// Build a provider instance
    ///
    /// # Errors
    ///
    /// Returns an error when the detector cannot be initialized
    async fn create(&self) -> AppResult<Box<dyn PoseLandmarkProvider>>;
}

/// A seekable video owned by one analysis
#[async_trait]
pub trait VideoSource: Send {
    /// Length in seconds
    fn duration(&self) -> f64;

    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Seek to `timestamp` and decode the frame there
    ///
    /// # Errors
    ///
    /// Returns an error when seeking or decoding fails or the source was released
    async fn seek(&mut self, timestamp: f64) -> AppResult<VideoFrame>;

    /// Frame to draw a key-frame snapshot on
    ///
    /// # Errors
    ///
    /// Returns an error when the frame cannot be obtained
    async fn snapshot(&mut self, timestamp: f64) -> AppResult<VideoFrame> {
        self.seek(timestamp).await
    }

    /// Release the underlying handle; later seeks fail
    ///
    /// # Errors
    ///
    /// Returns an error when the handle could not be released cleanly
    async fn release(&mut self) -> AppResult<()>;
}

/// Point in canvas pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal pixel
    pub x: f64,
    /// Vertical pixel (grows downward)
    pub y: f64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Outlined text style
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub font_px: f64,
    /// Fill colour
    pub fill: String,
    /// Outline colour
    pub outline: String,
    /// Outline width in pixels
    pub outline_px: f64,
}

/// Drawing surface for one key-frame image
pub trait Canvas: Send {
    /// Paint the video frame as background
    ///
    /// # Errors
    ///
    /// Returns an error when the frame cannot be painted
    fn draw_frame(&mut self, frame: &VideoFrame) -> AppResult<()>;

    /// Straight line segment
    fn draw_line(&mut self, from: Point, to: Point, color: &str, width_px: f64);

    /// Filled circle
    fn draw_circle(&mut self, center: Point, radius_px: f64, color: &str);

    /// Outlined text anchored at its baseline start
    fn draw_text(&mut self, text: &str, at: Point, style: &TextStyle);

    /// Export the canvas
    ///
    /// # Errors
    ///
    /// Returns an error when the format is unsupported or encoding fails
    fn encode(&self, format: ImageFormat, quality: f64) -> AppResult<String>;
}

/// Creates canvases sized to the video
pub trait CanvasFactory: Send + Sync {
    /// New blank canvas
    ///
    /// # Errors
    ///
    /// Returns an error when the canvas cannot be allocated
    fn create(&self, width: u32, height: u32) -> AppResult<Box<dyn Canvas>>;
}
