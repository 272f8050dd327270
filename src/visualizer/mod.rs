// ABOUTME: Renders labeled skeleton overlays for located key frames
// ABOUTME: Failures degrade to an absent image instead of aborting the analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Key-Frame Visualizer
//!
//! For each key frame: snapshot the video at the frame's timestamp, draw the
//! fixed skeleton graph and joint markers from the frame's raw landmarks,
//! overlay the uppercase role label and encode the canvas.

/// SVG canvas adapter
pub mod svg;

pub use svg::{SvgCanvas, SvgCanvasFactory};

use crate::ports::{CanvasFactory, Point, TextStyle, VideoSource};
use liftlab_core::constants::landmarks::{SKELETON_CONNECTIONS, SKELETON_JOINTS};
use liftlab_core::constants::rendering::{
    JOINT_COLOR, JOINT_RADIUS_PX, LABEL_FILL, LABEL_FONT_PX, LABEL_OUTLINE, LABEL_OUTLINE_PX,
    LINE_WIDTH_PX, SKELETON_COLOR,
};
use liftlab_core::errors::{AppError, AppResult};
use liftlab_core::models::{KeyFrame, KeyFrameImage, KeyFrameRole, LandmarkSet};
use liftlab_intelligence::config::{ImageFormat, RenderingConfig};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Label inset from the top-left corner in pixels
const LABEL_MARGIN_PX: f64 = 20.0;

/// Key-frame image renderer
#[derive(Clone)]
pub struct Visualizer {
    factory: Arc<dyn CanvasFactory>,
    format: ImageFormat,
    quality: f64,
}

impl Visualizer {
    /// Create a visualizer drawing on canvases from `factory`
    #[must_use]
    pub fn new(factory: Arc<dyn CanvasFactory>, format: ImageFormat, quality: f64) -> Self {
        Self {
            factory,
            format,
            quality,
        }
    }

    /// Create a visualizer using the rendering configuration's format and quality
    #[must_use]
    pub fn from_config(factory: Arc<dyn CanvasFactory>, config: &RenderingConfig) -> Self {
        Self::new(factory, config.format, config.quality)
    }

    /// Render every key frame in order
    ///
    /// `landmarks` maps a frame index to the raw landmarks of that sample. A
    /// key frame without landmarks, or whose rendering fails, gets `image: None`.
    pub async fn render_key_frames<F: Sync>(
        &self,
        video: &mut dyn VideoSource,
        key_frames: &[KeyFrame<F>],
        landmarks: &HashMap<usize, LandmarkSet>,
    ) -> Vec<KeyFrameImage> {
        let mut images = Vec::with_capacity(key_frames.len());
        for key in key_frames {
            let frame_index = key.frame.frame_index;
            let timestamp = key.frame.timestamp;

            let rendered = match landmarks.get(&frame_index) {
                Some(set) => self.render(video, key.role, timestamp, set).await,
                None => Err(AppError::not_found(format!(
                    "Landmarks for frame {frame_index}"
                ))),
            };

            let image = match rendered {
                Ok(encoded) => {
                    debug!(role = %key.role, frame_index, "rendered key frame");
                    Some(encoded)
                }
                Err(e) => {
                    warn!(role = %key.role, frame_index, error = %e, "key frame rendering failed");
                    None
                }
            };

            images.push(KeyFrameImage {
                role: key.role,
                timestamp,
                frame_index,
                image,
            });
        }
        images
    }

    /// Render one labeled skeleton snapshot
    ///
    /// # Errors
    ///
    /// Returns an error when the snapshot, canvas or encoder fails
    pub async fn render(
        &self,
        video: &mut dyn VideoSource,
        role: KeyFrameRole,
        timestamp: f64,
        landmarks: &LandmarkSet,
    ) -> AppResult<String> {
        let frame = video.snapshot(timestamp).await?;
        let (width, height) = (f64::from(frame.width), f64::from(frame.height));
        let to_canvas = |index: usize| {
            landmarks
                .get(index)
                .map(|landmark| Point::new(landmark.x * width, landmark.y * height))
        };

        let mut canvas = self.factory.create(frame.width, frame.height)?;
        canvas.draw_frame(&frame)?;

        for (from, to) in SKELETON_CONNECTIONS {
            if let (Some(a), Some(b)) = (to_canvas(from), to_canvas(to)) {
                canvas.draw_line(a, b, SKELETON_COLOR, LINE_WIDTH_PX);
            }
        }
        for joint in SKELETON_JOINTS {
            if let Some(center) = to_canvas(joint) {
                canvas.draw_circle(center, JOINT_RADIUS_PX, JOINT_COLOR);
            }
        }

        let label_style = TextStyle {
            font_px: LABEL_FONT_PX,
            fill: LABEL_FILL.to_owned(),
            outline: LABEL_OUTLINE.to_owned(),
            outline_px: LABEL_OUTLINE_PX,
        };
        canvas.draw_text(
            role.label(),
            Point::new(LABEL_MARGIN_PX, LABEL_MARGIN_PX + LABEL_FONT_PX),
            &label_style,
        );

        canvas.encode(self.format, self.quality)
    }
}
