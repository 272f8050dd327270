// ABOUTME: Integration tests for key-frame snapshot rendering
// ABOUTME: Decodes rendered SVG data URIs and checks skeleton, label and degradation behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use base64::{engine::general_purpose, Engine as _};
use common::{recorded_video, track_from};
use helpers::synthetic_landmarks::SyntheticPoseBuilder;
use helpers::test_doubles::ScriptedVideo;
use liftlab::visualizer::{SvgCanvasFactory, Visualizer};
use liftlab_core::constants::landmarks::{SKELETON_CONNECTIONS, SKELETON_JOINTS};
use liftlab_core::models::{KeyFrame, KeyFrameRole, LandmarkSet, SquatFeatures};
use liftlab_intelligence::config::ImageFormat;
use liftlab_intelligence::{FrameFeatureExtractor, KeyFrameDetector, SquatDetector, SquatExtractor};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Test Helpers
// ============================================================================

struct Fixture {
    key_frames: Vec<KeyFrame<SquatFeatures>>,
    landmarks: HashMap<usize, LandmarkSet>,
}

fn squat_fixture() -> Fixture {
    let frames = SyntheticPoseBuilder::new(21).squat_rep(30, 0.3, 0.7);
    let series = SquatExtractor::default().extract_series(&frames);
    let repetition = SquatDetector::default().detect(&series).unwrap();
    let landmarks = repetition
        .key_frames
        .iter()
        .map(|key| {
            let index = key.frame.frame_index;
            (index, frames[index].landmarks.clone())
        })
        .collect();
    Fixture {
        key_frames: repetition.key_frames,
        landmarks,
    }
}

fn svg_visualizer() -> Visualizer {
    Visualizer::new(Arc::new(SvgCanvasFactory), ImageFormat::Svg, 0.8)
}

fn decode(uri: &str) -> String {
    let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
    String::from_utf8(general_purpose::STANDARD.decode(payload).unwrap()).unwrap()
}

// ============================================================================
// Rendered Content
// ============================================================================

#[tokio::test]
async fn test_rendered_snapshot_draws_skeleton_and_label() {
    let fixture = squat_fixture();
    let track = track_from(SyntheticPoseBuilder::new(21).squat_rep(30, 0.3, 0.7));
    let mut video = recorded_video(&track);

    let images = svg_visualizer()
        .render_key_frames(&mut video, &fixture.key_frames, &fixture.landmarks)
        .await;

    assert_eq!(images.len(), 2);
    let inicio = decode(images[0].image.as_deref().unwrap());
    assert!(inicio.starts_with("<svg"));
    assert!(inicio.contains(r#"width="720" height="1280""#));
    assert!(inicio.contains(">INICIO</text>"));
    assert_eq!(inicio.matches("<line ").count(), SKELETON_CONNECTIONS.len());
    assert_eq!(inicio.matches("<circle ").count(), SKELETON_JOINTS.len());

    let peak = decode(images[1].image.as_deref().unwrap());
    assert!(peak.contains(">PEAK</text>"));
}

#[tokio::test]
async fn test_image_metadata_follows_key_frames() {
    let fixture = squat_fixture();
    let mut video = ScriptedVideo::new(3.0);

    let images = svg_visualizer()
        .render_key_frames(&mut video, &fixture.key_frames, &fixture.landmarks)
        .await;

    for (image, key) in images.iter().zip(&fixture.key_frames) {
        assert_eq!(image.role, key.role);
        assert_eq!(image.frame_index, key.frame.frame_index);
        assert!((image.timestamp - key.frame.timestamp).abs() < f64::EPSILON);
    }
}

#[tokio::test]
async fn test_video_pixels_become_background() {
    let fixture = squat_fixture();
    let mut video = ScriptedVideo::new(3.0).with_image("image/jpeg", b"jpeg-bytes");

    let images = svg_visualizer()
        .render_key_frames(&mut video, &fixture.key_frames, &fixture.landmarks)
        .await;

    let document = decode(images[0].image.as_deref().unwrap());
    let embedded = general_purpose::STANDARD.encode(b"jpeg-bytes");
    assert!(document.contains(&format!("href=\"data:image/jpeg;base64,{embedded}\"")));
    assert!(!document.contains("<rect "));
}

#[tokio::test]
async fn test_landmarks_scale_to_frame_pixels() {
    let fixture = squat_fixture();
    let mut video = ScriptedVideo::new(3.0);

    let images = svg_visualizer()
        .render_key_frames(&mut video, &fixture.key_frames[..1], &fixture.landmarks)
        .await;

    // Inicio is the standing frame: knee at (0.60, 0.70) on a 640x480 frame
    let document = decode(images[0].image.as_deref().unwrap());
    assert!(document.contains(r#"cx="384.0" cy="336.0""#));
}

// ============================================================================
// Degradation
// ============================================================================

#[tokio::test]
async fn test_missing_landmarks_leave_image_absent() {
    let fixture = squat_fixture();
    let mut video = ScriptedVideo::new(3.0);
    let probe = video.probe();

    let images = svg_visualizer()
        .render_key_frames(&mut video, &fixture.key_frames, &HashMap::new())
        .await;

    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|image| image.image.is_none()));
    assert_eq!(probe.snapshots(), 0);
}

#[tokio::test]
async fn test_unsupported_format_leaves_image_absent() {
    let fixture = squat_fixture();
    let mut video = ScriptedVideo::new(3.0);
    let visualizer = Visualizer::new(Arc::new(SvgCanvasFactory), ImageFormat::Png, 0.8);

    let images = visualizer
        .render_key_frames(&mut video, &fixture.key_frames, &fixture.landmarks)
        .await;

    assert!(images.iter().all(|image| image.image.is_none()));
    assert_eq!(images[0].role, KeyFrameRole::Inicio);
}

#[tokio::test]
async fn test_one_failed_snapshot_does_not_block_the_other() {
    let fixture = squat_fixture();
    let mut landmarks = fixture.landmarks.clone();
    let peak_index = fixture.key_frames[1].frame.frame_index;
    landmarks.remove(&peak_index);
    let mut video = ScriptedVideo::new(3.0);

    let images = svg_visualizer()
        .render_key_frames(&mut video, &fixture.key_frames, &landmarks)
        .await;

    assert!(images[0].image.is_some());
    assert!(images[1].image.is_none());
}

#[tokio::test]
async fn test_empty_background_image_is_rejected() {
    let fixture = squat_fixture();
    let mut video = ScriptedVideo::new(3.0).with_image("image/png", &[]);

    let images = svg_visualizer()
        .render_key_frames(&mut video, &fixture.key_frames, &fixture.landmarks)
        .await;

    assert!(images.iter().all(|image| image.image.is_none()));
}
