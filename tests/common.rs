// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging setup, track builders and analyzer construction helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `liftlab`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use liftlab::recorded::{RecordedProviderFactory, RecordedTrack, RecordedVideo};
use liftlab::visualizer::SvgCanvasFactory;
use liftlab::TechniqueAnalyzer;
use liftlab_core::models::RawFrame;
use liftlab_intelligence::TechniqueConfig;
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Track over `frames` with the default frame geometry
pub fn track_from(frames: Vec<RawFrame>) -> Arc<RecordedTrack> {
    Arc::new(RecordedTrack::new(720, 1280, None, frames).unwrap())
}

/// Analyzer replaying `track` with default configuration and SVG rendering
pub fn recorded_analyzer(track: &Arc<RecordedTrack>) -> TechniqueAnalyzer {
    init_test_logging();
    TechniqueAnalyzer::new(
        TechniqueConfig::default(),
        Arc::new(RecordedProviderFactory::new(Arc::clone(track))),
    )
    .unwrap()
    .with_canvas(Arc::new(SvgCanvasFactory))
}

/// Fresh video over `track`
pub fn recorded_video(track: &Arc<RecordedTrack>) -> RecordedVideo {
    RecordedVideo::new(Arc::clone(track))
}
