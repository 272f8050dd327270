// ABOUTME: Numeric core of exercise-technique extraction for squat, deadlift, overhead press and bent row
// ABOUTME: Geometry kernel, side selection, per-exercise extractors and key-frame detectors; no I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

#![deny(unsafe_code)]

//! # `LiftLab` Intelligence
//!
//! Turns raw pose-landmark frames into validated per-frame features and
//! locates one representative repetition per video. Everything here is a
//! synchronous pure computation so it can be tested headlessly; sampling,
//! rendering and orchestration live in the root crate.
//!
//! ## Modules
//!
//! - **geometry**: vertex angle, bearing angle and torso inclination
//! - **`side_selection`**: which limb chain measures a frame
//! - **extractors**: `FrameFeatureExtractor` per exercise
//! - **detectors**: `KeyFrameDetector` per exercise
//! - **config**: `TechniqueConfig` with environment overrides

/// Technique configuration
pub mod config;
/// Key-frame detection
pub mod detectors;
/// Frame feature extraction
pub mod extractors;
/// Planar joint-angle geometry
pub mod geometry;
/// Body side selection strategy
pub mod side_selection;

pub use config::{ConfigError, TechniqueConfig};
pub use detectors::{
    DeadliftDetector, KeyFrameDetector, PressDetector, RowDetector, SquatDetector,
};
pub use extractors::{
    DeadliftExtractor, FrameFeatureExtractor, PressExtractor, RowExtractor, SquatExtractor,
};
pub use geometry::{angle_at, flexion_bearing_angle, torso_inclination, RoundTo, VerticalReading};
pub use side_selection::{DepthDifferenceSelector, DepthPair, SideSelector};
