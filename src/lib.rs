// ABOUTME: Main library entry point for the LiftLab technique analysis pipeline
// ABOUTME: Wires pose detection, feature extraction, key-frame detection and rendering together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

#![deny(unsafe_code)]

//! # LiftLab
//!
//! Turns a short video of one strength-training repetition into per-frame
//! joint-angle features, the repetition's key frames and labeled skeleton
//! overlays, for a downstream feedback generator to consume.
//!
//! ## Supported exercises
//!
//! - **Squat**: depth, hip flexion and torso lean, with a break-parallel check
//! - **Deadlift**: hip and knee extension with safety flags on back posture
//! - **Overhead press**: elbow lockout with the full stability series
//! - **Bent-over row**: elbow pull with torso inclination
//!
//! ## Architecture
//!
//! - **`liftlab-core`**: errors, landmark scheme, thresholds and the data model
//! - **`liftlab-intelligence`**: geometry, feature extractors, key-frame detectors, configuration
//! - **Ports**: traits for the pose provider, video source and drawing canvas
//! - **Pipeline**: sampler, analyzer and result assembly
//! - **Visualizer**: key-frame skeleton overlays
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftlab::recorded::{RecordedProviderFactory, RecordedTrack, RecordedVideo};
//! use liftlab::TechniqueAnalyzer;
//! use liftlab_core::errors::AppResult;
//! use liftlab_core::models::Exercise;
//! use liftlab_intelligence::TechniqueConfig;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let track = Arc::new(RecordedTrack::load("squat.json").await?);
//!     let factory = Arc::new(RecordedProviderFactory::new(Arc::clone(&track)));
//!     let analyzer = TechniqueAnalyzer::new(TechniqueConfig::default(), factory)?;
//!
//!     let mut video = RecordedVideo::new(track);
//!     let result = analyzer.analyze(Exercise::Squat, &mut video).await?;
//!     println!("{}", result.status());
//!     Ok(())
//! }
//! ```

/// Logging configuration and structured analysis events
pub mod logging;

/// Collaborator traits the pipeline drives
pub mod ports;

/// Sampling, analysis entry point and result assembly
pub mod pipeline;

/// Replay adapters for recorded landmark tracks
pub mod recorded;

/// Key-frame skeleton rendering
pub mod visualizer;

pub use liftlab_core::{constants, errors, models};
pub use pipeline::{FrameSampler, ResultAssembler, TechniqueAnalyzer};
