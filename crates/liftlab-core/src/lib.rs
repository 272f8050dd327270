// ABOUTME: Core types and constants for the LiftLab technique analysis pipeline
// ABOUTME: Foundation crate with error handling, landmark index scheme, thresholds, and data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

#![deny(unsafe_code)]

//! # `LiftLab` Core
//!
//! Foundation crate providing shared types and constants for the `LiftLab`
//! exercise-technique pipeline. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: Landmark index scheme, detection thresholds and sampling limits
//! - **models**: Landmarks, feature frames, key frames, repetitions and analysis outcomes

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Landmark, `FeatureFrame`, Repetition, `AnalysisOutcome`, etc.)
pub mod models;
