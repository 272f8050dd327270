// ABOUTME: Configuration module for liftlab-intelligence crate
// ABOUTME: Re-exports technique configuration types and their validation error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

/// Configuration error type
pub mod error;
/// Sampling, validity, detection and rendering settings
pub mod technique;

pub use error::ConfigError;
pub use technique::{
    AngleWindow, DeadliftWindows, DetectionConfig, ImageFormat, PressWindows, RenderingConfig,
    RowWindows, SamplingConfig, SquatWindows, TechniqueConfig, ValidityConfig,
};
