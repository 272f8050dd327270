// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Landmark index scheme, validity windows, detection thresholds and sampling limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace. Values that operators may want to tune are surfaced again
//! as defaults of `TechniqueConfig` in the intelligence crate.

/// Pose landmark index scheme produced by the external detector
pub mod landmarks;

/// Per-exercise plausibility windows and repetition thresholds
pub mod thresholds;

/// Frame sampling defaults
pub mod sampling {
    /// Default time step between sampled frames (seconds)
    pub const DEFAULT_INTERVAL_SECS: f64 = 0.1;
    /// Default cap on sampled frames per analysis
    pub const DEFAULT_MAX_FRAMES: usize = 150;
    /// Smallest accepted sampling step (seconds)
    pub const MIN_INTERVAL_SECS: f64 = 0.001;
}

/// Rendering defaults for key-frame images
pub mod rendering {
    /// Default encoded image quality (0-1]
    pub const DEFAULT_IMAGE_QUALITY: f64 = 0.8;
    /// Joint marker radius in pixels
    pub const JOINT_RADIUS_PX: f64 = 6.0;
    /// Skeleton line width in pixels
    pub const LINE_WIDTH_PX: f64 = 4.0;
    /// Role label font size in pixels
    pub const LABEL_FONT_PX: f64 = 32.0;
    /// Role label outline width in pixels
    pub const LABEL_OUTLINE_PX: f64 = 4.0;
    /// Skeleton line colour
    pub const SKELETON_COLOR: &str = "#00e5ff";
    /// Joint marker colour
    pub const JOINT_COLOR: &str = "#ff3d00";
    /// Role label fill colour
    pub const LABEL_FILL: &str = "#ffffff";
    /// Role label outline colour
    pub const LABEL_OUTLINE: &str = "#000000";
}

/// Service names used in structured logs
pub mod service_names {
    /// Name of the technique analysis service
    pub const LIFTLAB_ANALYZER: &str = "liftlab-analyzer";
}
