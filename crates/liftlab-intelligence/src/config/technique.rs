// ABOUTME: Technique analysis configuration: sampling, plausibility windows, detection thresholds, rendering
// ABOUTME: Defaults mirror the core constants and every value can be overridden with LIFTLAB_ environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! Technique Configuration Module
//!
//! All values can be overridden via environment variables with the `LIFTLAB_`
//! prefix. `TechniqueConfig::global()` caches the validated result for the
//! process lifetime.

use super::error::ConfigError;
use liftlab_core::constants::rendering::DEFAULT_IMAGE_QUALITY;
use liftlab_core::constants::sampling::{
    DEFAULT_INTERVAL_SECS, DEFAULT_MAX_FRAMES, MIN_INTERVAL_SECS,
};
use liftlab_core::constants::thresholds::{self, deadlift, press, row, squat};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static TECHNIQUE_CONFIG: OnceLock<TechniqueConfig> = OnceLock::new();

/// Largest angle any window may reach
const MAX_ANGLE_DEG: f64 = 180.0;

// ============================================================================
// Main Configuration
// ============================================================================

/// Technique analysis configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechniqueConfig {
    /// Frame sampling
    pub sampling: SamplingConfig,
    /// Per-exercise plausibility windows
    pub validity: ValidityConfig,
    /// Repetition detection thresholds
    pub detection: DetectionConfig,
    /// Key-frame image rendering
    pub rendering: RenderingConfig,
}

impl TechniqueConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        TECHNIQUE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load technique config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any value is outside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sampling.validate()?;
        self.validity.validate()?;
        self.detection.validate()?;
        self.rendering.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        let val = match env::var(env_var_name) {
            Ok(val) => val,
            Err(env::VarError::NotPresent) => return Ok(()),
            Err(error) => return Err(error.into()),
        };
        *target = val
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Sampling
        Self::apply_env_var(
            "LIFTLAB_SAMPLE_INTERVAL_SECS",
            &mut self.sampling.interval_secs,
        )?;
        Self::apply_env_var("LIFTLAB_MAX_FRAMES", &mut self.sampling.max_frames)?;

        // Detection
        Self::apply_env_var(
            "LIFTLAB_MIN_VALID_FRAMES",
            &mut self.detection.min_valid_frames,
        )?;
        Self::apply_env_var(
            "LIFTLAB_DEADLIFT_MIN_TRAVEL",
            &mut self.detection.deadlift_min_travel,
        )?;
        Self::apply_env_var(
            "LIFTLAB_PARALLEL_TOLERANCE",
            &mut self.detection.parallel_tolerance,
        )?;

        // Rendering
        Self::apply_env_var("LIFTLAB_RENDER_IMAGES", &mut self.rendering.enabled)?;
        Self::apply_env_var("LIFTLAB_IMAGE_FORMAT", &mut self.rendering.format)?;
        Self::apply_env_var("LIFTLAB_IMAGE_QUALITY", &mut self.rendering.quality)?;

        Ok(self)
    }
}

// ============================================================================
// Sub-Configurations
// ============================================================================

/// Frame sampling configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Seconds between sampled frames
    pub interval_secs: f64,
    /// Cap on samples per analysis
    pub max_frames: usize,
}

impl SamplingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !self.interval_secs.is_finite() || self.interval_secs < MIN_INTERVAL_SECS {
            return Err(ConfigError::ValueOutOfRange(
                "sampling interval_secs must be a positive finite number of seconds",
            ));
        }
        if self.max_frames == 0 {
            return Err(ConfigError::ValueOutOfRange("sampling max_frames must be > 0"));
        }
        Ok(())
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_INTERVAL_SECS,
            max_frames: DEFAULT_MAX_FRAMES,
        }
    }
}

/// Inclusive angle window in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleWindow {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl AngleWindow {
    /// Create a window from its bounds
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `angle` lies inside the window, bounds included
    #[must_use]
    pub fn contains(&self, angle: f64) -> bool {
        (self.min..=self.max).contains(&angle)
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let in_range = |v: f64| (0.0..=MAX_ANGLE_DEG).contains(&v);
        if !in_range(self.min) || !in_range(self.max) || self.min > self.max {
            return Err(ConfigError::InvalidRange(name));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for AngleWindow {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Plausibility windows for every exercise
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidityConfig {
    /// Squat windows
    pub squat: SquatWindows,
    /// Deadlift windows
    pub deadlift: DeadliftWindows,
    /// Overhead press windows
    pub press: PressWindows,
    /// Bent-over row windows
    pub row: RowWindows,
}

impl ValidityConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.squat.knee.validate("squat knee window")?;
        self.squat.alignment.validate("squat alignment window")?;
        self.squat.knee_search.validate("squat knee search window")?;
        self.deadlift.knee.validate("deadlift knee window")?;
        self.deadlift.hip.validate("deadlift hip window")?;
        self.press.elbow.validate("press elbow window")?;
        self.row.elbow.validate("row elbow window")
    }
}

/// Squat windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SquatWindows {
    /// Knee angle for a frame to exist
    pub knee: AngleWindow,
    /// Shoulder-hip-ankle alignment for a frame to exist
    pub alignment: AngleWindow,
    /// Knee angle for frames considered by the repetition search
    pub knee_search: AngleWindow,
}

impl Default for SquatWindows {
    fn default() -> Self {
        Self {
            knee: squat::KNEE_VALID.into(),
            alignment: squat::ALIGNMENT_VALID.into(),
            knee_search: squat::KNEE_SEARCH.into(),
        }
    }
}

/// Deadlift windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeadliftWindows {
    /// Knee angle for a frame to exist
    pub knee: AngleWindow,
    /// Hip angle for a frame to exist
    pub hip: AngleWindow,
}

impl Default for DeadliftWindows {
    fn default() -> Self {
        Self {
            knee: deadlift::KNEE_VALID.into(),
            hip: deadlift::HIP_VALID.into(),
        }
    }
}

/// Overhead press windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PressWindows {
    /// Elbow angle for a frame to exist
    pub elbow: AngleWindow,
}

impl Default for PressWindows {
    fn default() -> Self {
        Self {
            elbow: press::ELBOW_VALID.into(),
        }
    }
}

/// Bent-over row windows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowWindows {
    /// Elbow angle for a frame to exist
    pub elbow: AngleWindow,
}

impl Default for RowWindows {
    fn default() -> Self {
        Self {
            elbow: row::ELBOW_VALID.into(),
        }
    }
}

/// Repetition detection thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Fewest valid frames a repetition can be located from
    pub min_valid_frames: usize,
    /// Deadlift hip/shoulder travel below this is noise
    pub deadlift_min_travel: f64,
    /// Hip may sit this far above the knee and still break parallel
    pub parallel_tolerance: f64,
    /// Deadlift torso below this inclination is near horizontal
    pub near_horizontal_max_deg: f64,
}

impl DetectionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_valid_frames < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "detection min_valid_frames must be >= 2",
            ));
        }
        if !self.deadlift_min_travel.is_finite() || self.deadlift_min_travel < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "detection deadlift_min_travel must be >= 0",
            ));
        }
        if !self.parallel_tolerance.is_finite() || self.parallel_tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "detection parallel_tolerance must be >= 0",
            ));
        }
        if !(0.0..=MAX_ANGLE_DEG).contains(&self.near_horizontal_max_deg) {
            return Err(ConfigError::ValueOutOfRange(
                "detection near_horizontal_max_deg must be within [0, 180]",
            ));
        }
        Ok(())
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_valid_frames: thresholds::MIN_VALID_FRAMES,
            deadlift_min_travel: deadlift::MIN_TRAVEL,
            parallel_tolerance: squat::PARALLEL_TOLERANCE,
            near_horizontal_max_deg: deadlift::NEAR_HORIZONTAL_MAX_DEG,
        }
    }
}

/// Encoded image format for key-frame snapshots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Scalable vector graphics
    Svg,
    /// Portable network graphics
    Png,
    /// JPEG
    Jpeg,
    /// `WebP`
    Webp,
}

impl ImageFormat {
    /// MIME type used in data URIs
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Svg => "image/svg+xml",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Webp => "image/webp",
        }
    }

    /// Whether the format stores pixels rather than vector shapes
    #[must_use]
    pub const fn is_raster(self) -> bool {
        !matches!(self, Self::Svg)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Webp => "webp",
        })
    }
}

impl FromStr for ImageFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "webp" => Ok(Self::Webp),
            other => Err(ConfigError::Parse(format!("Unknown image format '{other}'"))),
        }
    }
}

/// Key-frame rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Render key-frame images at all
    pub enabled: bool,
    /// Encoded image format
    pub format: ImageFormat,
    /// Encoder quality in (0, 1]
    pub quality: f64,
}

impl RenderingConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.quality > 0.0 && self.quality <= 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "rendering quality must be within (0, 1]",
            ));
        }
        Ok(())
    }
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: ImageFormat::Svg,
            quality: DEFAULT_IMAGE_QUALITY,
        }
    }
}
