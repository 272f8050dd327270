// ABOUTME: Plausibility windows and repetition thresholds for the four lift patterns
// ABOUTME: Angles in degrees, positions in normalized screen units (y grows downward)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

/// Fewest valid frames a repetition can be located from
pub const MIN_VALID_FRAMES: usize = 10;

/// Squat frame validity and search windows
pub mod squat {
    /// Knee angle window for a frame to exist
    pub const KNEE_VALID: (f64, f64) = (30.0, 180.0);
    /// Shoulder-hip-ankle alignment window for a frame to exist
    pub const ALIGNMENT_VALID: (f64, f64) = (30.0, 180.0);
    /// Knee angle window for frames considered by the repetition search
    pub const KNEE_SEARCH: (f64, f64) = (40.0, 170.0);
    /// Hip may sit this far above the knee and still count as breaking parallel
    pub const PARALLEL_TOLERANCE: f64 = 0.02;
}

/// Deadlift frame validity and rejection thresholds
pub mod deadlift {
    /// Knee angle window for a frame to exist
    pub const KNEE_VALID: (f64, f64) = (20.0, 180.0);
    /// Hip angle window for a frame to exist
    pub const HIP_VALID: (f64, f64) = (20.0, 180.0);
    /// Minimum hip or shoulder travel for the movement to count as a repetition
    pub const MIN_TRAVEL: f64 = 0.02;
    /// Torso below this inclination at the start is reported as near horizontal
    pub const NEAR_HORIZONTAL_MAX_DEG: f64 = 20.0;
}

/// Overhead press frame validity
pub mod press {
    /// Elbow angle window for a frame to exist
    pub const ELBOW_VALID: (f64, f64) = (30.0, 180.0);
}

/// Bent-over row frame validity
pub mod row {
    /// Elbow angle window for a frame to exist
    pub const ELBOW_VALID: (f64, f64) = (30.0, 180.0);
}
