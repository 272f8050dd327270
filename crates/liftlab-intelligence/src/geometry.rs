// ABOUTME: Planar joint-angle geometry over normalized pose landmarks
// ABOUTME: Vertex angle, bearing-difference angle and torso inclination with per-exercise vertical reading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! # Geometry Kernel
//!
//! Pure functions over the `x`/`y` components of landmarks. Depth is ignored:
//! every angle is the 2-D projection seen by the camera. Results are degrees
//! rounded to one decimal, and no input makes these functions panic.

use liftlab_core::models::Landmark;
use serde::{Deserialize, Serialize};

/// Ray lengths below this are treated as coincident landmarks
const DEGENERATE_RAY_LENGTH: f64 = 1e-12;

/// Decimal rounding for reported measurements
pub trait RoundTo {
    /// Round to the given number of decimal places
    #[must_use]
    fn round_to(self, decimals: i32) -> Self;
}

impl RoundTo for f64 {
    fn round_to(self, decimals: i32) -> Self {
        let factor = 10_f64.powi(decimals);
        (self * factor).round() / factor
    }
}

/// Which torso orientation reads as 90 degrees
///
/// Exercises do not share one convention; each extractor declares its own so
/// reported torso angles keep their historical meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalReading {
    /// Upright spine reads 0, horizontal reads 90: `atan2(|dx|, |dy|)`
    Zero,
    /// Upright spine reads 90, horizontal reads 0: `atan2(|dy|, |dx|)`
    Ninety,
}

/// Angle at `vertex` between the rays towards `a` and `b`
///
/// Returns exactly 0 when either ray has zero length.
#[must_use]
pub fn angle_at(a: Landmark, vertex: Landmark, b: Landmark) -> f64 {
    let (v1x, v1y) = (a.x - vertex.x, a.y - vertex.y);
    let (v2x, v2y) = (b.x - vertex.x, b.y - vertex.y);

    let mag1 = v1x.hypot(v1y);
    let mag2 = v2x.hypot(v2y);
    if mag1 < DEGENERATE_RAY_LENGTH || mag2 < DEGENERATE_RAY_LENGTH {
        return 0.0;
    }

    let cos_angle = v1x.mul_add(v2x, v1y * v2y) / (mag1 * mag2);
    if !cos_angle.is_finite() {
        return 0.0;
    }
    cos_angle.clamp(-1.0, 1.0).acos().to_degrees().round_to(1)
}

/// Difference between the screen bearings of `vertex -> a` and `vertex -> b`
///
/// Bearings use `atan2` with the Y axis flipped so "up" on screen is positive.
/// The difference is folded into [0, 180]. Stable for near-colinear
/// torso/thigh configurations where the dot-product formula loses precision.
#[must_use]
pub fn flexion_bearing_angle(a: Landmark, vertex: Landmark, b: Landmark) -> f64 {
    let (v1x, v1y) = (a.x - vertex.x, a.y - vertex.y);
    let (v2x, v2y) = (b.x - vertex.x, b.y - vertex.y);
    if v1x.hypot(v1y) < DEGENERATE_RAY_LENGTH || v2x.hypot(v2y) < DEGENERATE_RAY_LENGTH {
        return 0.0;
    }

    let bearing_a = (-v1y).atan2(v1x).to_degrees();
    let bearing_b = (-v2y).atan2(v2x).to_degrees();

    let mut difference = (bearing_a - bearing_b).abs();
    if difference > 180.0 {
        difference = 360.0 - difference;
    }
    if !difference.is_finite() {
        return 0.0;
    }
    difference.round_to(1)
}

/// Inclination of the shoulder-hip segment
///
/// When `signed` is set the result is negated if the shoulder sits lower on
/// screen than the hip (an inverted torso). The magnitude does not depend on
/// argument order.
#[must_use]
pub fn torso_inclination(
    shoulder: Landmark,
    hip: Landmark,
    signed: bool,
    reading: VerticalReading,
) -> f64 {
    let dx = (shoulder.x - hip.x).abs();
    let dy = (shoulder.y - hip.y).abs();

    let magnitude = match reading {
        VerticalReading::Ninety => dy.atan2(dx),
        VerticalReading::Zero => dx.atan2(dy),
    }
    .to_degrees();
    if !magnitude.is_finite() {
        return 0.0;
    }

    let inclination = if signed && shoulder.y > hip.y {
        -magnitude
    } else {
        magnitude
    };
    inclination.round_to(1)
}
