// ABOUTME: Integration tests for planar joint-angle geometry
// ABOUTME: Covers vertex angle properties, bearing-difference folding and torso readings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftlab_core::models::Landmark;
use liftlab_intelligence::{
    angle_at, flexion_bearing_angle, torso_inclination, RoundTo, VerticalReading,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

fn point(x: f64, y: f64) -> Landmark {
    Landmark::new(x, y, 0.0)
}

fn random_point(rng: &mut ChaCha8Rng) -> Landmark {
    point(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0))
}

// ============================================================================
// Vertex Angle
// ============================================================================

#[test]
fn test_angle_at_is_symmetric_and_bounded() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..500 {
        let (a, vertex, b) = (
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );
        let forward = angle_at(a, vertex, b);
        let backward = angle_at(b, vertex, a);
        assert!((forward - backward).abs() < 1e-9, "{forward} != {backward}");
        assert!((0.0..=180.0).contains(&forward), "out of range: {forward}");
    }
}

#[test]
fn test_angle_at_degenerate_rays_read_zero() {
    let vertex = point(0.3, 0.7);
    assert!(angle_at(vertex, vertex, point(0.9, 0.9)).abs() < f64::EPSILON);
    assert!(angle_at(point(0.1, 0.1), vertex, vertex).abs() < f64::EPSILON);
}

#[test]
fn test_angle_at_rounds_to_one_decimal() {
    let angle = angle_at(point(0.0, 0.0), point(0.5, 0.5), point(0.9, 0.45));
    assert!((angle - angle.round_to(1)).abs() < f64::EPSILON);
}

#[test]
fn test_angle_at_ignores_depth() {
    let flat = angle_at(point(0.2, 0.2), point(0.5, 0.5), point(0.8, 0.2));
    let deep = angle_at(
        Landmark::new(0.2, 0.2, -0.4),
        Landmark::new(0.5, 0.5, 0.3),
        Landmark::new(0.8, 0.2, 0.9),
    );
    assert!((flat - 90.0).abs() < f64::EPSILON);
    assert!((flat - deep).abs() < f64::EPSILON);
}

#[test]
fn test_non_finite_landmark_reads_zero() {
    let angle = angle_at(point(f64::NAN, 0.1), point(0.5, 0.5), point(0.9, 0.9));
    assert!(angle.abs() < f64::EPSILON);
}

// ============================================================================
// Bearing Difference
// ============================================================================

#[test]
fn test_flexion_bearing_matches_vertex_angle_for_simple_cases() {
    let vertex = point(0.5, 0.5);
    let up = point(0.5, 0.2);
    let right = point(0.8, 0.5);
    let down = point(0.5, 0.8);
    assert!((flexion_bearing_angle(up, vertex, right) - 90.0).abs() < f64::EPSILON);
    assert!((flexion_bearing_angle(up, vertex, down) - 180.0).abs() < f64::EPSILON);
}

#[test]
fn test_flexion_bearing_stays_within_half_turn() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..500 {
        let angle = flexion_bearing_angle(
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );
        assert!((0.0..=180.0).contains(&angle), "out of range: {angle}");
    }
}

// ============================================================================
// Torso Inclination
// ============================================================================

#[test]
fn test_upright_torso_readings() {
    let hip = point(0.5, 0.6);
    let shoulder = point(0.5, 0.3);
    let ninety = torso_inclination(shoulder, hip, false, VerticalReading::Ninety);
    let zero = torso_inclination(shoulder, hip, false, VerticalReading::Zero);
    assert!((ninety - 90.0).abs() < f64::EPSILON);
    assert!(zero.abs() < f64::EPSILON);
}

#[test]
fn test_horizontal_torso_readings() {
    let hip = point(0.4, 0.5);
    let shoulder = point(0.7, 0.5);
    let ninety = torso_inclination(shoulder, hip, false, VerticalReading::Ninety);
    let zero = torso_inclination(shoulder, hip, false, VerticalReading::Zero);
    assert!(ninety.abs() < f64::EPSILON);
    assert!((zero - 90.0).abs() < f64::EPSILON);
}

#[test]
fn test_signed_inclination_negative_when_shoulder_below_hip() {
    let hip = point(0.4, 0.5);
    let shoulder = point(0.7, 0.6);
    let signed = torso_inclination(shoulder, hip, true, VerticalReading::Ninety);
    let unsigned = torso_inclination(shoulder, hip, false, VerticalReading::Ninety);
    assert!(signed < 0.0);
    assert!((signed + unsigned).abs() < f64::EPSILON);
}

#[test]
fn test_swapped_arguments_keep_unsigned_magnitude() {
    let hip = point(0.45, 0.62);
    let shoulder = point(0.55, 0.31);
    let forward = torso_inclination(shoulder, hip, false, VerticalReading::Ninety);
    let swapped = torso_inclination(hip, shoulder, false, VerticalReading::Ninety);
    assert!((forward - swapped).abs() < f64::EPSILON);
}
