// ABOUTME: Fixed 33-point pose landmark index scheme and the skeleton connection graph
// ABOUTME: Indices follow the external pose detector; the pipeline only ever reads them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

/// Number of landmarks in every detection
pub const LANDMARK_COUNT: usize = 33;

/// Nose
pub const NOSE: usize = 0;
/// Left shoulder
pub const LEFT_SHOULDER: usize = 11;
/// Right shoulder
pub const RIGHT_SHOULDER: usize = 12;
/// Left elbow
pub const LEFT_ELBOW: usize = 13;
/// Right elbow
pub const RIGHT_ELBOW: usize = 14;
/// Left wrist
pub const LEFT_WRIST: usize = 15;
/// Right wrist
pub const RIGHT_WRIST: usize = 16;
/// Left hip
pub const LEFT_HIP: usize = 23;
/// Right hip
pub const RIGHT_HIP: usize = 24;
/// Left knee
pub const LEFT_KNEE: usize = 25;
/// Right knee
pub const RIGHT_KNEE: usize = 26;
/// Left ankle
pub const LEFT_ANKLE: usize = 27;
/// Right ankle
pub const RIGHT_ANKLE: usize = 28;
/// Left foot index
pub const LEFT_FOOT: usize = 31;
/// Right foot index
pub const RIGHT_FOOT: usize = 32;

/// Skeleton connections drawn on key-frame snapshots (pairs of landmark indices)
pub const SKELETON_CONNECTIONS: [(usize, usize); 14] = [
    (LEFT_SHOULDER, RIGHT_SHOULDER),
    (LEFT_SHOULDER, LEFT_HIP),
    (RIGHT_SHOULDER, RIGHT_HIP),
    (LEFT_HIP, RIGHT_HIP),
    (LEFT_HIP, LEFT_KNEE),
    (LEFT_KNEE, LEFT_ANKLE),
    (LEFT_ANKLE, LEFT_FOOT),
    (RIGHT_HIP, RIGHT_KNEE),
    (RIGHT_KNEE, RIGHT_ANKLE),
    (RIGHT_ANKLE, RIGHT_FOOT),
    (LEFT_SHOULDER, LEFT_ELBOW),
    (LEFT_ELBOW, LEFT_WRIST),
    (RIGHT_SHOULDER, RIGHT_ELBOW),
    (RIGHT_ELBOW, RIGHT_WRIST),
];

/// Joints marked with a circle on key-frame snapshots
pub const SKELETON_JOINTS: [usize; 14] = [
    LEFT_SHOULDER,
    RIGHT_SHOULDER,
    LEFT_ELBOW,
    RIGHT_ELBOW,
    LEFT_WRIST,
    RIGHT_WRIST,
    LEFT_HIP,
    RIGHT_HIP,
    LEFT_KNEE,
    RIGHT_KNEE,
    LEFT_ANKLE,
    RIGHT_ANKLE,
    LEFT_FOOT,
    RIGHT_FOOT,
];
