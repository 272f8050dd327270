// ABOUTME: Shared test helpers for the technique pipeline integration tests
// ABOUTME: Exports synthetic landmark generation and in-memory collaborator doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod synthetic_landmarks;
pub mod test_doubles;
