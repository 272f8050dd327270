// ABOUTME: Analysis pipeline: frame sampling, result assembly and the analyzer entry point
// ABOUTME: Wires the numeric core to the video, pose and canvas ports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

/// Technique analyzer entry point
pub mod analyzer;
/// Outcome assembly
pub mod assembler;
/// Fixed-step frame sampling
pub mod sampler;

pub use analyzer::TechniqueAnalyzer;
pub use assembler::ResultAssembler;
pub use sampler::{FrameSampler, SampleStream, SampledFrame};
