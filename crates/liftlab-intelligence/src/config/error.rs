// ABOUTME: Configuration error types for technique configuration validation
// ABOUTME: Defines error variants for invalid ranges, parse failures and bad windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! Configuration error types for technique configuration validation.

use liftlab_core::errors::{AppError, ErrorCode};
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Window bounds inverted or outside [0, 180]
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Override present but not valid unicode
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] env::VarError),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        let converted = match error {
            ConfigError::EnvVar(_) => Self::new(ErrorCode::ConfigError, error.to_string()),
            _ => Self::config(error.to_string()),
        };
        converted.with_source(error)
    }
}
