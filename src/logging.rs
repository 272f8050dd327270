// ABOUTME: Logging configuration and structured logging setup for the analysis pipeline
// ABOUTME: Configures log levels, formatters and the structured analysis summary event
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! Logging configuration with structured output

use anyhow::Result;
use liftlab_core::constants::service_names;
use liftlab_core::models::{AnalysisResult, ExerciseOutcome, OutcomeStatus};
use serde_json::json;
use std::env;
use std::error::Error;
use std::io;
use tracing::{info, warn, Level};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty, compact)
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread information
    pub include_thread: bool,
    /// Emit span open/close events
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// `JSON` format for machine consumption
    Json,
    /// Pretty format for development
    Pretty,
    /// Compact format for terminals
    Compact,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: service_names::LIFTLAB_ANALYZER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let level = env::var("RUST_LOG").unwrap_or_else(|_| "info".into());

        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        Self {
            level,
            format,
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
            include_thread: env::var("LOG_INCLUDE_THREAD").is_ok(),
            include_spans: env::var("LOG_INCLUDE_SPANS").is_ok(),
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| service_names::LIFTLAB_ANALYZER.into()),
            service_version: env::var("SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_owned()),
        }
    }

    /// Build the filter: `RUST_LOG` when set, otherwise the configured level
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        env::var("RUST_LOG")
            .map_or_else(
                |_| EnvFilter::new(&self.level),
                |env_directive| EnvFilter::new(&env_directive),
            )
            .add_directive(
                format!("liftlab={}", self.level)
                    .parse()
                    .unwrap_or_else(|_| Level::INFO.into()),
            )
    }

    /// Initialize the global tracing subscriber
    ///
    /// Logs go to stderr so the CLI can keep stdout for the analysis JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber was already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let span_events = if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        };

        match self.format {
            LogFormat::Json => {
                let json_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events)
                    .json();

                registry.with(json_layer).try_init()?;
            }
            LogFormat::Pretty => {
                let pretty_layer = fmt::layer()
                    .with_file(self.include_location)
                    .with_line_number(self.include_location)
                    .with_thread_ids(self.include_thread)
                    .with_thread_names(self.include_thread)
                    .with_target(true)
                    .with_writer(io::stderr)
                    .with_span_events(span_events);

                registry.with(pretty_layer).try_init()?;
            }
            LogFormat::Compact => {
                let compact_layer = fmt::layer()
                    .compact()
                    .with_file(false)
                    .with_line_number(false)
                    .with_target(false)
                    .with_writer(io::stderr)
                    .with_span_events(FmtSpan::NONE);

                registry.with(compact_layer).try_init()?;
            }
        }

        self.log_startup_info();
        Ok(())
    }

    fn log_startup_info(&self) {
        let config_summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "features": {
                    "location": self.include_location,
                    "thread": self.include_thread,
                    "spans": self.include_spans
                }
            }
        });

        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            config = %config_summary,
            "Logging initialized"
        );
    }
}

/// Application-specific logging utilities
pub struct AppLogger;

impl AppLogger {
    /// Log the summary of a finished analysis
    pub fn log_analysis_outcome(result: &AnalysisResult, duration_ms: u64) {
        let (valid_frames, amplitude, duration_secs) = Self::summary(&result.outcome);
        let status = result.status();

        if status == OutcomeStatus::Metrics {
            info!(
                analysis.id = %result.analysis_id,
                analysis.exercise = %result.exercise(),
                analysis.status = %status,
                analysis.valid_frames = valid_frames,
                rep.amplitude = amplitude,
                rep.duration_secs = duration_secs,
                analysis.duration_ms = duration_ms,
                "Technique analysis finished"
            );
        } else {
            info!(
                analysis.id = %result.analysis_id,
                analysis.exercise = %result.exercise(),
                analysis.status = %status,
                analysis.duration_ms = duration_ms,
                "Technique analysis finished without metrics"
            );
        }
    }

    /// Log a collaborator failure that aborted an analysis
    pub fn log_collaborator_failure(collaborator: &str, error: &dyn Error) {
        warn!(
            collaborator = %collaborator,
            error = %error,
            "Collaborator failure"
        );
    }

    fn summary(outcome: &ExerciseOutcome) -> (usize, f64, f64) {
        macro_rules! metrics {
            ($outcome:expr) => {
                $outcome.report().map_or((0, 0.0, 0.0), |report| {
                    (
                        report.valid_frame_count,
                        report.repetition.amplitude,
                        report.repetition.duration_secs,
                    )
                })
            };
        }
        match outcome {
            ExerciseOutcome::Squat(outcome) => metrics!(outcome),
            ExerciseOutcome::Deadlift(outcome) => metrics!(outcome),
            ExerciseOutcome::OverheadPress(outcome) => metrics!(outcome),
            ExerciseOutcome::BentRow(outcome) => metrics!(outcome),
        }
    }
}
