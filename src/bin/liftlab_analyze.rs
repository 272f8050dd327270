// ABOUTME: Command-line harness replaying a recorded landmark track through the technique analyzer
// ABOUTME: Prints the analysis result JSON to stdout and exits non-zero on collaborator errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

//! Runs one technique analysis over a recorded track.
//!
//! Usage:
//! ```bash
//! # Analyse a squat recording
//! cargo run --bin liftlab-analyze -- --exercise squat --track recording.json
//!
//! # Skip key-frame images and pretty-print the result
//! cargo run --bin liftlab-analyze -- --exercise press --track press.json --no-images --pretty
//! ```

use anyhow::{anyhow, Result};
use clap::Parser;
use liftlab::logging::{LogFormat, LoggingConfig};
use liftlab::recorded::{RecordedProviderFactory, RecordedTrack, RecordedVideo};
use liftlab::visualizer::SvgCanvasFactory;
use liftlab::TechniqueAnalyzer;
use liftlab_core::models::Exercise;
use liftlab_intelligence::TechniqueConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "liftlab-analyze",
    about = "LiftLab exercise technique analysis",
    long_about = "Replay a recorded pose-landmark track through the technique pipeline and print the analysis result as JSON."
)]
struct AnalyzeArgs {
    /// Exercise performed in the recording (squat, deadlift, press, row)
    #[arg(long, short = 'e')]
    exercise: Exercise,

    /// Recorded track file (JSON)
    #[arg(long, short = 't')]
    track: PathBuf,

    /// Do not render key-frame images
    #[arg(long)]
    no_images: bool,

    /// Pretty-print the result
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = AnalyzeArgs::parse();

    let logging = LoggingConfig {
        level: if args.verbose { "debug" } else { "warn" }.to_owned(),
        format: LogFormat::Compact,
        ..LoggingConfig::from_env()
    };
    if let Err(e) = logging.init() {
        eprintln!("Logging setup failed: {e}");
    }

    match run(args).await {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Technique analysis failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: AnalyzeArgs) -> Result<String> {
    let mut config = TechniqueConfig::load()
        .map_err(|e| anyhow!("Invalid LIFTLAB_* configuration: {e}"))?;
    if args.no_images {
        config.rendering.enabled = false;
    }

    let track = Arc::new(
        RecordedTrack::load(&args.track)
            .await
            .map_err(|e| anyhow!("Failed to load track {}: {e}", args.track.display()))?,
    );

    let provider_factory = Arc::new(RecordedProviderFactory::new(Arc::clone(&track)));
    let analyzer =
        TechniqueAnalyzer::new(config, provider_factory)?.with_canvas(Arc::new(SvgCanvasFactory));
    let mut video = RecordedVideo::new(track);

    let result = analyzer.analyze(args.exercise, &mut video).await?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    Ok(json)
}
