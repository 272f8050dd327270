// ABOUTME: Exercise enumeration for the four supported lift patterns
// ABOUTME: Handles parsing from user input (including short aliases) and display names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 LiftLab Training

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lift pattern being analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    /// Back or front squat
    Squat,
    /// Conventional deadlift
    Deadlift,
    /// Standing overhead press
    OverheadPress,
    /// Bent-over barbell row
    BentRow,
}

impl Exercise {
    /// Every supported exercise
    pub const ALL: [Self; 4] = [
        Self::Squat,
        Self::Deadlift,
        Self::OverheadPress,
        Self::BentRow,
    ];

    /// Stable machine identifier (matches the serde representation)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Deadlift => "deadlift",
            Self::OverheadPress => "overhead_press",
            Self::BentRow => "bent_row",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exercise {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "squat" | "sentadilla" => Ok(Self::Squat),
            "deadlift" | "peso_muerto" => Ok(Self::Deadlift),
            "overhead_press" | "press" | "ohp" | "military_press" => Ok(Self::OverheadPress),
            "bent_row" | "row" | "bent_over_row" | "remo" => Ok(Self::BentRow),
            other => Err(AppError::invalid_input(format!(
                "Unsupported exercise '{other}' (expected squat, deadlift, overhead_press or bent_row)"
            ))),
        }
    }
}
