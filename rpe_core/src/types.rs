//! Core domain types for the RPE lift tracker.
//!
//! This module defines:
//! - Exercises available for logging
//! - RPE (rate of perceived exertion) values
//! - Logged sets and personal-best summaries

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Exercise
// ============================================================================

/// A competition lift that can be logged
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Exercise {
    Squat,
    Bench,
    Deadlift,
}

impl Exercise {
    /// All exercises, in display order
    pub const ALL: [Exercise; 3] = [Exercise::Squat, Exercise::Bench, Exercise::Deadlift];

    pub fn name(&self) -> &'static str {
        match self {
            Exercise::Squat => "Squat",
            Exercise::Bench => "Bench",
            Exercise::Deadlift => "Deadlift",
        }
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Exercise {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "squat" => Ok(Exercise::Squat),
            "bench" => Ok(Exercise::Bench),
            "deadlift" => Ok(Exercise::Deadlift),
            other => Err(Error::Parse(format!(
                "unknown exercise '{}' (expected squat, bench or deadlift)",
                other
            ))),
        }
    }
}

// ============================================================================
// RPE
// ============================================================================

/// Rate of perceived exertion for a set
///
/// Any value is representable; only the chart levels have a dedicated
/// factor; everything else falls back to the default at lookup time.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct Rpe(pub f64);

impl Rpe {
    /// Levels offered for selection, lowest first
    pub const CHART_LEVELS: [Rpe; 9] = [
        Rpe(6.0),
        Rpe(6.5),
        Rpe(7.0),
        Rpe(7.5),
        Rpe(8.0),
        Rpe(8.5),
        Rpe(9.0),
        Rpe(9.5),
        Rpe(10.0),
    ];

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rpe {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<f64>()
            .map(Rpe)
            .map_err(|_| Error::Parse(format!("invalid RPE '{}'", s.trim())))
    }
}

// ============================================================================
// Logged sets
// ============================================================================

/// A single logged set with its estimated one-rep max
///
/// Fields are private so the estimate can never drift from the inputs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LoggedSet {
    id: Uuid,
    exercise: Exercise,
    weight: f64,
    reps: u32,
    rpe: Rpe,
    estimated_max: f64,
    logged_at: DateTime<Utc>,
}

impl LoggedSet {
    /// Create a set, computing its e1RM immediately
    pub fn new(exercise: Exercise, weight: f64, reps: u32, rpe: Rpe) -> Self {
        Self {
            id: Uuid::new_v4(),
            exercise,
            weight,
            reps,
            rpe,
            estimated_max: crate::rpe::estimate_max(weight, reps, rpe),
            logged_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    pub fn rpe(&self) -> Rpe {
        self.rpe
    }

    pub fn estimated_max(&self) -> f64 {
        self.estimated_max
    }

    pub fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

/// Best set for one exercise
#[derive(Clone, Debug, PartialEq)]
pub struct PersonalBest {
    pub exercise: Exercise,
    pub set: LoggedSet,
}
