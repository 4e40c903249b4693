#![forbid(unsafe_code)]

//! Core domain model and business logic for the rpelog lift tracker.
//!
//! This crate provides:
//! - Domain types (exercises, RPE values, logged sets)
//! - The RPE chart and e1RM / target-weight formulas
//! - The per-session lift log
//! - CSV/JSON export, configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod rpe;
pub mod tracker;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, MonitorConfig};
pub use rpe::{estimate_max, rpe_factor, weight_for};
pub use tracker::LiftTracker;
pub use export::{export_to_path, write_csv, write_json};
