//! Export of a session log.
//!
//! A one-way dump for spreadsheets or other tools; nothing is ever read back.
//! Paths ending in `.json` get a JSON array, everything else gets CSV.

use crate::{LoggedSet, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct CsvRow {
    index: usize,
    exercise: String,
    weight: f64,
    reps: u32,
    rpe: f64,
    estimated_max: f64,
    logged_at: String,
}

impl CsvRow {
    fn new(position: usize, set: &LoggedSet) -> Self {
        CsvRow {
            index: position + 1,
            exercise: set.exercise().name().to_string(),
            weight: set.weight(),
            reps: set.reps(),
            rpe: set.rpe().value(),
            estimated_max: set.estimated_max(),
            logged_at: set.logged_at().to_rfc3339(),
        }
    }
}

/// Write sets as CSV (with headers) to any writer
pub fn write_csv<W: Write>(sets: &[LoggedSet], writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);

    if sets.is_empty() {
        // serialize() only emits headers alongside the first record
        writer.write_record([
            "index",
            "exercise",
            "weight",
            "reps",
            "rpe",
            "estimated_max",
            "logged_at",
        ])?;
    }

    for (position, set) in sets.iter().enumerate() {
        writer.serialize(CsvRow::new(position, set))?;
    }

    writer.flush()?;
    Ok(())
}

/// Write sets as a pretty-printed JSON array
pub fn write_json<W: Write>(sets: &[LoggedSet], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, sets)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Export sets to a file, creating parent directories as needed
///
/// Returns the number of sets written.
pub fn export_to_path(sets: &[LoggedSet], path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        write_json(sets, file)?;
    } else {
        write_csv(sets, file)?;
    }

    tracing::info!("Exported {} sets to {:?}", sets.len(), path);
    Ok(sets.len())
}
