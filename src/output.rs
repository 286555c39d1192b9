//! Persistence of finished sessions.
//!
//! Calorie sessions append a plain-text block to a fresh timestamped file;
//! grade reports overwrite a CSV table.

use anyhow::Result;
use chrono::{DateTime, TimeZone};
use csv::WriterBuilder;
use serde::Serialize;
use std::fmt::Display;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::analyzers::types::{CalorieSession, GradeReport};
use crate::error::ExportError;
use crate::report::{RULE, meal_line};

pub const DEFAULT_GRADEBOOK_OUTPUT: &str = "gradebook_output.csv";

/// Logs any serializable value as pretty-printed JSON at debug level.
pub fn log_json<T: Serialize>(label: &str, value: &T) -> Result<()> {
    debug!(label, "{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// File name for a calorie log captured at `captured_at`.
pub fn calorie_log_name<Tz: TimeZone>(captured_at: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    format!("calorie_log_{}.txt", captured_at.format("%Y%m%d_%H%M%S"))
}

/// Appends `session` as a text block to a timestamped file inside `dir`.
///
/// The file is opened in append mode so an existing log is never truncated.
/// Returns the path written.
pub fn write_calorie_log<Tz: TimeZone>(
    dir: &Path,
    session: &CalorieSession,
    captured_at: &DateTime<Tz>,
) -> Result<PathBuf, ExportError>
where
    Tz::Offset: Display,
{
    let path = dir.join(calorie_log_name(captured_at));
    let io_err = |source| ExportError::Io {
        path: path.clone(),
        source,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .map_err(io_err)?;

    let mut block = String::new();
    block.push_str("Calorie Tracker Log\n");
    block.push_str(&format!(
        "Timestamp: {}\n",
        captured_at.format("%Y-%m-%d %H:%M:%S")
    ));
    block.push_str(RULE);
    block.push('\n');
    for meal in session.meals() {
        block.push_str(&meal_line(&meal.name, meal.value));
        block.push('\n');
    }
    block.push_str(RULE);
    block.push('\n');
    block.push_str(&format!("Total Calories: {:.2}\n", session.total()));
    block.push_str(&format!("Average Calories: {:.2}\n", session.average()));
    block.push_str(&format!("Daily Limit: {:.2}\n", session.daily_limit()));
    block.push_str(&format!("Status: {}\n", session.status()));
    block.push('\n');

    file.write_all(block.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    info!(path = %path.display(), meals = session.meals().len(), "Calorie log saved");
    Ok(path)
}

/// Writes the final grade table to `path`, replacing any existing file.
///
/// Header `Name,Marks,Grade`, marks to two decimal places.
pub fn write_grade_table(path: &Path, report: &GradeReport) -> Result<(), ExportError> {
    let csv_err = |source| ExportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(csv_err)?;

    writer
        .write_record(["Name", "Marks", "Grade"])
        .map_err(csv_err)?;
    for (name, marks, grade) in report.rows() {
        let marks = format!("{marks:.2}");
        writer
            .write_record([name, marks.as_str(), grade.as_str()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), rows = report.records().len(), "Grade table saved");
    Ok(())
}
