//! Gradebook analyzer session.

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::warn;

use crate::analyzers::types::GradeReport;
use crate::error::{InputError, LoadError, SessionError};
use crate::output::{log_json, write_grade_table};
use crate::parser::load_records;
use crate::prompt::Prompter;
use crate::records::Records;
use crate::report;
use crate::validate;

pub const BANNER: &str = "\
==========================================
         GradeBook Analyzer CLI
==========================================
Choose input method: manual entry or CSV import.
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Manual,
    Csv,
    Quit,
}

pub fn parse_source(input: &str) -> Result<Source, InputError> {
    match input.trim().to_lowercase().as_str() {
        "1" => Ok(Source::Manual),
        "2" => Ok(Source::Csv),
        "q" => Ok(Source::Quit),
        other => Err(InputError::UnknownChoice {
            input: other.to_string(),
        }),
    }
}

/// Reads students until a blank name is entered.
pub fn collect_students<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Records> {
    p.say("Manual entry mode. Enter students (blank name to stop).")?;

    let mut records = Records::new();
    loop {
        let name = p.line("Student name: ")?;
        if name.is_empty() {
            break;
        }
        let marks = p.until(&format!("Marks for {name}: "), validate::non_negative)?;
        records.insert(name, marks);
    }
    Ok(records)
}

/// Loads students from a CSV path typed by the user.
///
/// Returns `None` when the file is missing, unreadable or has no valid rows,
/// so the caller can go back to the source menu.
fn load_students<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<Option<Records>> {
    let path = p.line("Enter CSV file path (name,marks lines): ")?;

    let loaded = match load_records(Path::new(&path)) {
        Ok(loaded) => loaded,
        Err(LoadError::NotFound { .. }) => {
            p.say("CSV file not found.")?;
            return Ok(None);
        }
        Err(e) => {
            warn!(error = %e, "CSV load failed");
            p.say(&format!("Could not read CSV: {e}"))?;
            return Ok(None);
        }
    };

    for row in &loaded.skipped {
        p.say(&format!(
            "Skipping invalid row {}: [{}] ({})",
            row.line,
            row.fields.join(", "),
            row.reason
        ))?;
    }

    if loaded.records.is_empty() {
        p.say("No valid records found in CSV.")?;
        return Ok(None);
    }
    Ok(Some(loaded.records))
}

/// Runs one analysis. `default_output` is used when the user gives no
/// export file name.
///
/// Returns `None` if the user quit from the menu or entered no students.
pub fn run_once<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    default_output: &str,
) -> Result<Option<GradeReport>> {
    let records = loop {
        match p.until(
            "Choose (1) Manual entry  (2) Load CSV  (q) Quit : ",
            parse_source,
        )? {
            Source::Manual => break collect_students(p)?,
            Source::Csv => {
                if let Some(records) = load_students(p)? {
                    break records;
                }
            }
            Source::Quit => return Ok(None),
        }
    };

    let report = match GradeReport::from_records(records) {
        Ok(report) => report,
        Err(SessionError::NoData) => {
            p.say("No student data to analyze. Returning to main menu.")?;
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    log_json("grade_report", &report)?;

    p.say(&format!("\n{}", report::grade_summary(&report)))?;
    p.say(report::grade_table(&report).trim_end())?;
    p.say(&format!("\n{}", report::pass_fail(&report)))?;

    if p.confirm("Export final grade table to CSV? (yes/no): ")? {
        let answer = p.line("Enter output filename (e.g., result.csv): ")?;
        let file_name = if answer.is_empty() {
            default_output
        } else {
            answer.as_str()
        };

        match write_grade_table(Path::new(file_name), &report) {
            Ok(()) => p.say(&format!("Saved final table to {file_name}"))?,
            Err(e) => {
                warn!(error = %e, "Grade table export failed");
                p.say(&format!("Could not save the table: {e}"))?;
            }
        }
    }

    Ok(Some(report))
}
