//! Loader for two-column `name,value` text files.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::records::Records;
use crate::validate;

/// A row that was skipped while loading, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRow {
    pub line: u64,
    pub fields: Vec<String>,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct LoadedRecords {
    pub records: Records,
    pub skipped: Vec<SkippedRow>,
}

/// Reads `name,value` rows from the file at `path`.
///
/// No header row is expected. Blank lines are ignored; rows with a missing
/// column, an empty name or an invalid value are skipped with a warning.
/// Columns past the second are ignored.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] if the file does not exist and
/// [`LoadError::Io`] for any other open failure.
pub fn load_records(path: &Path) -> Result<LoadedRecords, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let loaded = read_records(file).map_err(|source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        records = loaded.records.len(),
        skipped = loaded.skipped.len(),
        "Loaded records"
    );
    Ok(loaded)
}

/// Reads `name,value` rows from any reader. See [`load_records`].
pub fn read_records<R: Read>(reader: R) -> Result<LoadedRecords, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut loaded = LoadedRecords::default();
    let mut row = StringRecord::new();

    loop {
        match rdr.read_record(&mut row) {
            Ok(false) => break,
            Ok(true) => {}
            // Undecodable bytes spoil one row, not the whole file
            Err(e) if matches!(e.kind(), csv::ErrorKind::Utf8 { .. }) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                skip(&mut loaded, line, &row, e.to_string());
                continue;
            }
            Err(e) => return Err(e),
        }

        let line = row.position().map(|p| p.line()).unwrap_or(0);
        if row.iter().all(str::is_empty) {
            continue;
        }

        let (Some(name), Some(value)) = (row.get(0), row.get(1)) else {
            skip(&mut loaded, line, &row, "missing value column".to_string());
            continue;
        };

        match validate::record(name, value) {
            Ok(r) => {
                if let Some(previous) = loaded.records.insert(r.name.clone(), r.value) {
                    debug!(line, name = %r.name, previous, value = r.value, "Duplicate name overwritten");
                }
            }
            Err(e) => skip(&mut loaded, line, &row, e.to_string()),
        }
    }

    Ok(loaded)
}

fn skip(loaded: &mut LoadedRecords, line: u64, row: &StringRecord, reason: String) {
    let fields: Vec<String> = row.iter().map(str::to_string).collect();
    warn!(line, ?fields, %reason, "Skipping invalid row");
    loaded.skipped.push(SkippedRow {
        line,
        fields,
        reason,
    });
}
