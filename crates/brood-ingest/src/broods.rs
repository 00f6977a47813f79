//! Loading of the broods table from a CSV export.
//!
//! The export has one header row. Column names are matched
//! case-insensitively; only `mother_id` is required. Blank cells become
//! `None`, and rows without a `mother_id` are skipped.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use brood_core::normalize;
use brood_model::{LineageRecord, SetLabel};

use crate::error::{IngestError, Result};

const MOTHER_ID: &str = "mother_id";
const ORIGIN_MOTHER_ID: &str = "origin_mother_id";
const SET_LABEL: &str = "set_label";
const STATUS: &str = "status";
const BIRTH_DATE: &str = "birth_date";
const DEATH_DATE: &str = "death_date";
const BROOD_ORDINAL: &str = "brood_ordinal";
const ASSIGNED_PERSON: &str = "assigned_person";
const NOTES: &str = "notes";

/// Load every brood record from the CSV file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be opened, is not valid CSV, lacks a `mother_id`
/// column, or has a non-numeric brood ordinal. A `set_label` that is not a
/// single letter is logged and replaced by the letter of `mother_id`.
pub fn load_broods(path: &Path) -> Result<Vec<LineageRecord>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let records = read_broods(file, path)?;
    info!(path = %path.display(), records = records.len(), "loaded brood snapshot");
    Ok(records)
}

/// Parse brood records from any reader. `path` is only used in errors.
///
/// # Errors
///
/// See [`load_broods`].
pub fn read_broods<R: Read>(reader: R, path: &Path) -> Result<Vec<LineageRecord>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers().map_err(|e| csv_error(path, e))?;
    let columns = ColumnIndex::new(headers);
    if columns.position(MOTHER_ID).is_none() {
        return Err(IngestError::MissingColumn {
            column: MOTHER_ID.to_string(),
            path: path.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (offset, row) in csv_reader.records().enumerate() {
        let row = row.map_err(|e| csv_error(path, e))?;
        // Header is row 1.
        let row_number = offset + 2;
        match parse_row(&columns, &row, row_number, path)? {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        debug!(path = %path.display(), skipped, "skipped rows without mother_id");
    }
    Ok(records)
}

fn parse_row(
    columns: &ColumnIndex,
    row: &StringRecord,
    row_number: usize,
    path: &Path,
) -> Result<Option<LineageRecord>> {
    let Some(mother_id) = columns.cell(row, MOTHER_ID) else {
        return Ok(None);
    };

    let explicit_label = columns.cell(row, SET_LABEL).and_then(|value| {
        SetLabel::parse(&value)
            .inspect_err(|_| {
                warn!(
                    path = %path.display(),
                    row = row_number,
                    value = %value,
                    "set_label is not a single letter, using the mother_id letter"
                );
            })
            .ok()
    });
    let set_label = explicit_label.or_else(|| {
        normalize(&mother_id)
            .ok()
            .map(|(identifier, _)| identifier.set_label())
    });

    let brood_ordinal = match columns.cell(row, BROOD_ORDINAL) {
        Some(value) => Some(value.parse::<u32>().map_err(|_| IngestError::InvalidValue {
            field: BROOD_ORDINAL.to_string(),
            value,
            row: row_number,
            path: path.to_path_buf(),
        })?),
        None => None,
    };

    Ok(Some(LineageRecord {
        mother_id,
        origin_mother_id: columns.cell(row, ORIGIN_MOTHER_ID),
        set_label,
        status: columns.cell(row, STATUS),
        birth_date: columns.cell(row, BIRTH_DATE),
        death_date: columns.cell(row, DEATH_DATE),
        brood_ordinal,
        assigned_person: columns.cell(row, ASSIGNED_PERSON),
        notes: columns.cell(row, NOTES),
    }))
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    }
}

/// Case-insensitive header lookup.
struct ColumnIndex {
    positions: HashMap<String, usize>,
}

impl ColumnIndex {
    fn new(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.trim_start_matches('\u{feff}').trim().to_lowercase();
                (name, index)
            })
            .collect();
        Self { positions }
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Non-blank cell value of `name` in `row`.
    fn cell(&self, row: &StringRecord, name: &str) -> Option<String> {
        self.position(name)
            .and_then(|index| row.get(index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
    }
}
