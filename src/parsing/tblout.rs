//! Parser for HMMER/nhmmer `--tblout` hit tables.
//!
//! A table is read in two passes: the first collects the `# Target file:`
//! comment and the first data line, the second turns that line into a hit
//! if its span reaches the minimum length. Upstream tables are already
//! reduced to their best hit, so any later rows are ignored.

use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::core::hit::{HitRecord, Span};

/// Comment that names the reference file a table was searched against
pub const TARGET_FILE_PREFIX: &str = "# Target file:";

/// Minimum number of whitespace-separated columns in a data line
pub const MIN_COLUMNS: usize = 14;

const COL_ID: usize = 0;
const COL_LOCUS: usize = 2;
const COL_ALI_FROM: usize = 6;
const COL_ALI_TO: usize = 7;
const COL_E_VALUE: usize = 12;
const COL_SCORE: usize = 13;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hit table format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Parse a hit table file and return the hit on its first data line.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::InvalidFormat` if the qualifying line is malformed.
pub fn parse_table(path: &Path, min_length: u64) -> Result<Option<HitRecord>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_table_text(&content, min_length)
}

/// Parse hit table text.
///
/// Returns `Ok(None)` when the table has no data line or its first data line
/// spans fewer than `min_length` bases.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the first data line has fewer than
/// [`MIN_COLUMNS`] columns, carries non-numeric or zero coordinates, a
/// non-numeric or NaN e-value or score, or if the line is long enough but
/// the table has no `# Target file:` comment.
pub fn parse_table_text(text: &str, min_length: u64) -> Result<Option<HitRecord>, ParseError> {
    let scan = TableScan::collect(text);

    let Some((line_num, line)) = scan.first_data_line else {
        return Ok(None);
    };

    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < MIN_COLUMNS {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has {} columns, expected at least {MIN_COLUMNS}",
            fields.len()
        )));
    }

    let span = Span::new(
        parse_position(fields[COL_ALI_FROM], line_num)?,
        parse_position(fields[COL_ALI_TO], line_num)?,
    );
    if span.len() < min_length {
        debug!(
            "Line {line_num}: hit {} on {} spans {} bp, below minimum {min_length}",
            fields[COL_ID],
            fields[COL_LOCUS],
            span.len()
        );
        return Ok(None);
    }

    let e_value = parse_float(fields[COL_E_VALUE], "E-value", line_num)?;
    let score = parse_float(fields[COL_SCORE], "score", line_num)?;

    let source_reference = scan.target_file.ok_or_else(|| {
        ParseError::InvalidFormat(format!("Missing '{TARGET_FILE_PREFIX}' comment"))
    })?;

    Ok(Some(HitRecord::new(
        fields[COL_LOCUS],
        fields[COL_ID],
        span,
        e_value,
        score,
        source_reference,
    )))
}

/// Metadata and the hit row of one table, gathered before any filtering
#[derive(Debug, Default)]
struct TableScan<'a> {
    target_file: Option<&'a str>,
    first_data_line: Option<(usize, &'a str)>,
}

impl<'a> TableScan<'a> {
    fn collect(text: &'a str) -> Self {
        let mut scan = Self::default();

        for (i, line) in text.lines().enumerate() {
            if line.starts_with('#') {
                if scan.target_file.is_none() {
                    scan.target_file = target_file_name(line);
                }
                continue;
            }
            if line.trim().is_empty() || scan.first_data_line.is_some() {
                continue;
            }
            // Line numbers in errors are 1-based for user friendliness
            scan.first_data_line = Some((i + 1, line));
        }

        scan
    }
}

/// Base filename of the path in a `# Target file: <path>` comment
fn target_file_name(line: &str) -> Option<&str> {
    let path = line.strip_prefix(TARGET_FILE_PREFIX)?.trim();
    if path.is_empty() {
        return None;
    }
    Path::new(path).file_name().and_then(|name| name.to_str())
}

fn parse_position(field: &str, line_num: usize) -> Result<u64, ParseError> {
    match field.parse::<u64>() {
        Ok(0) | Err(_) => Err(ParseError::InvalidFormat(format!(
            "Invalid coordinate on line {line_num}: '{field}'"
        ))),
        Ok(pos) => Ok(pos),
    }
}

fn parse_float(field: &str, name: &str, line_num: usize) -> Result<f64, ParseError> {
    match field.parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(ParseError::InvalidFormat(format!(
            "Invalid {name} on line {line_num}: '{field}'"
        ))),
    }
}
