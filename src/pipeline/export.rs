//! Per-hit export: output naming, slicing and atomic record writes.

use std::collections::{BTreeMap, HashSet};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::core::hit::{ReducedHit, Strand};
use crate::core::sequence::{slice, SequenceError};
use crate::core::store::SequenceStore;
use crate::selection::ReferenceGroups;
use crate::utils::validation::{validate_filename, ValidationError};

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("No record named '{0}' in the reference")]
    UnmatchedRecord(String),

    #[error("Cannot name output after '{id}': {source}")]
    InvalidName {
        id: String,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One hit scheduled for export, with its output file name already decided
#[derive(Debug)]
pub struct ExportJob<'a> {
    pub locus: &'a str,
    pub hit: &'a ReducedHit,
    pub file_name: Result<String, ValidationError>,
}

/// A record that was written to disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedRecord {
    pub locus: String,
    pub id: String,
    pub reference: String,
    pub path: PathBuf,
    pub length: usize,
    pub strand: Strand,
}

/// Decide every output file name before anything is written.
///
/// Files are named after the hit id. When two loci win with the same id, the
/// first one (in group order) keeps `<id>` and later ones get `<id>_<locus>`.
#[must_use]
pub fn plan_exports(groups: &ReferenceGroups) -> BTreeMap<&str, Vec<ExportJob<'_>>> {
    let mut used: HashSet<String> = HashSet::new();
    let mut plan: BTreeMap<&str, Vec<ExportJob<'_>>> = BTreeMap::new();

    for (reference, hits) in groups.iter() {
        let jobs: Vec<ExportJob<'_>> = hits
            .iter()
            .map(|locus_hit| {
                let file_name = validate_filename(&locus_hit.hit.id)
                    .map(|name| unique_name(name, &locus_hit.locus, &mut used));
                ExportJob {
                    locus: &locus_hit.locus,
                    hit: &locus_hit.hit,
                    file_name,
                }
            })
            .collect();
        plan.insert(reference, jobs);
    }

    plan
}

fn unique_name(name: String, locus: &str, used: &mut HashSet<String>) -> String {
    if used.insert(name.clone()) {
        return name;
    }

    let base = validate_filename(&format!("{name}_{locus}")).unwrap_or_else(|_| name.clone());
    let mut candidate = base.clone();
    let mut n = 2;
    while !used.insert(candidate.clone()) {
        candidate = format!("{base}_{n}");
        n += 1;
    }

    warn!("Output '{name}' is already taken, writing locus {locus} to '{candidate}'");
    candidate
}

/// Slice one hit out of `store` and write it to `output_dir`.
///
/// # Errors
///
/// Returns `ExportError::InvalidName` if the job has no usable file name,
/// `ExportError::UnmatchedRecord` if the store has no record named after the
/// hit, `ExportError::Sequence` if slicing fails, or `ExportError::Io` if the
/// record cannot be written.
pub fn export_hit(
    store: &SequenceStore,
    job: &ExportJob<'_>,
    reference: &str,
    species: &str,
    output_dir: &Path,
) -> Result<ExportedRecord, ExportError> {
    let file_name = job
        .file_name
        .as_ref()
        .map_err(|e| ExportError::InvalidName {
            id: job.hit.id.clone(),
            source: e.clone(),
        })?;

    let sequence = store
        .get(&job.hit.id)
        .ok_or_else(|| ExportError::UnmatchedRecord(job.hit.id.clone()))?;
    let region = slice(sequence, job.hit.span, job.hit.is_reverse)?;

    let path = output_dir.join(file_name);
    write_record(&path, species, &region)?;

    Ok(ExportedRecord {
        locus: job.locus.to_string(),
        id: job.hit.id.clone(),
        reference: reference.to_string(),
        path,
        length: region.len(),
        strand: job.hit.strand(),
    })
}

/// Write a single FASTA record to `path`.
///
/// The record goes to a temporary file in the same directory first and is
/// then renamed over `path`, so readers never see a partial record.
///
/// # Errors
///
/// Returns an IO error if the temporary file cannot be created, written or
/// renamed.
pub fn write_record(path: &Path, header: &str, sequence: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".hmmer-slicer-")
        .tempfile_in(dir)?;
    {
        let mut writer = BufWriter::new(temp.as_file_mut());
        writeln!(writer, ">{header}")?;
        writer.write_all(sequence)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
