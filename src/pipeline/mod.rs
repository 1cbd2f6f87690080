//! Batch extraction from hit tables to per-hit FASTA files.
//!
//! [`run`] drives one batch:
//!
//! 1. Parse every hit table on a worker pool and keep the tables that yield a hit
//! 2. Reduce to one hit per locus, grouped by reference file
//! 3. For each reference file, load its sequences once and export every hit
//!    of that group in parallel
//!
//! Failures are isolated to the smallest unit: a malformed table, an
//! unmatched reference, or a hit that cannot be sliced is logged and skipped.
//! Only an input file that cannot be read at all aborts the batch.

pub mod export;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::hit::HitRecord;
use crate::parsing::fasta::load_sequence_store;
use crate::parsing::tblout::{parse_table, ParseError};
use crate::selection::reduce;
use export::{export_hit, plan_exports, ExportedRecord};

/// Default minimum hit length in bases
pub const DEFAULT_MIN_LENGTH: u64 = 100;

/// Settings for one extraction batch
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Hits spanning fewer bases are discarded at parse time
    pub min_length: u64,
    /// Header written to every output record
    pub species: String,
    /// Worker pool size
    pub threads: usize,
    /// Directory receiving one file per exported hit
    pub output_dir: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            species: String::new(),
            threads: 1,
            output_dir: PathBuf::from("."),
        }
    }
}

/// What a batch produced
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Tables given as input
    pub tables: usize,
    /// Tables that yielded a qualifying hit
    pub hits: usize,
    /// Tables skipped because their content was malformed
    pub malformed_tables: usize,
    /// Distinct loci after reduction
    pub loci: usize,
    /// Records written, in reference then locus order
    pub exported: Vec<ExportedRecord>,
    /// Loci that were not exported
    pub skipped_hits: usize,
    /// Reference names from hit tables that matched no scaffold file
    pub unmatched_references: Vec<String>,
}

impl RunSummary {
    /// True when no table produced a hit
    #[must_use]
    pub fn is_empty_batch(&self) -> bool {
        self.hits == 0
    }
}

/// Run one extraction batch.
///
/// # Errors
///
/// Returns an error if the worker pool cannot be built, a table or reference
/// file cannot be read, or the output directory cannot be created.
pub fn run(
    tables: &[PathBuf],
    references: &[PathBuf],
    config: &ExtractConfig,
) -> anyhow::Result<RunSummary> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads.max(1))
        .build()
        .context("Failed to build worker pool")?;

    let mut summary = RunSummary {
        tables: tables.len(),
        ..RunSummary::default()
    };

    let parsed: Vec<Result<Option<HitRecord>, ParseError>> = pool.install(|| {
        tables
            .par_iter()
            .map(|path| parse_table(path, config.min_length))
            .collect()
    });

    let mut hits = Vec::new();
    for (path, result) in tables.iter().zip(parsed) {
        match result {
            Ok(Some(hit)) => hits.push(hit),
            Ok(None) => debug!("No qualifying hit in {}", path.display()),
            Err(ParseError::Io(e)) => {
                return Err(e).with_context(|| format!("Failed to read hit table {}", path.display()));
            }
            Err(e) => {
                warn!("Skipping hit table {}: {e}", path.display());
                summary.malformed_tables += 1;
            }
        }
    }

    summary.hits = hits.len();
    if hits.is_empty() {
        warn!("No hit found");
        return Ok(summary);
    }

    let groups = reduce(hits);
    summary.loci = groups.hit_count();
    info!(
        "{} loci kept from {} hits across {} reference(s)",
        summary.loci,
        summary.hits,
        groups.len()
    );

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    for (reference, jobs) in plan_exports(&groups) {
        info!("Slicing {reference}");

        let Some(path) = find_reference(references, reference) else {
            warn!("\"{reference}\" doesn't match with any scaffold name");
            summary.unmatched_references.push(reference.to_string());
            summary.skipped_hits += jobs.len();
            continue;
        };

        let store = match load_sequence_store(path) {
            Ok(store) => store,
            Err(ParseError::Io(e)) => {
                return Err(e).with_context(|| format!("Failed to read scaffolds {}", path.display()));
            }
            Err(e) => {
                warn!("Skipping scaffolds {}: {e}", path.display());
                summary.skipped_hits += jobs.len();
                continue;
            }
        };

        let outcomes: Vec<_> = pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    export_hit(&store, job, reference, &config.species, &config.output_dir)
                        .map_err(|e| (job.locus, e))
                })
                .collect()
        });

        for outcome in outcomes {
            match outcome {
                Ok(record) => {
                    debug!(
                        "Wrote {} ({} bp, {}) for locus {}",
                        record.path.display(),
                        record.length,
                        record.strand,
                        record.locus
                    );
                    summary.exported.push(record);
                }
                Err((locus, e)) => {
                    warn!("Skipping locus {locus} in {reference}: {e}");
                    summary.skipped_hits += 1;
                }
            }
        }
    }

    Ok(summary)
}

/// First reference path whose file name equals `name`
#[must_use]
pub fn find_reference<'a>(references: &'a [PathBuf], name: &str) -> Option<&'a Path> {
    references
        .iter()
        .find(|path| path.file_name().and_then(OsStr::to_str) == Some(name))
        .map(PathBuf::as_path)
}
