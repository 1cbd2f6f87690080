//! # hmmer-slicer
//!
//! A library for turning HMMER hit tables into extracted nucleotide sequences.
//!
//! Profile searches such as `nhmmer` against a set of scaffolds report where
//! each profile (an exon, a marker gene) lands in the genome. `hmmer-slicer`
//! keeps the best hit per profile and cuts the hit region out of the
//! scaffold it was found on, ready for downstream alignment.
//!
//! ## Features
//!
//! - **Best-hit selection**: lowest E-value per locus, bit score as tie-break
//! - **Strand awareness**: minus-strand hits are reverse-complemented, IUPAC codes included
//! - **Length filter**: short hits are dropped at parse time
//! - **Bounded parallelism**: table parsing and export run on a fixed-size worker pool
//! - **Atomic output**: each record is either fully written or absent
//!
//! ## Example
//!
//! ```rust,no_run
//! use hmmer_slicer::pipeline::{run, ExtractConfig};
//! use std::path::PathBuf;
//!
//! let config = ExtractConfig {
//!     species: "Homo_sapiens".to_string(),
//!     threads: 4,
//!     ..ExtractConfig::default()
//! };
//!
//! let summary = run(
//!     &[PathBuf::from("exon_1.tbl"), PathBuf::from("exon_2.tbl")],
//!     &[PathBuf::from("genome.fna")],
//!     &config,
//! )
//! .unwrap();
//!
//! for record in &summary.exported {
//!     println!("{} -> {}", record.locus, record.path.display());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Hit types, sequence store, reverse complement and slicing
//! - [`parsing`]: Hit table and FASTA parsers
//! - [`selection`]: Per-locus best-hit reduction
//! - [`pipeline`]: Batch orchestration and export
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod pipeline;
pub mod selection;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::hit::{HitRecord, ReducedHit, Span, Strand};
pub use crate::core::store::SequenceStore;
pub use crate::pipeline::{ExtractConfig, RunSummary};
pub use crate::selection::{reduce, ReferenceGroups};
