//! Parsers for the two input kinds.
//!
//! - **Hit tables** ([`tblout`]): HMMER/nhmmer `--tblout` output, one best hit per table
//! - **Reference FASTA** ([`fasta`]): scaffold/genome files loaded into a
//!   [`SequenceStore`](crate::core::store::SequenceStore)
//!
//! ## Example
//!
//! ```rust,no_run
//! use hmmer_slicer::parsing::{fasta, tblout};
//! use std::path::Path;
//!
//! if let Some(hit) = tblout::parse_table(Path::new("exon_7.tbl"), 100).unwrap() {
//!     let store = fasta::load_sequence_store(Path::new(&hit.source_reference)).unwrap();
//!     println!("{} on {}: {:?}", hit.locus, hit.id, store.get(&hit.id).map(<[u8]>::len));
//! }
//! ```
//!
//! ## Hit Table Columns
//!
//! | Column | Field | Used as |
//! |--------|-------|---------|
//! | 0  | target name | `id` |
//! | 2  | query name  | `locus` |
//! | 6  | ali from    | `span.start` |
//! | 7  | ali to      | `span.end` |
//! | 12 | E-value     | `e_value` |
//! | 13 | score       | `score` |

pub mod fasta;
pub mod tblout;
