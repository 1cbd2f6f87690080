//! Best-hit selection across hit tables.
//!
//! Each table contributes at most one hit. Several tables can report the same
//! locus (for example one table per genome chunk), so [`reduce`] keeps a
//! single winner per locus and regroups the winners by the reference file
//! they must be sliced from.
//!
//! ## Tie-break
//!
//! 1. Lower E-value wins
//! 2. On exactly equal E-values, higher bit score wins
//! 3. On a full tie, the hit seen first is kept
//!
//! ## Example
//!
//! ```rust
//! use hmmer_slicer::core::hit::{HitRecord, Span};
//! use hmmer_slicer::selection::reduce;
//!
//! let groups = reduce(vec![
//!     HitRecord::new("exon_1", "scaf_1", Span::new(100, 250), 1e-10, 50.0, "genome.fna"),
//!     HitRecord::new("exon_1", "scaf_2", Span::new(300, 500), 1e-5, 80.0, "genome.fna"),
//! ]);
//!
//! let hits = groups.get("genome.fna").unwrap();
//! assert_eq!(hits[0].hit.id, "scaf_1");
//! ```

pub mod best_hit;

pub use best_hit::{reduce, LocusHit, ReferenceGroups};
