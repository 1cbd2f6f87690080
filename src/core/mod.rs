//! Core data types and sequence operations.
//!
//! - [`HitRecord`](hit::HitRecord): one qualifying hit-table row plus its reference file
//! - [`ReducedHit`](hit::ReducedHit): a per-locus winner without its grouping keys
//! - [`Span`](hit::Span), [`Strand`](hit::Strand): 1-based coordinates and strand
//! - [`SequenceStore`](store::SequenceStore): record name to sequence map for one reference
//! - [`sequence`]: reverse complement and strand-aware slicing
//!
//! ## Coordinates
//!
//! Spans are kept exactly as the search tool reports them. A hit on the minus
//! strand has `start > end`:
//!
//! | Strand | Columns 6/7 | Extracted |
//! |--------|-------------|-----------|
//! | +      | 100 250     | bases 100..=250 |
//! | -      | 250 100     | reverse complement of bases 100..=250 |

pub mod hit;
pub mod sequence;
pub mod store;
