//! Command-line interface for hmmer-slicer.
//!
//! ## Usage
//!
//! ```text
//! # Extract the best hit of each exon profile from one genome
//! hmmer-slicer -t exon_*.tbl -f genome.fna -s Homo_sapiens
//!
//! # Several genomes, longer minimum length, 8 workers, separate output directory
//! hmmer-slicer -t hits/*.tbl -f genomes/*.fna.gz -s Mus_musculus -m 150 -n 8 -o exons/
//!
//! # Machine-readable run summary
//! hmmer-slicer -t exon_*.tbl -f genome.fna -s Homo_sapiens --format json
//! ```

use clap::Parser;

pub mod extract;

#[derive(Parser)]
#[command(name = "hmmer-slicer")]
#[command(version)]
#[command(about = "Slice best HMMER hits out of scaffold/genome FASTA files")]
#[command(
    long_about = "hmmer-slicer reads HMMER/nhmmer --tblout hit tables, keeps the best hit per locus \
(lowest E-value, then highest score) and writes the matching region of each scaffold to its own \
FASTA file, reverse-complemented for minus-strand hits.\n\nEach table must carry the \
'# Target file:' comment written by HMMER; its file name selects the scaffold file to slice from."
)]
pub struct Cli {
    #[command(flatten)]
    pub extract: extract::ExtractArgs,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Format of the run summary printed to stdout
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
