use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::parsing::fasta::is_fasta_file;
use crate::pipeline::{self, ExtractConfig, RunSummary, DEFAULT_MIN_LENGTH};

#[derive(Args)]
pub struct ExtractArgs {
    /// Hit tables from HMMER (--tblout)
    #[arg(short = 't', long = "tables", required = true, num_args = 1..)]
    pub tables: Vec<PathBuf>,

    /// Scaffolds or genome sequences previously searched with HMMER
    #[arg(short = 'f', long = "scaffolds", required = true, num_args = 1..)]
    pub scaffolds: Vec<PathBuf>,

    /// Species name or label used as the header of every output record
    #[arg(short = 's', long = "species", required = true)]
    pub species: String,

    /// Minimum length of a hit, in bases
    #[arg(short = 'm', long = "min", default_value_t = DEFAULT_MIN_LENGTH)]
    pub min: u64,

    /// Number of worker threads
    #[arg(short = 'n', long = "threads", default_value = "1",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub threads: u64,

    /// Directory for the extracted sequences
    #[arg(short = 'o', long = "outdir", default_value = ".")]
    pub outdir: PathBuf,
}

impl ExtractArgs {
    #[must_use]
    pub fn config(&self) -> ExtractConfig {
        ExtractConfig {
            min_length: self.min,
            species: self.species.clone(),
            threads: usize::try_from(self.threads).unwrap_or(usize::MAX),
            output_dir: self.outdir.clone(),
        }
    }
}

/// Execute an extraction batch
///
/// # Errors
///
/// Returns an error if an input file cannot be read or output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    for path in &args.scaffolds {
        if !is_fasta_file(path) {
            warn!(
                "{} does not have a FASTA extension, reading it as FASTA anyway",
                path.display()
            );
        }
    }

    let summary = pipeline::run(&args.tables, &args.scaffolds, &args.config())?;

    if verbose {
        eprintln!(
            "Read {} tables: {} hits, {} loci, {} exported, {} skipped",
            summary.tables,
            summary.hits,
            summary.loci,
            summary.exported.len(),
            summary.skipped_hits
        );
    }

    match format {
        OutputFormat::Text => print_text_summary(&summary),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn print_text_summary(summary: &RunSummary) {
    for record in &summary.exported {
        println!(
            "{}\t{}\t{}\t{}\t{}",
            record.locus,
            record.id,
            record.strand,
            record.length,
            record.path.display()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_config_from_args() {
        let cli = Cli::try_parse_from([
            "hmmer-slicer", "-t", "a.tbl", "-f", "g.fna", "-s", "Danio_rerio", "-m", "150", "-n",
            "4", "-o", "out",
        ])
        .unwrap();

        let config = cli.extract.config();
        assert_eq!(config.min_length, 150);
        assert_eq!(config.species, "Danio_rerio");
        assert_eq!(config.threads, 4);
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }
}
