use clap::Parser;
use tracing_subscriber::EnvFilter;

use hmmer_slicer::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("hmmer_slicer=debug,info")
    } else {
        EnvFilter::new("hmmer_slicer=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    cli::extract::run(cli.extract, cli.format, cli.verbose)
}
