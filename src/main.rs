use clap::Parser;
use colored::*;
use diverse_domains::cli::{Cli, Commands};
use diverse_domains::DiverseError;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    // DIVERSE_DOMAINS_LOG wins, then RUST_LOG, then the -v count
    let default_level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = std::env::var("DIVERSE_DOMAINS_LOG")
        .ok()
        .and_then(|level| EnvFilter::try_new(level).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);

        let exit_code = match e.downcast_ref::<DiverseError>() {
            Some(DiverseError::Config(_)) => 2,
            Some(DiverseError::Io(_)) => 3,
            Some(DiverseError::Parse(_)) | Some(DiverseError::Classification(_)) => 4,
            Some(DiverseError::NoCandidates { .. }) => 5,
            _ => 1,
        };
        process::exit(exit_code);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Select(args) => diverse_domains::cli::commands::select::run(args),
        Commands::Identity(args) => diverse_domains::cli::commands::identity::run(args),
    }
}
