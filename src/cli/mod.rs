pub mod commands;
pub mod formatter;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "diverse-domains",
    version,
    about = "Select diverse protein domains from SCOP/ASTRAL sequence sets",
    long_about = "Selects a small, maximally diverse subset of protein domain sequences by \
                  greedy farthest-point selection, using global-alignment sequence identity \
                  as the similarity measure."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select diverse domains from an ASTRAL FASTA file
    Select(commands::select::SelectArgs),

    /// Print the sequence identity of two residue strings
    Identity(commands::identity::IdentityArgs),
}
