//! Teacher CLI - query the rule-based tic-tac-toe teacher
//!
//! - `choose`: ask for one move on a board
//! - `sample`: draw many moves and compare against the exact distribution
//! - `rules`: list the decision hierarchy

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "teacher")]
#[command(version, about = "Rule-based tic-tac-toe teacher", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a move for a board
    Choose(ttt_teacher::cli::commands::choose::ChooseArgs),

    /// Sample many moves on one board
    Sample(ttt_teacher::cli::commands::sample::SampleArgs),

    /// List the rules in priority order
    Rules(ttt_teacher::cli::commands::rules::RulesArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Choose(args) => ttt_teacher::cli::commands::choose::execute(args),
        Commands::Sample(args) => ttt_teacher::cli::commands::sample::execute(args),
        Commands::Rules(args) => ttt_teacher::cli::commands::rules::execute(args),
    }
}
