use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

mod commands;

/// howlong - how long ago a UTC timestamp was, in human units
#[derive(Parser)]
#[command(name = "howlong")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show how long ago one or more RFC3339 timestamps were
    Elapsed(ElapsedArgs),
    /// Time since the wedding, addressed to someone
    Wedding(WeddingArgs),
    /// Print the GUI log file path
    LogPath,
}

#[derive(Args)]
struct ElapsedArgs {
    /// RFC3339 timestamps, e.g. 2023-08-23T00:00:00Z
    #[arg(required = true)]
    timestamps: Vec<String>,

    /// Compute against this RFC3339 instant instead of the current time
    #[arg(long)]
    at: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct WeddingArgs {
    /// Name to address the greeting to
    name: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Elapsed(args) => commands::elapsed::run(args),
        Commands::Wedding(args) => commands::wedding::run(args),
        Commands::LogPath => commands::log_path::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
