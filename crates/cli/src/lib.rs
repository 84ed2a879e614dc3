pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "growthdesk",
    about = "Growthdesk operator CLI",
    long_about = "Run the ROI and marketing health engines offline, inspect configuration, and check readiness.",
    after_help = "Examples:\n  growthdesk roi --input roi.json\n  growthdesk health --input survey.json\n  growthdesk doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Project revenue and ROI from a JSON request body")]
    Roi {
        #[arg(long, help = "Path to a ROI calculator request (camelCase JSON)")]
        input: PathBuf,
    },
    #[command(about = "Score a marketing health survey from a JSON request body")]
    Health {
        #[arg(long, help = "Path to a health survey request (camelCase JSON)")]
        input: PathBuf,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config and run engine self-checks")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Roi { input } => commands::roi::run(&input),
        Command::Health { input } => commands::health::run(&input),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
