//! Traceline CLI - Command-line interface
//!
//! This binary provides a command-line interface to the traceline library:
//! inspecting the severity table and emitting individual structured log
//! entries, mainly for pipeline use and for exercising a deployment's
//! logging configuration.

use clap::{Parser, Subcommand};

mod commands;
mod error;

use commands::emit::EmitArgs;

#[derive(Parser)]
#[command(name = "traceline")]
#[command(version = traceline::VERSION)]
#[command(about = "Emit structured JSON log entries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the severity table (numeric value, name, description)
    Levels,
    /// Emit a single log entry to standard output
    Emit(EmitArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Levels => commands::levels::run(),
        Command::Emit(args) => commands::emit::run(args),
    };

    if let Err(error) = result {
        error.exit();
    }
}
