//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use traceline::config::ConfigError;
use traceline::severity::InvalidSeverityLevel;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be resolved from the environment
    Config(ConfigError),
    /// Severity argument not in the severity table
    InvalidSeverity(InvalidSeverityLevel),
    /// A --context argument was not of the form KEY=VALUE
    InvalidContextPair(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::InvalidContextPair(_) => {
                eprintln!();
                eprintln!("Context annotations are given as repeatable KEY=VALUE pairs:");
                eprintln!("  traceline emit --severity ERROR --message 'disk full' \\");
                eprintln!("      --context path=/data --context attempts=3");
            }
            CliError::InvalidSeverity(_) => {
                eprintln!();
                eprintln!("Run `traceline levels` to list the severity table.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::InvalidSeverity(e) => write!(f, "{}", e),
            CliError::InvalidContextPair(pair) => {
                write!(f, "Invalid context pair '{}', expected KEY=VALUE", pair)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::InvalidSeverity(e) => Some(e),
            CliError::InvalidContextPair(_) => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e)
    }
}

impl From<InvalidSeverityLevel> for CliError {
    fn from(e: InvalidSeverityLevel) -> Self {
        CliError::InvalidSeverity(e)
    }
}
