//! CLI subcommands.

pub mod emit;
pub mod levels;
