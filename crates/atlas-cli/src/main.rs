//! Atlas CLI - component dependency graph analysis for front-end projects.
//!
//! This is the entry point for the `atlas` binary. It handles command-line
//! argument parsing, logging initialization, and command dispatch.

mod cli;
mod commands;
mod logger;
mod report;
mod scan;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Analyze(analyze_args) => commands::analyze(analyze_args),
    }
}
