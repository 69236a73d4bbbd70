//! Command-line interface for the `rpn` query converter.

use std::process::ExitCode;

use clap::Parser;
use rpn::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands, logging,
};

/// Parses arguments, loads configuration, and runs the selected command.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init();

    let ctx = match &cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(&cli.command, &ctx),
        Err(code) => code,
    }
}
