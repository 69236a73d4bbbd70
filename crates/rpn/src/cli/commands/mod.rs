//! Command implementations and dispatch.

pub mod config;
pub mod convert;
pub mod init;
pub mod tokens;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: &Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Convert(cmd) => convert::run(ctx, cmd),
        Commands::Tokens(cmd) => tokens::run(ctx, cmd),
        Commands::Init(cmd) => init::run(ctx, cmd),
        Commands::Config => config::run(ctx),
    }
}
