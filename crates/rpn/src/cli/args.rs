//! Clap argument definitions for the `rpn` CLI.

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "rpn")]
#[command(about = "Convert boolean search queries to Reverse Polish notation")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that override the `[query]` configuration section.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Fail on unbalanced parentheses and empty queries
    #[arg(long, conflicts_with = "lenient")]
    pub strict: bool,

    /// Degrade silently on malformed queries, even if configured strict
    #[arg(long)]
    pub lenient: bool,

    /// Accept operator keywords in any case (and, Or, not)
    #[arg(short = 'i', long)]
    pub ignore_case: bool,

    /// Stemmer language, or "none" to only lowercase terms [default: english]
    #[arg(long)]
    pub stemmer: Option<String>,
}

/// Arguments for `rpn convert`.
#[derive(Args, Debug, Clone)]
pub struct ConvertCommand {
    /// Infix queries, e.g. "(cats OR dogs) AND NOT birds"
    #[arg(required = true)]
    pub queries: Vec<String>,

    /// Query conversion flags.
    #[command(flatten)]
    pub query: QueryArgs,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `rpn tokens`.
#[derive(Args, Debug, Clone)]
pub struct TokensCommand {
    /// Query to tokenize
    pub query: String,

    /// Accept operator keywords in any case (and, Or, not)
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
}

/// Arguments for `rpn init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.rpn.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `rpn` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Convert queries to postfix order
    Convert(ConvertCommand),

    /// Show how a query is split into tokens
    Tokens(TokensCommand),

    /// Initialize rpn configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,
}
