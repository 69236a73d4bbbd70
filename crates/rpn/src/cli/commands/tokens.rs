//! Implementation of `rpn tokens`.

use std::process::ExitCode;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use rpn_query::Lexer;

use crate::cli::{args::TokensCommand, context::CommandContext};

/// Prints each token of the query with its byte offset and kind.
///
/// Keyword matching follows the same configuration as `rpn convert`.
pub fn run(ctx: &CommandContext, cmd: &TokensCommand) -> ExitCode {
    let case_insensitive = cmd.ignore_case || ctx.config.query.case_insensitive_operators;
    let tokens = Lexer::new(&cmd.query)
        .case_insensitive(case_insensitive)
        .tokenize();

    if tokens.is_empty() {
        eprintln!("no tokens");
        return ExitCode::SUCCESS;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Offset", "Kind", "Text"]);
    for spanned in &tokens {
        table.add_row(vec![
            Cell::new(spanned.position),
            Cell::new(spanned.token.kind()),
            Cell::new(format!("{:?}", spanned.token.text())),
        ]);
    }
    println!("{table}");

    ExitCode::SUCCESS
}
