//! Implementation of `rpn convert`.

use std::process::ExitCode;

use tracing::debug;

use crate::cli::{
    args::ConvertCommand,
    context::CommandContext,
    output::{Converted, output_json, output_text},
};

/// Converts each query and prints the postfix form.
///
/// Fails if any query is rejected in strict mode; the remaining queries are still printed.
pub fn run(ctx: &CommandContext, cmd: &ConvertCommand) -> ExitCode {
    let converter = match ctx.converter(&cmd.query) {
        Ok(converter) => converter,
        Err(code) => return code,
    };
    debug!(options = ?converter.options(), "converting {} queries", cmd.queries.len());

    let results: Vec<Converted<'_>> = cmd
        .queries
        .iter()
        .map(|query| Converted {
            query,
            result: converter.convert(query),
        })
        .collect();

    let failed = results.iter().any(|converted| converted.result.is_err());

    if cmd.json {
        if let Err(e) = output_json(&results) {
            eprintln!("error: failed to serialize output: {e}");
            return ExitCode::FAILURE;
        }
    } else {
        output_text(&results);
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
