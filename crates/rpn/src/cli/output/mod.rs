//! Rendering and JSON serialization for CLI output.

use rpn_query::QueryError;
use serde::Serialize;

/// The outcome of converting one query.
pub struct Converted<'a> {
    /// The query as given on the command line.
    pub query: &'a str,
    /// The postfix tokens, or the strict-mode error.
    pub result: Result<Vec<String>, QueryError>,
}

/// JSON output for a single query.
#[derive(Serialize)]
struct JsonQuery<'a> {
    /// The original query string.
    query: &'a str,
    /// Postfix tokens, absent if conversion failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    postfix: Option<&'a [String]>,
    /// Error message, absent if conversion succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
    /// Byte offset of the error in the query.
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<usize>,
}

/// JSON output for `rpn convert`.
#[derive(Serialize)]
struct JsonOutput<'a> {
    /// Results in command-line order.
    queries: Vec<JsonQuery<'a>>,
}

/// Prints one line of space-separated postfix tokens per query.
///
/// Errors are rendered to stderr with their query context.
pub fn output_text(results: &[Converted<'_>]) {
    for converted in results {
        match &converted.result {
            Ok(postfix) => println!("{}", postfix.join(" ")),
            Err(err) => eprintln!("{err}"),
        }
    }
}

/// Prints all results as a single JSON document.
pub fn output_json(results: &[Converted<'_>]) -> Result<(), serde_json::Error> {
    let output = JsonOutput {
        queries: results
            .iter()
            .map(|converted| match &converted.result {
                Ok(postfix) => JsonQuery {
                    query: converted.query,
                    postfix: Some(postfix),
                    error: None,
                    position: None,
                },
                Err(err) => JsonQuery {
                    query: converted.query,
                    postfix: None,
                    error: Some(err.message()),
                    position: err.position,
                },
            })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&output)?;
    println!("{json}");
    Ok(())
}
