//! Infix to postfix conversion.
//!
//! A shunting-yard pass over the token stream. Terms go straight to the output; operators
//! wait on a stack until an operator that binds no tighter arrives, a group closes, or the
//! query ends.
//!
//! # Precedence (highest to lowest)
//!
//! 1. Grouping: `(...)`
//! 2. `NOT` (prefix, right-associative)
//! 3. `AND` (left-associative)
//! 4. `OR` (left-associative)
//!
//! In lenient mode malformed input degrades instead of failing: a stray `)` is ignored and
//! an unclosed `(` is emitted as a literal `(` at the end of the output. Strict mode
//! reports both, along with empty queries, as a [`QueryError`].

use tracing::{debug, trace};

use crate::{
    error::{MalformedQuery, QueryError},
    lexer::{Lexer, Spanned, Token},
    normalize::{StemmingNormalizer, TermNormalizer},
    operator::Operator,
};

/// Options controlling how queries are tokenized and how malformed input is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Report malformed queries as errors instead of degrading silently.
    pub strict: bool,
    /// Recognize operator keywords regardless of case.
    pub case_insensitive: bool,
}

/// An entry on the working stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// An operator waiting for its operands.
    Operator(Operator),
    /// An open group, with the byte position of its `(`.
    Group(usize),
}

/// Result of a single pass, before the mode decides what to do with anomalies.
struct Shunted {
    /// Postfix output.
    postfix: Vec<String>,
    /// Malformed-input conditions, in query order.
    anomalies: Vec<QueryError>,
}

/// Converts infix boolean queries to Reverse Polish notation.
///
/// The converter holds no per-query state, so one instance can be shared across threads
/// as long as its normalizer can.
#[derive(Debug, Clone)]
pub struct Converter<N> {
    /// Normalizer applied to every term.
    normalizer: N,
    /// Tokenization and error handling options.
    options: ConvertOptions,
}

impl Default for Converter<StemmingNormalizer> {
    fn default() -> Self {
        Self::new(StemmingNormalizer::default())
    }
}

impl<N: TermNormalizer> Converter<N> {
    /// Creates a lenient, case-sensitive converter using the given normalizer.
    pub fn new(normalizer: N) -> Self {
        Self {
            normalizer,
            options: ConvertOptions::default(),
        }
    }

    /// Replaces the conversion options.
    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the conversion options.
    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Returns the term normalizer.
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }

    /// Tokenizes a query using this converter's keyword matching.
    pub fn tokenize(&self, query: &str) -> Vec<Spanned> {
        Lexer::new(query)
            .case_insensitive(self.options.case_insensitive)
            .tokenize()
    }

    /// Converts a query according to the configured mode.
    ///
    /// Never fails unless strict mode is enabled.
    pub fn convert(&self, query: &str) -> Result<Vec<String>, QueryError> {
        if self.options.strict {
            self.to_postfix_strict(query)
        } else {
            Ok(self.to_postfix(query))
        }
    }

    /// Converts a query, degrading silently on malformed input.
    pub fn to_postfix(&self, query: &str) -> Vec<String> {
        let shunted = self.shunt(&self.tokenize(query));
        if !shunted.anomalies.is_empty() {
            debug!(
                query,
                anomalies = shunted.anomalies.len(),
                "malformed query converted leniently"
            );
        }
        shunted.postfix
    }

    /// Converts a query, failing on the first malformed construct.
    pub fn to_postfix_strict(&self, query: &str) -> Result<Vec<String>, QueryError> {
        self.convert_tokens(&self.tokenize(query), true)
            .map_err(|err| err.with_query(query))
    }

    /// Converts an already tokenized query.
    ///
    /// With `strict` unset this always returns `Ok`.
    pub fn convert_tokens(
        &self,
        tokens: &[Spanned],
        strict: bool,
    ) -> Result<Vec<String>, QueryError> {
        let Shunted { postfix, anomalies } = self.shunt(tokens);
        match anomalies.into_iter().next() {
            Some(err) if strict => Err(err),
            _ => Ok(postfix),
        }
    }

    /// Runs the shunting-yard pass, recording anomalies instead of stopping at them.
    fn shunt(&self, tokens: &[Spanned]) -> Shunted {
        let mut stack: Vec<Pending> = Vec::new();
        let mut postfix: Vec<String> = Vec::with_capacity(tokens.len());
        let mut anomalies = Vec::new();

        if tokens.is_empty() {
            anomalies.push(QueryError::new(MalformedQuery::EmptyQuery, None));
        }

        for Spanned { token, position } in tokens {
            match token {
                Token::Operator(op) if op.is_unary() => stack.push(Pending::Operator(*op)),
                Token::Operator(op) => {
                    // Open groups are not operators, so they end the flush.
                    while let Some(&Pending::Operator(top)) = stack.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        trace!(%top, incoming = %op, "flushing operator");
                        stack.pop();
                        postfix.push(top.symbol().to_string());
                    }
                    stack.push(Pending::Operator(*op));
                }
                Token::LParen => stack.push(Pending::Group(*position)),
                Token::RParen => {
                    if !close_group(&mut stack, &mut postfix) {
                        anomalies.push(QueryError::new(
                            MalformedQuery::UnmatchedCloseParen,
                            Some(*position),
                        ));
                    }
                }
                Token::Term(text) => postfix.push(self.normalize_term(text)),
            }
        }

        let mut unclosed = Vec::new();
        while let Some(pending) = stack.pop() {
            match pending {
                Pending::Operator(op) => postfix.push(op.symbol().to_string()),
                Pending::Group(position) => {
                    unclosed.push(position);
                    postfix.push("(".to_string());
                }
            }
        }
        anomalies.extend(unclosed.into_iter().rev().map(|position| {
            QueryError::new(MalformedQuery::UnmatchedOpenParen, Some(position))
        }));

        debug!(
            tokens = tokens.len(),
            output = postfix.len(),
            "converted query to postfix"
        );

        Shunted { postfix, anomalies }
    }

    /// Trims, case-folds and stems a term.
    fn normalize_term(&self, text: &str) -> String {
        let folded = text.trim().to_lowercase();
        self.normalizer.normalize(&folded)
    }
}

/// Pops operators into the output until the innermost open group, which is discarded.
///
/// Returns false if the stack ran out without finding a group.
fn close_group(stack: &mut Vec<Pending>, postfix: &mut Vec<String>) -> bool {
    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => postfix.push(op.symbol().to_string()),
            Pending::Group(_) => return true,
        }
    }
    false
}

/// Converts a query leniently, lowercasing and stemming terms as English.
pub fn reverse_polish(query: &str) -> Vec<String> {
    Converter::default().to_postfix(query)
}
