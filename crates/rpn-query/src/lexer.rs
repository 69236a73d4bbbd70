//! Query lexer (tokenizer).
//!
//! Splits a query on single spaces after detaching parentheses: a space is implied after
//! every `(` and before every `)`. Only the parenthesis side facing the term is split, so
//! `a(` and `)b` stay whole and are read as terms.

use crate::operator::Operator;

/// A token in the query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A boolean operator keyword.
    Operator(Operator),

    /// Left parenthesis.
    LParen,

    /// Right parenthesis.
    RParen,

    /// A search term, exactly as written. Never empty.
    Term(String),
}

impl Token {
    /// Returns the source text of the token.
    pub fn text(&self) -> &str {
        match self {
            Self::Operator(op) => op.symbol(),
            Self::LParen => "(",
            Self::RParen => ")",
            Self::Term(text) => text,
        }
    }

    /// Short human-readable name of the token kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Operator(_) => "operator",
            Self::LParen | Self::RParen => "group",
            Self::Term(_) => "term",
        }
    }
}

/// A token together with the byte offset where it starts in the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// Byte offset of the token's first character in the original query.
    pub position: usize,
}

/// Tokenizes a query string.
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'a> {
    /// The original input string.
    input: &'a str,
    /// Whether operator keywords are matched regardless of case.
    case_insensitive: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input with case-sensitive keywords.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            case_insensitive: false,
        }
    }

    /// Sets whether `and`, `Or`, etc. are recognized as operators.
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = case_insensitive;
        self
    }

    /// Tokenizes the entire input. Empty segments are skipped.
    pub fn tokenize(self) -> Vec<Spanned> {
        self.segments()
            .into_iter()
            .filter(|(_, segment)| !segment.is_empty())
            .map(|(position, segment)| Spanned {
                token: self.classify(segment),
                position,
            })
            .collect()
    }

    /// Splits the input into raw segments with their byte offsets, including empty ones.
    fn segments(&self) -> Vec<(usize, &'a str)> {
        let trimmed = self.input.trim();
        let base = self.input.len() - self.input.trim_start().len();

        let mut segments = Vec::new();
        let mut start = 0;
        for (i, ch) in trimmed.char_indices() {
            match ch {
                ' ' => {
                    segments.push((base + start, &trimmed[start..i]));
                    start = i + 1;
                }
                '(' => {
                    segments.push((base + start, &trimmed[start..=i]));
                    start = i + 1;
                }
                ')' => {
                    segments.push((base + start, &trimmed[start..i]));
                    start = i;
                }
                _ => {}
            }
        }
        segments.push((base + start, &trimmed[start..]));

        segments
    }

    /// Classifies a non-empty segment.
    fn classify(&self, segment: &str) -> Token {
        match segment {
            "(" => Token::LParen,
            ")" => Token::RParen,
            _ => match Operator::from_keyword(segment, self.case_insensitive) {
                Some(op) => Token::Operator(op),
                None => Token::Term(segment.to_string()),
            },
        }
    }
}

/// Convenience function to tokenize a query string with case-sensitive keywords.
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .tokenize()
        .into_iter()
        .map(|spanned| spanned.token)
        .collect()
}

/// Splits a query into raw string segments without classifying them.
///
/// Empty segments are kept: `""` yields `[""]` and doubled spaces yield empty strings.
pub fn split_terms(input: &str) -> Vec<String> {
    Lexer::new(input)
        .segments()
        .into_iter()
        .map(|(_, segment)| segment.to_string())
        .collect()
}
