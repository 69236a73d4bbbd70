//! Error types for strict query conversion.
//!
//! Lenient conversion never fails. These errors are only produced when strict mode is
//! enabled, and describe why a query is malformed.

use std::{error::Error, fmt};

/// The ways a query can be malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedQuery {
    /// A `)` with no open group to close.
    UnmatchedCloseParen,
    /// A `(` still open at the end of the query.
    UnmatchedOpenParen,
    /// The query contains no tokens.
    EmptyQuery,
}

impl MalformedQuery {
    /// Returns the error message for this condition.
    pub fn message(self) -> &'static str {
        match self {
            Self::UnmatchedCloseParen => "unexpected closing parenthesis",
            Self::UnmatchedOpenParen => "expected closing parenthesis",
            Self::EmptyQuery => "empty query",
        }
    }
}

/// An error reported by strict conversion.
///
/// Carries the original query string and, where applicable, the byte position of the
/// offending token so the error can be rendered with a pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    /// The kind of error that occurred.
    pub kind: MalformedQuery,
    /// Byte position in the query (if applicable).
    pub position: Option<usize>,
    /// The original query string (if available).
    pub query: Option<String>,
}

impl QueryError {
    /// Creates an error with no query attached.
    pub fn new(kind: MalformedQuery, position: Option<usize>) -> Self {
        Self {
            kind,
            position,
            query: None,
        }
    }

    /// Sets the query string for this error.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Returns the error message without context.
    pub fn message(&self) -> &'static str {
        self.kind.message()
    }

    /// Returns a suggestion for fixing the query.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self.kind {
            MalformedQuery::UnmatchedCloseParen => {
                Some("Remove the ) or add a matching ( before it")
            }
            MalformedQuery::UnmatchedOpenParen => {
                Some("Add a closing parenthesis ) to match the opening one")
            }
            MalformedQuery::EmptyQuery => None,
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "query syntax error: {}", self.message())?;

        // If we have a query and position, show it with a pointer
        if let Some(query) = &self.query {
            writeln!(f, "  {}", query)?;
            if let Some(pos) = self.position {
                let mut clamped = pos.min(query.len());
                while !query.is_char_boundary(clamped) {
                    clamped -= 1;
                }
                let column = query[..clamped].chars().count();
                writeln!(f, "  {}^", " ".repeat(column))?;
            }
        }

        if let Some(suggestion) = self.suggestion() {
            write!(f, "hint: {}", suggestion)?;
        }

        Ok(())
    }
}

impl Error for QueryError {}
