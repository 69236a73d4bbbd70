//! Boolean operators and their precedence.

use std::fmt;

/// Binding strength of each operator. Higher binds tighter.
pub const PRECEDENCE: [(Operator, u8); 3] =
    [(Operator::Not, 3), (Operator::And, 2), (Operator::Or, 1)];

/// A boolean operator in the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Unary negation (`NOT`).
    Not,

    /// Conjunction (`AND`).
    And,

    /// Disjunction (`OR`).
    Or,
}

impl Operator {
    /// All operators, tightest binding first.
    pub const ALL: [Self; 3] = [Self::Not, Self::And, Self::Or];

    /// Returns the binding strength of this operator, as listed in [`PRECEDENCE`].
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Not => PRECEDENCE[0].1,
            Self::And => PRECEDENCE[1].1,
            Self::Or => PRECEDENCE[2].1,
        }
    }

    /// Returns the canonical keyword for this operator, as emitted in postfix output.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Returns true for prefix operators that take a single operand.
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not)
    }

    /// Recognizes an operator keyword.
    ///
    /// Matching is exact unless `case_insensitive` is set, in which case `and`, `Or`, etc.
    /// are accepted as well.
    pub fn from_keyword(word: &str, case_insensitive: bool) -> Option<Self> {
        Self::ALL.into_iter().find(|op| {
            if case_insensitive {
                word.eq_ignore_ascii_case(op.symbol())
            } else {
                word == op.symbol()
            }
        })
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
