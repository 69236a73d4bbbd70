//! Boolean query conversion to Reverse Polish notation.
//!
//! This crate turns an infix boolean query into postfix order so that it can be evaluated
//! with a single stack pass:
//!
//! - **Terms**: `rust` - lowercased and stemmed before output
//! - **Operators**: `NOT`, `AND`, `OR` - in decreasing order of precedence
//! - **Grouping**: `(a OR b) AND c` - precedence control
//!
//! Term normalization is injected through the [`TermNormalizer`] trait. The default
//! [`StemmingNormalizer`] uses Tantivy's Snowball stemmers.
//!
//! # Example
//!
//! ```
//! use rpn_query::{Converter, reverse_polish};
//!
//! assert_eq!(reverse_polish("NOT A AND B"), vec!["a", "NOT", "b", "AND"]);
//!
//! let converter = Converter::default();
//! assert_eq!(
//!     converter.to_postfix("(Running OR walking) AND NOT jumps"),
//!     vec!["run", "walk", "OR", "jump", "NOT", "AND"]
//! );
//! ```

#![warn(missing_docs)]

mod convert;
mod error;
mod lexer;
mod normalize;
mod operator;

pub use convert::{ConvertOptions, Converter, reverse_polish};
pub use error::{MalformedQuery, QueryError};
pub use lexer::{Lexer, Spanned, Token, split_terms, tokenize};
pub use normalize::{
    DEFAULT_LANGUAGE, DynNormalizer, LowercaseNormalizer, NO_STEMMER, NormalizerError,
    StemmingNormalizer, TermNormalizer, build_normalizer, parse_language,
};
pub use operator::{Operator, PRECEDENCE};
pub use tantivy::tokenizer::Language;
