//! rpn: boolean query to Reverse Polish notation
//!
//! Command-line front end for `rpn-query`. Queries written with `AND`, `OR`, `NOT` and
//! parentheses are printed in postfix order with every term lowercased and stemmed, ready
//! for a stack-based search evaluator. Settings come from `.rpn.toml` files discovered by
//! `rpn-config`.

#![warn(missing_docs)]

pub mod cli;
