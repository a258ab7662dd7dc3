//! Lexical analysis for rpncalc
//!
//! Splits input lines into tokens and classifies each token as a command,
//! function, operator or numeric literal.

mod number;
mod token;

pub use number::{looks_numeric, parse_literal, NumberScanner};
pub use token::{classify, BinaryOp, Command, TokenKind, UnaryFn};

/// Splits a line into tokens on spaces and tabs
///
/// Line terminators are treated as separators too, so a raw line from
/// `read_line` can be passed as-is. Empty tokens are skipped.
pub fn split_tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split([' ', '\t', '\r', '\n'])
        .filter(|token| !token.is_empty())
}
