//! # rpncalc - Reverse Polish Notation calculator
//!
//! An interactive evaluator for RPN arithmetic on a bounded numeric stack.
//! Input is a stream of whitespace-separated tokens: numbers, the operators
//! `+ - * /`, the functions `sqrt sin cos tan pow` and the single-letter
//! commands `s p c h q`. Each token is evaluated left to right against one
//! shared stack, and each produces either an [`Outcome`] or an [`Error`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use rpncalc::{Calculator, Outcome};
//!
//! let mut calc = Calculator::new();
//! let steps = calc.process_line("2 10 pow");
//!
//! assert_eq!(steps[2].result, Ok(Outcome::PartialResult(1024.0)));
//! assert_eq!(calc.stack().as_slice(), &[1024.0]);
//! ```
//!
//! ## Error Recovery
//!
//! A failed operation never destroys data. Division by zero pushes both
//! operands back, and a negative square root pushes its argument back:
//!
//! ```rust
//! use rpncalc::{Calculator, Error};
//!
//! let mut calc = Calculator::new();
//! let steps = calc.process_line("5 0 /");
//!
//! assert_eq!(steps[2].result, Err(Error::DivisionByZero));
//! assert_eq!(calc.stack().as_slice(), &[5.0, 0.0]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Line → split_tokens → classify → process_token → Outcome / Error → presentation
//! ```
//!
//! - [`lexer`] - token splitting, classification and strict number parsing
//! - [`runtime`] - [`BoundedStack`], the arithmetic handlers and [`Calculator`]
//! - [`presentation`] - help text, stack view and messages for the REPL
//! - [`config`] - stack capacity, view size and angle unit
//!
//! The `rpn` binary wraps all of this in a read-eval-print loop.

/// Version of the rpncalc crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod lexer;
pub mod presentation;
pub mod runtime;

// Re-export main types
pub use config::{AngleUnit, Config};
pub use error::{Error, ErrorSeverity, Result};
pub use lexer::{classify, parse_literal, split_tokens, TokenKind};
pub use runtime::{process_token, BoundedStack, Calculator, Outcome, Snapshot, Step};
