//! Runtime execution for rpncalc: the bounded stack and the token evaluator

mod calculator;
pub mod dispatch;
pub mod ops;
mod outcome;
mod stack;

pub use calculator::{Calculator, Step};
pub use dispatch::process_token;
pub use outcome::{Outcome, Snapshot};
pub use stack::BoundedStack;
