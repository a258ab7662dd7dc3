//! Error types for the rpncalc evaluator

use thiserror::Error;

/// Evaluator and configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Stack errors
    /// Push attempted on a full stack
    ///
    /// **Triggered by:** Entering a literal when the stack already holds `capacity` values
    /// **Recovery:** The stack is left untouched; pop or clear values and retry
    #[error("Stack overflow (capacity: {capacity})")]
    StackOverflow {
        /// Maximum number of values the stack holds
        capacity: usize,
    },

    /// Operation needed one value but the stack was empty
    ///
    /// **Triggered by:** `p`, `sqrt`, `sin`, `cos` or `tan` on an empty stack
    #[error("Empty stack for operation: {operation}")]
    EmptyStack {
        /// Operation name
        operation: String,
    },

    /// Operation needed more values than the stack holds
    ///
    /// **Triggered by:** `3 +`, `pow` on a single value
    /// **Recovery:** Nothing is consumed; the stack keeps its previous contents
    #[error("Insufficient operands for {operation}: required {required}, available {available}")]
    InsufficientOperands {
        /// Operation name
        operation: String,
        /// Number of operands the operation consumes
        required: usize,
        /// Number of values on the stack at the time of the call
        available: usize,
    },

    // Arithmetic errors
    /// Division by zero error
    ///
    /// **Triggered by:** `5 0 /`
    /// **Recovery:** Both operands are pushed back in their original order
    #[error("Division by zero")]
    DivisionByZero,

    /// Argument outside the function's domain
    ///
    /// **Triggered by:** `-4 sqrt`
    /// **Recovery:** The operand is pushed back unchanged
    #[error("Domain error: {function} is undefined for {value}")]
    DomainError {
        /// Function name
        function: String,
        /// Offending argument
        value: f64,
    },

    // Input errors
    /// Token looks like a number but is not a complete numeric literal
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),

    /// Token is not a command, function, operator or number
    #[error("Unrecognized token: {0}")]
    UnrecognizedToken(String),

    // Configuration errors
    /// Configuration values failed validation or could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration file could not be read
    #[error("Cannot read configuration file {path}: {message}")]
    ConfigIo {
        /// Path that was requested
        path: String,
        /// Underlying I/O error message
        message: String,
    },
}

/// Error severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Fatal error that cannot be recovered from
    Fatal,
    /// Recoverable error; the session keeps accepting tokens
    Recoverable,
}

impl Error {
    /// Create an empty-stack error for the named operation
    pub fn empty_stack(operation: impl Into<String>) -> Self {
        Error::EmptyStack {
            operation: operation.into(),
        }
    }

    /// Create an insufficient-operands error
    pub fn insufficient(operation: impl Into<String>, required: usize, available: usize) -> Self {
        Error::InsufficientOperands {
            operation: operation.into(),
            required,
            available,
        }
    }

    /// Classify error severity
    pub fn classify(&self) -> ErrorSeverity {
        match self {
            Error::InvalidConfig(_) => ErrorSeverity::Fatal,
            Error::ConfigIo { .. } => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Recoverable,
        }
    }
}

/// Result type for rpncalc operations
pub type Result<T> = std::result::Result<T, Error>;
