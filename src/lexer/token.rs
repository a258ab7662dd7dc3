use super::number::parse_literal;
use serde::{Deserialize, Serialize};

/// Single-letter session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `q` - end the session
    Quit,
    /// `h` - show help
    Help,
    /// `c` - clear the stack
    Clear,
    /// `s` - show the stack view
    Show,
    /// `p` - show the top value
    Peek,
}

impl Command {
    /// Looks up a command by its exact (case-sensitive) letter
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "q" => Some(Command::Quit),
            "h" => Some(Command::Help),
            "c" => Some(Command::Clear),
            "s" => Some(Command::Show),
            "p" => Some(Command::Peek),
            _ => None,
        }
    }

    /// The letter that invokes the command
    pub fn letter(self) -> &'static str {
        match self {
            Command::Quit => "q",
            Command::Help => "h",
            Command::Clear => "c",
            Command::Show => "s",
            Command::Peek => "p",
        }
    }
}

/// Functions of one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryFn {
    /// Square root
    Sqrt,
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
}

impl UnaryFn {
    /// Looks up a function by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sqrt" => Some(UnaryFn::Sqrt),
            "sin" => Some(UnaryFn::Sin),
            "cos" => Some(UnaryFn::Cos),
            "tan" => Some(UnaryFn::Tan),
            _ => None,
        }
    }

    /// Function name as typed by the user
    pub fn name(self) -> &'static str {
        match self {
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
        }
    }
}

/// Arithmetic operators of two arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOp {
    /// Looks up an operator from a one-character token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    /// Operator symbol
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }
}

/// Classification of a single input token
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TokenKind {
    /// Session command
    Command(Command),
    /// `sqrt`, `sin`, `cos` or `tan`
    Unary(UnaryFn),
    /// `pow`
    Power,
    /// `+`, `-`, `*` or `/`
    Binary(BinaryOp),
    /// Complete numeric literal
    Number(f64),
    /// Anything else
    Invalid,
}

/// Classifies a token; the first matching rule wins
///
/// Commands are checked before functions, functions before `pow`, `pow`
/// before operators and operators before literals. So `s` is always the
/// show command and `-` is always subtraction, never a partial number.
pub fn classify(token: &str) -> TokenKind {
    if let Some(cmd) = Command::from_token(token) {
        return TokenKind::Command(cmd);
    }
    if let Some(func) = UnaryFn::from_name(token) {
        return TokenKind::Unary(func);
    }
    if token == "pow" {
        return TokenKind::Power;
    }
    if let Some(op) = BinaryOp::from_token(token) {
        return TokenKind::Binary(op);
    }
    match parse_literal(token) {
        Some(value) => TokenKind::Number(value),
        None => TokenKind::Invalid,
    }
}
