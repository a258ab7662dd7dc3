use crate::config::Config;
use crate::error::{Error, Result};
use crate::lexer::{classify, looks_numeric, Command, TokenKind};
use crate::runtime::{ops, BoundedStack, Outcome};

/// Classifies one token and executes it against the stack
///
/// Every token yields exactly one `Ok(Outcome)` or `Err(Error)`. Errors are
/// recovered before they are returned: the stack is either untouched or has
/// had its consumed operands pushed back.
pub fn process_token(token: &str, stack: &mut BoundedStack, config: &Config) -> Result<Outcome> {
    let kind = classify(token);
    tracing::debug!(token, ?kind, "classified token");

    match kind {
        TokenKind::Command(cmd) => run_command(cmd, stack, config),
        TokenKind::Unary(func) => ops::unary(stack, func, config.angle_unit),
        TokenKind::Power => ops::power(stack),
        TokenKind::Binary(op) => ops::binary(stack, op),
        TokenKind::Number(value) => {
            stack.push(value)?;
            Ok(Outcome::Pushed(value))
        }
        TokenKind::Invalid => {
            if looks_numeric(token) {
                Err(Error::InvalidLiteral(token.to_string()))
            } else {
                Err(Error::UnrecognizedToken(token.to_string()))
            }
        }
    }
}

fn run_command(cmd: Command, stack: &mut BoundedStack, config: &Config) -> Result<Outcome> {
    match cmd {
        Command::Quit => Ok(Outcome::Quit),
        Command::Help => Ok(Outcome::ShowHelp),
        Command::Clear => {
            stack.clear();
            Ok(Outcome::Cleared)
        }
        Command::Show => Ok(Outcome::ShowStack(stack.snapshot(config.view_size))),
        Command::Peek => stack
            .peek()
            .map(Outcome::Top)
            .ok_or_else(|| Error::empty_stack("peek")),
    }
}
