//! Arithmetic handlers
//!
//! Each handler takes exactly the operands it needs from the stack and, on
//! failure, pushes back exactly what it took, in the original order. A failed
//! operation therefore leaves the stack as if it had never been attempted.

use crate::config::AngleUnit;
use crate::error::{Error, Result};
use crate::lexer::{BinaryOp, UnaryFn};
use crate::runtime::{BoundedStack, Outcome};

/// Applies `a OP b`, where `b` is the top of the stack and `a` the value below it
pub fn binary(stack: &mut BoundedStack, op: BinaryOp) -> Result<Outcome> {
    let available = stack.len();
    let (a, b) = stack
        .pop_pair()
        .ok_or_else(|| Error::insufficient(op.symbol(), 2, available))?;

    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div => {
            if b == 0.0 {
                restore(stack, &[a, b])?;
                tracing::debug!(a, b, depth = stack.len(), "division by zero, operands restored");
                return Err(Error::DivisionByZero);
            }
            a / b
        }
    };

    finish(stack, op.symbol(), result)
}

/// Applies a one-argument function to the top of the stack
///
/// Trigonometric arguments are read in `angle_unit`.
pub fn unary(stack: &mut BoundedStack, func: UnaryFn, angle_unit: AngleUnit) -> Result<Outcome> {
    let a = stack.pop().ok_or_else(|| Error::empty_stack(func.name()))?;

    let result = match func {
        UnaryFn::Sqrt => {
            if a < 0.0 {
                restore(stack, &[a])?;
                tracing::debug!(a, depth = stack.len(), "negative sqrt, operand restored");
                return Err(Error::DomainError {
                    function: func.name().to_string(),
                    value: a,
                });
            }
            a.sqrt()
        }
        UnaryFn::Sin => angle_unit.to_radians(a).sin(),
        UnaryFn::Cos => angle_unit.to_radians(a).cos(),
        UnaryFn::Tan => angle_unit.to_radians(a).tan(),
    };

    finish(stack, func.name(), result)
}

/// Raises the second value to the power of the top value
///
/// Uses `f64::powf` as-is: negative bases with fractional exponents give NaN
/// and that NaN is pushed like any other result.
pub fn power(stack: &mut BoundedStack) -> Result<Outcome> {
    let available = stack.len();
    let (base, exp) = stack
        .pop_pair()
        .ok_or_else(|| Error::insufficient("pow", 2, available))?;

    finish(stack, "pow", base.powf(exp))
}

/// Pushes operands back after a failed operation, bottom first
fn restore(stack: &mut BoundedStack, operands: &[f64]) -> Result<()> {
    for &value in operands {
        stack.push(value)?;
    }
    Ok(())
}

fn finish(stack: &mut BoundedStack, operation: &str, result: f64) -> Result<Outcome> {
    stack.push(result)?;
    tracing::debug!(operation, result, depth = stack.len(), "partial result");
    Ok(Outcome::PartialResult(result))
}
