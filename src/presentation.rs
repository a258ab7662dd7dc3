//! Text rendering for the interactive shell
//!
//! Nothing here touches the stack; every function turns an outcome, error
//! or snapshot into the text the REPL prints.

use crate::config::AngleUnit;
use crate::error::Error;
use crate::lexer::Command;
use crate::runtime::{Outcome, Snapshot};

/// Significant digits used by [`format_general`]
const GENERAL_PRECISION: i32 = 6;

/// Commands in help order
const COMMAND_HELP: [(Command, &str); 5] = [
    (Command::Show, "show stack"),
    (Command::Peek, "show top"),
    (Command::Clear, "clear stack"),
    (Command::Help, "help"),
    (Command::Quit, "quit"),
];

/// Help text listing operators, functions and commands
pub fn help_text(angle_unit: AngleUnit) -> String {
    let mut out = String::new();
    out.push_str("\n--- RPN CALCULATOR ---\n");
    out.push_str("Enter numbers and operations in Reverse Polish Notation\n\n");
    out.push_str("Operators:  +  -  *  /\n");
    out.push_str("Functions:  sqrt  sin  cos  tan  pow\n");
    out.push_str(&format!("Trigonometry in {}\n\n", angle_unit.name().to_uppercase()));
    out.push_str("Commands:\n");
    for (cmd, description) in COMMAND_HELP {
        out.push_str(&format!("  {}  -> {}\n", cmd.letter(), description));
    }
    out.push_str("----------------------");
    out
}

/// Renders a stack view, deepest slot first, followed by the real depth
pub fn render_stack(snapshot: &Snapshot) -> String {
    let mut out = String::from("\n====== STACK STATE ======\n");
    for (pos, value) in snapshot.positions() {
        out.push_str(&format!("Slot {} -> {}\n", pos, format_fixed(value)));
    }
    out.push_str(&format!("Depth: {}\n", snapshot.depth));
    out.push_str("=========================");
    out
}

/// Message for a successful outcome; `None` when nothing should be printed
pub fn render_outcome(outcome: &Outcome, angle_unit: AngleUnit) -> Option<String> {
    match outcome {
        Outcome::PartialResult(v) => Some(format!("✔ Partial result: {}", format_general(*v))),
        Outcome::Cleared => Some("✔ Stack cleared".to_string()),
        Outcome::Top(v) => Some(format!("Current top: {}", format_general(*v))),
        Outcome::ShowStack(snapshot) => Some(render_stack(snapshot)),
        Outcome::ShowHelp => Some(help_text(angle_unit)),
        Outcome::Pushed(_) | Outcome::Quit => None,
    }
}

/// Message for a failed token
pub fn render_error(err: &Error) -> String {
    match err {
        Error::InvalidLiteral(token) | Error::UnrecognizedToken(token) => {
            format!("⚠️  Invalid input: {}", token)
        }
        Error::EmptyStack { operation } if operation == "peek" => "Stack is empty".to_string(),
        Error::EmptyStack { .. } => "⚠️  Error: stack is empty".to_string(),
        Error::InsufficientOperands { .. } => "⚠️  Error: insufficient operands".to_string(),
        Error::DivisionByZero => "⚠️  Error: division by zero".to_string(),
        Error::DomainError { function, .. } if function == "sqrt" => {
            "⚠️  Error: negative square root".to_string()
        }
        Error::StackOverflow { capacity } => {
            format!("⚠️  Error: stack is full ({} values)", capacity)
        }
        other => format!("⚠️  Error: {}", other),
    }
}

/// Formats a number like C's `%g`: six significant digits, no trailing zeros
pub fn format_general(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    if value == 0.0 {
        let zero = if value.is_sign_negative() { "-0" } else { "0" };
        return zero.to_string();
    }

    // Rounding to the target precision decides the exponent, as %g does
    let sci = format!("{:.*e}", (GENERAL_PRECISION - 1) as usize, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= GENERAL_PRECISION {
        let sign = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exp.abs()
        )
    } else {
        let decimals = (GENERAL_PRECISION - 1 - exp) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Formats a number like C's `%.6f`
pub fn format_fixed(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    format!("{:.6}", value)
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

fn strip_trailing_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_general_integers() {
        assert_eq!(format_general(7.0), "7");
        assert_eq!(format_general(1024.0), "1024");
        assert_eq!(format_general(-42.0), "-42");
        assert_eq!(format_general(0.0), "0");
        assert_eq!(format_general(123456.0), "123456");
    }

    #[test]
    fn test_format_general_fractions() {
        assert_eq!(format_general(2.5), "2.5");
        assert_eq!(format_general(0.1 + 0.2), "0.3");
        assert_eq!(format_general(1.0 / 3.0), "0.333333");
        assert_eq!(format_general(0.0001), "0.0001");
        assert_eq!(format_general(3.14159265), "3.14159");
    }

    #[test]
    fn test_format_general_scientific() {
        assert_eq!(format_general(1234567.0), "1.23457e+06");
        assert_eq!(format_general(1e6), "1e+06");
        assert_eq!(format_general(0.00001), "1e-05");
        assert_eq!(format_general(-2.5e-7), "-2.5e-07");
        assert_eq!(format_general(1e100), "1e+100");
    }

    #[test]
    fn test_format_general_rounding_bumps_exponent() {
        assert_eq!(format_general(999999.7), "1e+06");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_general(f64::NAN), "nan");
        assert_eq!(format_general(f64::INFINITY), "inf");
        assert_eq!(format_fixed(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_render_stack() {
        let snapshot = Snapshot {
            slots: vec![0.0, 1.5, 2.0],
            depth: 2,
        };
        let text = render_stack(&snapshot);
        let lines: Vec<&str> = text.lines().filter(|l| l.starts_with("Slot")).collect();
        assert_eq!(
            lines,
            vec!["Slot 3 -> 0.000000", "Slot 2 -> 1.500000", "Slot 1 -> 2.000000"]
        );
        assert!(text.contains("Depth: 2\n"));
    }

    #[test]
    fn test_render_stack_reports_depth_beyond_view() {
        let snapshot = Snapshot {
            slots: vec![9.0, 10.0],
            depth: 10,
        };
        let text = render_stack(&snapshot);
        assert_eq!(text.lines().filter(|l| l.starts_with("Slot")).count(), 2);
        assert!(text.contains("Depth: 10"));
    }

    #[test]
    fn test_render_outcome() {
        let unit = AngleUnit::Degrees;
        assert_eq!(
            render_outcome(&Outcome::PartialResult(7.0), unit).as_deref(),
            Some("✔ Partial result: 7")
        );
        assert_eq!(
            render_outcome(&Outcome::Top(0.5), unit).as_deref(),
            Some("Current top: 0.5")
        );
        assert_eq!(render_outcome(&Outcome::Pushed(3.0), unit), None);
        assert_eq!(render_outcome(&Outcome::Quit, unit), None);
        assert!(render_outcome(&Outcome::ShowHelp, unit)
            .unwrap()
            .contains("DEGREES"));
    }

    #[test]
    fn test_render_error() {
        assert_eq!(
            render_error(&Error::UnrecognizedToken("foo".into())),
            "⚠️  Invalid input: foo"
        );
        assert_eq!(
            render_error(&Error::DivisionByZero),
            "⚠️  Error: division by zero"
        );
        assert_eq!(render_error(&Error::empty_stack("peek")), "Stack is empty");
        assert_eq!(
            render_error(&Error::empty_stack("sin")),
            "⚠️  Error: stack is empty"
        );
    }

    #[test]
    fn test_help_lists_commands() {
        let help = help_text(AngleUnit::Radians);
        for needle in ["sqrt", "pow", "RADIANS"] {
            assert!(help.contains(needle), "help is missing {}", needle);
        }

        let listed: Vec<&str> = help
            .lines()
            .filter_map(|l| l.trim_start().split_once("  -> "))
            .map(|(letter, _)| letter)
            .collect();
        assert_eq!(listed, vec!["s", "p", "c", "h", "q"]);
        for letter in listed {
            assert!(Command::from_token(letter).is_some(), "{} is not a command", letter);
        }
    }
}
