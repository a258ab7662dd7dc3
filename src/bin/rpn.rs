//! Interactive RPN calculator
//!
//! Usage: `rpn` (no arguments). Set `RPN_CONFIG` to a TOML file to change the
//! stack capacity, view size or angle unit, and `RPN_LOG` to control logging.

use anyhow::{Context, Result};
use rpncalc::presentation::{help_text, render_error, render_outcome};
use rpncalc::{Calculator, Config, ErrorSeverity};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // RPN_LOG overrides the default WARN level
    let filter = EnvFilter::try_from_env("RPN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let angle_unit = config.angle_unit;
    let mut calc = Calculator::with_config(config).context("invalid configuration")?;

    println!("{}", help_text(angle_unit));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("\nRPN >>> ");
        io::stdout().flush().context("failed to flush stdout")?;

        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            break; // EOF
        }

        // Undecodable bytes become U+FFFD and surface as invalid tokens
        let line = String::from_utf8_lossy(&buf);
        for step in calc.process_line(&line) {
            match &step.result {
                Ok(outcome) => {
                    if let Some(text) = render_outcome(outcome, angle_unit) {
                        println!("{}", text);
                    }
                }
                Err(err) => {
                    println!("{}", render_error(err));
                    if err.classify() == ErrorSeverity::Fatal {
                        return Err(err.clone()).context("session cannot continue");
                    }
                    tracing::debug!(token = %step.token, %err, "recovered");
                }
            }

            if step.is_quit() {
                return Ok(());
            }
        }
    }

    Ok(())
}
