use crate::config::Config;
use crate::error::Result;
use crate::lexer::split_tokens;
use crate::runtime::{dispatch, BoundedStack, Outcome};

/// Result of one token within a line
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Token as typed
    pub token: String,
    /// What processing the token produced
    pub result: Result<Outcome>,
}

impl Step {
    /// Whether this step ends the session
    pub fn is_quit(&self) -> bool {
        matches!(self.result, Ok(Outcome::Quit))
    }
}

/// Calculator session: one stack plus the settings it runs with
///
/// ```rust
/// use rpncalc::{Calculator, Outcome};
///
/// let mut calc = Calculator::new();
/// calc.process_token("3").unwrap();
/// calc.process_token("4").unwrap();
/// assert_eq!(calc.process_token("+"), Ok(Outcome::PartialResult(7.0)));
/// assert_eq!(calc.stack().as_slice(), &[7.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    stack: BoundedStack,
    config: Config,
}

impl Calculator {
    /// Creates a session with the default configuration
    pub fn new() -> Self {
        let config = Config::default();
        Calculator {
            stack: BoundedStack::with_capacity(config.stack_capacity),
            config,
        }
    }

    /// Creates a session after validating `config`
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Calculator {
            stack: BoundedStack::with_capacity(config.stack_capacity),
            config,
        })
    }

    /// Processes a single token
    pub fn process_token(&mut self, token: &str) -> Result<Outcome> {
        dispatch::process_token(token, &mut self.stack, &self.config)
    }

    /// Processes every token on a line, stopping after a quit command
    pub fn process_line(&mut self, line: &str) -> Vec<Step> {
        let mut steps = Vec::new();
        for token in split_tokens(line) {
            let step = Step {
                token: token.to_string(),
                result: self.process_token(token),
            };
            let quit = step.is_quit();
            steps.push(step);
            if quit {
                break;
            }
        }
        steps
    }

    /// Read-only access to the stack
    pub fn stack(&self) -> &BoundedStack {
        &self.stack
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
