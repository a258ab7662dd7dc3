use crate::error::{Error, Result};

/// Strict scanner for numeric literals
///
/// Accepts `sign? (digits ('.' digits*)? | '.' digits) ([eE] sign? digits)?`
/// and nothing else. The whole token must be consumed: a literal followed by
/// even one stray character is rejected rather than truncated.
pub struct NumberScanner<'a> {
    /// Token being scanned
    source: &'a str,
    /// Token as bytes (the grammar is pure ASCII)
    bytes: &'a [u8],
    /// Current position in the token
    current: usize,
}

impl<'a> NumberScanner<'a> {
    /// Creates a scanner over a single token
    pub fn new(source: &'a str) -> Self {
        NumberScanner {
            source,
            bytes: source.as_bytes(),
            current: 0,
        }
    }

    /// Scans the token and converts it to a number
    pub fn scan(&mut self) -> Result<f64> {
        self.current = 0;

        self.match_sign();

        let int_digits = self.digits();
        let mut frac_digits = 0;
        if self.match_byte(b'.') {
            frac_digits = self.digits();
        }
        if int_digits == 0 && frac_digits == 0 {
            return Err(self.invalid());
        }

        if self.match_byte(b'e') || self.match_byte(b'E') {
            self.match_sign();
            if self.digits() == 0 {
                return Err(self.invalid());
            }
        }

        if !self.is_at_end() {
            return Err(self.invalid());
        }

        // The grammar above is a subset of what `f64::from_str` accepts
        self.source.parse().map_err(|_| self.invalid())
    }

    fn digits(&mut self) -> usize {
        let start = self.current;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.current += 1;
        }
        self.current - start
    }

    fn match_sign(&mut self) -> bool {
        self.match_byte(b'+') || self.match_byte(b'-')
    }

    fn match_byte(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.current).copied()
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    fn invalid(&self) -> Error {
        Error::InvalidLiteral(self.source.to_string())
    }
}

/// Parses a complete numeric literal, or `None` if any part of the token is not one
pub fn parse_literal(token: &str) -> Option<f64> {
    NumberScanner::new(token).scan().ok()
}

/// Whether a token was probably meant as a number (`3.5x`, `--2`, `.5.5`)
///
/// Used to report a malformed literal instead of an unknown command.
pub fn looks_numeric(token: &str) -> bool {
    let starts_numeric = token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-'));
    starts_numeric && token.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_literal("3.5"), Some(3.5));
        assert_eq!(parse_literal("42"), Some(42.0));
        assert_eq!(parse_literal("0"), Some(0.0));
        assert_eq!(parse_literal("007"), Some(7.0));
    }

    #[test]
    fn test_signs() {
        assert_eq!(parse_literal("-2"), Some(-2.0));
        assert_eq!(parse_literal("+2.25"), Some(2.25));
        assert_eq!(parse_literal("--2"), None);
        assert_eq!(parse_literal("+-2"), None);
        assert_eq!(parse_literal("-"), None);
        assert_eq!(parse_literal("+"), None);
    }

    #[test]
    fn test_fraction_forms() {
        assert_eq!(parse_literal(".5"), Some(0.5));
        assert_eq!(parse_literal("5."), Some(5.0));
        assert_eq!(parse_literal("-.25"), Some(-0.25));
        assert_eq!(parse_literal("."), None);
        assert_eq!(parse_literal("1.2.3"), None);
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_literal("1e3"), Some(1000.0));
        assert_eq!(parse_literal("2.5E-2"), Some(0.025));
        assert_eq!(parse_literal("1e+2"), Some(100.0));
        assert_eq!(parse_literal("1e"), None);
        assert_eq!(parse_literal("1e+"), None);
        assert_eq!(parse_literal("e5"), None);
    }

    #[test]
    fn test_trailing_garbage_is_rejected() {
        assert_eq!(parse_literal("3.5x"), None);
        assert_eq!(parse_literal("12 "), None);
        assert_eq!(parse_literal(" 12"), None);
        assert_eq!(parse_literal("1,5"), None);
    }

    #[test]
    fn test_words_are_rejected() {
        assert_eq!(parse_literal(""), None);
        assert_eq!(parse_literal("inf"), None);
        assert_eq!(parse_literal("NaN"), None);
        assert_eq!(parse_literal("infinity"), None);
        assert_eq!(parse_literal("0x10"), None);
    }

    #[test]
    fn test_huge_literal_saturates() {
        assert_eq!(parse_literal("1e999"), Some(f64::INFINITY));
        assert_eq!(parse_literal("-1e999"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn test_scan_error_carries_token() {
        let err = NumberScanner::new("7q").scan().unwrap_err();
        assert_eq!(err, Error::InvalidLiteral("7q".to_string()));
    }

    #[test]
    fn test_looks_numeric() {
        assert!(looks_numeric("3.5x"));
        assert!(looks_numeric("--2"));
        assert!(looks_numeric(".5.5"));
        assert!(!looks_numeric("foo"));
        assert!(!looks_numeric("x2"));
        assert!(!looks_numeric("-"));
        assert!(!looks_numeric("."));
        assert!(!looks_numeric(""));
    }
}
