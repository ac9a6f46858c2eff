// src/builtin/exit.rs

//! `exit [status]` — terminate the shell.

use crate::types::{EXIT_SUCCESS, ExitCode};

/// Status requested by `exit`: 0 without an argument, otherwise the parsed
/// argument.
pub fn exit_status(arg: Option<&str>) -> ExitCode {
    arg.map(parse_status).unwrap_or(EXIT_SUCCESS)
}

/// Parse like C `atoi`: skip leading whitespace, accept one optional sign,
/// then consume leading decimal digits. Anything unparseable yields 0.
/// Values outside `i32` saturate.
pub fn parse_status(s: &str) -> ExitCode {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
    }
    if negative {
        value = -value;
    }

    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as ExitCode
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_means_zero() {
        assert_eq!(exit_status(None), 0);
    }

    #[test]
    fn numeric_argument() {
        assert_eq!(exit_status(Some("7")), 7);
        assert_eq!(exit_status(Some("  42")), 42);
        assert_eq!(exit_status(Some("-3")), -3);
        assert_eq!(exit_status(Some("+5")), 5);
    }

    #[test]
    fn non_numeric_parses_as_zero() {
        assert_eq!(exit_status(Some("abc")), 0);
        assert_eq!(exit_status(Some("")), 0);
        assert_eq!(exit_status(Some("-")), 0);
    }

    #[test]
    fn leading_digits_win() {
        assert_eq!(parse_status("12abc"), 12);
        assert_eq!(parse_status("3 4"), 3);
    }

    #[test]
    fn overflow_saturates() {
        assert_eq!(parse_status("99999999999999999999"), i32::MAX);
        assert_eq!(parse_status("-99999999999999999999"), i32::MIN);
    }
}
