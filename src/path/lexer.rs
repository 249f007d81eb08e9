//! Numeric lexer and separator consumer.

use crate::error::PathError;

use super::cursor::Cursor;

/// Read an optional sign, returning its multiplier.
///
/// `-` is -1; `+` and a bare digit or decimal point are +1 (the bare
/// characters are left unconsumed for the digit scan). Anything else is not
/// the start of a number.
fn read_sign(cur: &mut Cursor) -> Result<f64, PathError> {
    match cur.peek() {
        Some('+') => {
            cur.bump();
            Ok(1.0)
        }
        Some('-') => {
            cur.bump();
            Ok(-1.0)
        }
        Some(c) if c == '.' || c.is_ascii_digit() => Ok(1.0),
        _ => Err(PathError::MalformedNumber),
    }
}

/// Read one number: optional sign, then digits with at most one decimal point.
///
/// The scan stops, without consuming, at the first character that is neither
/// a digit nor a first `.`. Zero consumed digit/point characters (or a lone
/// `.`) fail with [`PathError::MalformedNumber`]; a second `.` fails with
/// [`PathError::DoubleDecimalPoint`].
pub fn read_number(cur: &mut Cursor) -> Result<f64, PathError> {
    let sign = read_sign(cur)?;

    let mut digits = String::new();
    let mut seen_point = false;
    while let Some(c) = cur.peek() {
        if c == '.' {
            if seen_point {
                return Err(PathError::DoubleDecimalPoint);
            }
            seen_point = true;
            digits.push(c);
            cur.bump();
        } else if c.is_ascii_digit() {
            digits.push(c);
            cur.bump();
        } else {
            break;
        }
    }

    // A lone "." consumed a character but still is not a number.
    let value: f64 = digits.parse().map_err(|_| PathError::MalformedNumber)?;
    Ok(sign * value)
}

/// Consume a maximal (possibly empty) run of whitespace and commas.
///
/// Never fails; returns the consumed characters.
pub fn read_separator(cur: &mut Cursor) -> String {
    let mut consumed = String::new();
    while let Some(c) = cur.peek() {
        if c.is_whitespace() || c == ',' {
            consumed.push(c);
            cur.bump();
        } else {
            break;
        }
    }
    consumed
}

#[cfg(test)]
#[path = "lexer_test.rs"]
mod lexer_test;
