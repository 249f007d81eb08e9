use super::*;
use crate::error::PathError;

fn number(input: &str) -> Result<f64, PathError> {
    read_number(&mut Cursor::new(input))
}

#[test]
fn plain_integer() {
    assert_eq!(number("123"), Ok(123.0));
}

#[test]
fn explicit_signs() {
    assert_eq!(number("+7"), Ok(7.0));
    assert_eq!(number("-4.5"), Ok(-4.5));
}

#[test]
fn leading_decimal_point_is_positive() {
    assert_eq!(number(".5"), Ok(0.5));
    assert_eq!(number("+.5"), Ok(0.5));
    assert_eq!(number("-.25"), Ok(-0.25));
}

#[test]
fn scan_stops_at_first_non_number_character() {
    let mut cur = Cursor::new("12L");
    assert_eq!(read_number(&mut cur), Ok(12.0));
    assert_eq!(cur.peek(), Some('L'));
}

#[test]
fn scan_stops_before_a_following_negative_number() {
    // "10-20" is two numbers; the '-' starts the second one.
    let mut cur = Cursor::new("10-20");
    assert_eq!(read_number(&mut cur), Ok(10.0));
    assert_eq!(read_number(&mut cur), Ok(-20.0));
    assert!(cur.at_end());
}

#[test]
fn second_decimal_point_is_an_error() {
    assert_eq!(number("1.2.3"), Err(PathError::DoubleDecimalPoint));
}

#[test]
fn no_digits_is_malformed() {
    assert_eq!(number(""), Err(PathError::MalformedNumber));
    assert_eq!(number("abc"), Err(PathError::MalformedNumber));
    assert_eq!(number(","), Err(PathError::MalformedNumber));
}

#[test]
fn lone_decimal_point_is_malformed() {
    assert_eq!(number("."), Err(PathError::MalformedNumber));
}

#[test]
fn sign_with_no_digits_is_malformed() {
    assert_eq!(number("-"), Err(PathError::MalformedNumber));
    assert_eq!(number("+L"), Err(PathError::MalformedNumber));
}

#[test]
fn separator_consumes_maximal_run() {
    let mut cur = Cursor::new(" ,\t, 42");
    assert_eq!(read_separator(&mut cur), " ,\t, ");
    assert_eq!(cur.peek(), Some('4'));
}

#[test]
fn separator_never_fails_on_zero_characters() {
    let mut cur = Cursor::new("M");
    assert_eq!(read_separator(&mut cur), "");
    assert_eq!(cur.peek(), Some('M'));

    let mut empty = Cursor::new("");
    assert_eq!(read_separator(&mut empty), "");
}
