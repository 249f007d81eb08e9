use super::*;
use crate::error::PathError;
use crate::geom::Point;

#[test]
fn parses_a_simple_triangle() {
    let commands = parse("M 0 0 L 4 0 L 2 3 Z").expect("valid path");
    assert_eq!(
        commands,
        vec![
            PathCommand::AbsoluteMove(Point::new(0.0, 0.0)),
            PathCommand::AbsoluteLine(Point::new(4.0, 0.0)),
            PathCommand::AbsoluteLine(Point::new(2.0, 3.0)),
            PathCommand::Close,
        ]
    );
}

#[test]
fn accepts_compact_encoding_without_separators() {
    let commands = parse("M10 20L30 40Z").expect("valid path");
    assert_eq!(commands.len(), 4);
    assert_eq!(commands[1], PathCommand::AbsoluteLine(Point::new(30.0, 40.0)));
}

#[test]
fn accepts_commas_as_separators() {
    let commands = parse("M 10,20 l 1,-2 z").expect("valid path");
    assert_eq!(commands[1], PathCommand::RelativeLine(Point::new(1.0, -2.0)));
}

#[test]
fn a_sign_can_stand_in_for_a_separator() {
    let commands = parse("M10-20L-1-2Z").expect("valid path");
    assert_eq!(commands[0], PathCommand::AbsoluteMove(Point::new(10.0, -20.0)));
    assert_eq!(commands[1], PathCommand::AbsoluteLine(Point::new(-1.0, -2.0)));
}

#[test]
fn parses_horizontal_vertical_and_curve_arities() {
    let commands = parse("M 0 0 H 4 v 3 C 1 1 2 2 3 3 z").expect("valid path");
    assert_eq!(
        commands,
        vec![
            PathCommand::AbsoluteMove(Point::new(0.0, 0.0)),
            PathCommand::AbsoluteHorizontal(4.0),
            PathCommand::RelativeVertical(3.0),
            PathCommand::AbsoluteCurve {
                c0: Point::new(1.0, 1.0),
                c1: Point::new(2.0, 2.0),
                to: Point::new(3.0, 3.0),
            },
            PathCommand::Close,
        ]
    );
}

#[test]
fn both_close_variants_terminate_the_parse() {
    assert!(parse("M 0 0 L 1 0 L 0 1 Z").is_ok());
    assert!(parse("M 0 0 L 1 0 L 0 1 z").is_ok());
}

#[test]
fn unknown_command_letter_fails() {
    assert_eq!(
        parse("M 0 0 Q 1 1 2 2 Z"),
        Err(PathError::UnknownCommand('Q'))
    );
}

#[test]
fn missing_close_is_unterminated() {
    assert_eq!(parse("M 0 0 L 1 1"), Err(PathError::UnterminatedPath));
    assert_eq!(parse(""), Err(PathError::UnterminatedPath));
    assert_eq!(parse("   "), Err(PathError::UnterminatedPath));
}

#[test]
fn data_after_close_is_trailing() {
    assert_eq!(
        parse("M 0 0 L 1 0 L 0 1 Z L 5 5"),
        Err(PathError::TrailingData('L'))
    );
}

#[test]
fn separators_after_close_are_fine() {
    assert!(parse("M 0 0 L 1 0 L 0 1 Z  \n").is_ok());
}

#[test]
fn short_curve_argument_list_propagates_the_lexer_error() {
    assert_eq!(
        parse("M 0 0 C 1 1 2 2 Z"),
        Err(PathError::MalformedNumber)
    );
}

#[test]
fn double_decimal_point_aborts_the_parse() {
    assert_eq!(parse("M 1.2.3 4 Z"), Err(PathError::DoubleDecimalPoint));
}
