//! Path commands and linearization.
//!
//! The twelve command letters form a closed set, so commands are a plain enum
//! dispatched by pattern match. Each variant knows how to turn itself plus a
//! current point into absolute points: lines yield one point, curves expand
//! into a sampled sequence, close yields nothing (its effect is structural).

use crate::geom::{Bezier, Point};
use crate::error::PathError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    AbsoluteMove(Point),
    RelativeMove(Point),
    AbsoluteLine(Point),
    RelativeLine(Point),
    AbsoluteHorizontal(f64),
    RelativeHorizontal(f64),
    AbsoluteVertical(f64),
    RelativeVertical(f64),
    AbsoluteCurve { c0: Point, c1: Point, to: Point },
    RelativeCurve { c0: Point, c1: Point, to: Point },
    Close,
}

/// Map a command code and its already-parsed arguments to one variant.
///
/// Arity is enforced by the parser before the arguments reach this point, so
/// a mismatch here is a consistency check, not an expected failure.
pub fn make_command(code: char, args: &[f64]) -> Result<PathCommand, PathError> {
    use PathCommand::*;

    let command = match (code, args) {
        ('M', &[x, y]) => AbsoluteMove(Point::new(x, y)),
        ('m', &[x, y]) => RelativeMove(Point::new(x, y)),
        ('L', &[x, y]) => AbsoluteLine(Point::new(x, y)),
        ('l', &[x, y]) => RelativeLine(Point::new(x, y)),
        ('H', &[d]) => AbsoluteHorizontal(d),
        ('h', &[d]) => RelativeHorizontal(d),
        ('V', &[d]) => AbsoluteVertical(d),
        ('v', &[d]) => RelativeVertical(d),
        ('C', &[x0, y0, x1, y1, x, y]) => AbsoluteCurve {
            c0: Point::new(x0, y0),
            c1: Point::new(x1, y1),
            to: Point::new(x, y),
        },
        ('c', &[x0, y0, x1, y1, x, y]) => RelativeCurve {
            c0: Point::new(x0, y0),
            c1: Point::new(x1, y1),
            to: Point::new(x, y),
        },
        ('Z' | 'z', &[]) => Close,
        _ => return Err(PathError::InvalidArguments(code)),
    };
    Ok(command)
}

impl PathCommand {
    /// Expand this command into absolute points, given the current point.
    ///
    /// `resolution` is the parameter step used to sample curves; commands
    /// other than curves ignore it.
    pub fn linearize(&self, current: Point, resolution: f64) -> Vec<Point> {
        use PathCommand::*;

        match *self {
            AbsoluteMove(p) | AbsoluteLine(p) => vec![p],
            RelativeMove(p) | RelativeLine(p) => vec![current + p],
            AbsoluteHorizontal(d) => vec![Point::new(d, current.y)],
            RelativeHorizontal(d) => vec![current + Point::new(d, 0.0)],
            AbsoluteVertical(d) => vec![Point::new(current.x, d)],
            RelativeVertical(d) => vec![current + Point::new(0.0, d)],
            AbsoluteCurve { c0, c1, to } => sample_curve(
                Bezier { p0: current, c0, c1, p1: to },
                resolution,
            ),
            RelativeCurve { c0, c1, to } => sample_curve(
                Bezier {
                    p0: current,
                    c0: current + c0,
                    c1: current + c1,
                    p1: current + to,
                },
                resolution,
            ),
            Close => Vec::new(),
        }
    }
}

/// Sample at `t = 0, step, 2*step, ... < 1`, plus a final exact `t = 1`.
fn sample_curve(bezier: Bezier, resolution: f64) -> Vec<Point> {
    let mut points = Vec::new();
    let mut t = 0.0;
    while t < 1.0 {
        points.push(bezier.at(t));
        t += resolution;
    }
    points.push(bezier.at(1.0));
    points
}

/// Fold a command list into one flat point sequence.
///
/// The current point threads through explicitly: each command sees the last
/// point emitted so far, the zero point before anything has been emitted.
pub fn linearize(commands: &[PathCommand], resolution: f64) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    for command in commands {
        let current = points.last().copied().unwrap_or_default();
        points.extend(command.linearize(current, resolution));
    }
    points
}

#[cfg(test)]
#[path = "command_test.rs"]
mod command_test;
