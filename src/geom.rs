//! Plain 2-D geometry: points, cubic Beziers and closed rings.
//!
//! `Point` equality is exact floating-point comparison. Adjacent dedup and
//! triangle index resolution both depend on that, so there is deliberately no
//! epsilon anywhere in this module.

use std::ops::Add;

use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

fn lerp(a: Point, b: Point, t: f64) -> Point {
    Point::new(a.x * (1.0 - t) + b.x * t, a.y * (1.0 - t) + b.y * t)
}

/// Cubic Bezier from `p0` to `p1` through control points `c0`, `c1`.
#[derive(Clone, Copy, Debug)]
pub struct Bezier {
    pub p0: Point,
    pub c0: Point,
    pub c1: Point,
    pub p1: Point,
}

impl Bezier {
    /// Evaluate at parameter `t` by De Casteljau (two rounds of lerp).
    ///
    /// `t = 0` yields `p0` exactly and `t = 1` yields `p1` exactly.
    pub fn at(&self, t: f64) -> Point {
        let a0 = lerp(self.p0, self.c0, t);
        let a1 = lerp(self.c0, self.c1, t);
        let a2 = lerp(self.c1, self.p1, t);

        let b0 = lerp(a0, a1, t);
        let b1 = lerp(a1, a2, t);

        lerp(b0, b1, t)
    }
}

/// An ordered sequence of points forming a closed loop.
///
/// Index access is cyclic over the length; the closing edge back to the first
/// point is implied, never stored.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ring(Vec<Point>);

impl Ring {
    pub fn new(points: Vec<Point>) -> Self {
        Self(points)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cyclic access; the zero point for an empty ring.
    pub fn at(&self, i: usize) -> Point {
        if self.0.is_empty() {
            return Point::default();
        }
        self.0[i % self.0.len()]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.0.iter()
    }

    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// Shoelace sum over cyclic adjacent pairs, including the closing edge.
    ///
    /// Unhalved: callers only consume the sign (positive means
    /// counter-clockwise). Rings of length <= 2 have zero area.
    pub fn signed_area(&self) -> f64 {
        if self.0.len() <= 2 {
            return 0.0;
        }

        let mut area = 0.0;
        let mut p0 = self.at(0);
        for i in 1..=self.0.len() {
            let p1 = self.at(i);
            area += p0.x * p1.y - p1.x * p0.y;
            p0 = p1;
        }
        area
    }

    /// Drop points exactly equal to the immediately preceding retained point.
    ///
    /// Single pass: the first occurrence survives, as do later exact repeats
    /// that are separated by distinct points.
    pub fn dedup_adjacent(&mut self) {
        self.0.dedup();
    }

    /// Reverse the point order when the ring is wound clockwise.
    ///
    /// Idempotent: an already counter-clockwise ring is left untouched.
    pub fn correct_winding(&mut self) {
        if self.signed_area() < 0.0 {
            self.0.reverse();
        }
    }
}

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;
