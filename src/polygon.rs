//! Polygons and the three shape builders.
//!
//! A polygon's triangles index into its own exterior ring and mean nothing
//! outside it. Construction order is an invariant: the exterior is fully
//! normalized (deduplicated, wound counter-clockwise) before triangulation,
//! and the index map is built from that exact sequence.

use std::collections::HashMap;

use serde::Serialize;

use crate::color::Color;
use crate::error::Error;
use crate::geom::{Point, Ring};
use crate::path;
use crate::triangulate::triangulate;

/// Three indices into the owning polygon's exterior ring.
pub type Triangle = [usize; 3];

#[derive(Clone, Debug, Serialize)]
pub struct Polygon {
    pub fill: Color,
    pub exterior: Ring,
    #[serde(rename = "triangle")]
    pub triangles: Vec<Triangle>,
}

impl Polygon {
    /// Build from rect geometry attributes.
    ///
    /// Four corners in fixed order and a fixed two-triangle fan; the
    /// triangulator is never involved.
    pub fn rect(x: f64, y: f64, width: f64, height: f64, fill: Color) -> Polygon {
        let (x0, y0) = (x, y);
        let (x1, y1) = (x + width, y + height);

        Polygon {
            fill,
            exterior: Ring::new(vec![
                Point::new(x0, y0),
                Point::new(x0, y1),
                Point::new(x1, y1),
                Point::new(x1, y0),
            ]),
            triangles: vec![[0, 1, 2], [2, 3, 0]],
        }
    }

    /// Build from a polygon element's `points` attribute.
    ///
    /// The attribute is a whitespace/comma-separated flat coordinate list; a
    /// trailing unpaired coordinate is silently dropped (the pair loop never
    /// reaches it).
    pub fn point_list(points: &str, fill: Color) -> Result<Polygon, Error> {
        let coords: Vec<&str> = points
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .collect();

        let mut exterior = Vec::with_capacity(coords.len() / 2);
        let mut i = 0;
        while i + 1 < coords.len() {
            let x: f64 = coords[i].parse().map_err(|_| Error::Attribute("points"))?;
            let y: f64 = coords[i + 1].parse().map_err(|_| Error::Attribute("points"))?;
            exterior.push(Point::new(x, y));
            i += 2;
        }

        Polygon::from_exterior(Ring::new(exterior), fill)
    }

    /// Build from a path element's `d` attribute.
    ///
    /// Runs the full interpreter -> linearizer pipeline, then deduplicates
    /// adjacent-equal points before normalizing.
    pub fn path(d: &str, resolution: f64, fill: Color) -> Result<Polygon, Error> {
        debug_assert!(resolution > 0.0 && resolution <= 1.0);

        let commands = path::parse(d)?;
        let mut exterior = Ring::new(path::linearize(&commands, resolution));
        exterior.dedup_adjacent();

        Polygon::from_exterior(exterior, fill)
    }

    /// Normalize a raw exterior ring, triangulate it and resolve indices.
    fn from_exterior(mut exterior: Ring, fill: Color) -> Result<Polygon, Error> {
        exterior.correct_winding();
        log::debug!(
            "exterior: {} points, signed area {}",
            exterior.len(),
            exterior.signed_area()
        );

        let flat = triangulate(&exterior)?;
        let triangles = resolve_triangles(&exterior, &flat)?;

        Ok(Polygon { fill, exterior, triangles })
    }
}

/// Exact-equality key for a point.
///
/// Bit patterns agree with `==` here because every coordinate the resolver
/// sees was copied unmodified from the ring it is being looked up in.
fn point_key(p: Point) -> (u64, u64) {
    (p.x.to_bits(), p.y.to_bits())
}

/// Map triangulator output (coordinate triples) back to ring indices.
///
/// First-seen index wins for repeated points. A lookup miss means the
/// triangulator emitted a vertex it was never given, which is a broken
/// collaborator, not bad input data.
fn resolve_triangles(exterior: &Ring, flat: &[f64]) -> Result<Vec<Triangle>, Error> {
    let mut index: HashMap<(u64, u64), usize> = HashMap::with_capacity(exterior.len());
    for (i, p) in exterior.iter().enumerate() {
        index.entry(point_key(*p)).or_insert(i);
    }

    let mut triangles = Vec::with_capacity(flat.len() / 6);
    for corners in flat.chunks_exact(6) {
        let mut tri: Triangle = [0; 3];
        for (slot, pair) in tri.iter_mut().zip(corners.chunks_exact(2)) {
            let key = (pair[0].to_bits(), pair[1].to_bits());
            *slot = *index.get(&key).ok_or_else(|| {
                Error::Internal(format!(
                    "triangulator returned vertex ({}, {}) not present in its input ring",
                    pair[0], pair[1]
                ))
            })?;
        }
        triangles.push(tri);
    }
    Ok(triangles)
}

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;
