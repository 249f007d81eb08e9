//! Triangulation collaborator.
//!
//! Ear clipping itself is `earcutr`'s job. This wrapper fixes the contract
//! the mesh assembler relies on: input is an ordered exterior ring, output is
//! a flat list of triangle vertex *coordinates* drawn verbatim from that
//! ring, three vertices (six numbers) per triangle.

use earcutr::earcut;

use crate::error::Error;
use crate::geom::Ring;

/// Triangulate a simple polygon's exterior ring.
///
/// Returns `[x0, y0, x1, y1, x2, y2, ...]`. Every coordinate pair is one of
/// the input points, copied bit-for-bit, which is what makes exact-equality
/// index resolution downstream sound.
pub fn triangulate(ring: &Ring) -> Result<Vec<f64>, Error> {
    if ring.len() < 3 {
        return Err(Error::Triangulation("ring has fewer than 3 points"));
    }

    let mut coords = Vec::with_capacity(ring.len() * 2);
    for p in ring.iter() {
        coords.push(p.x);
        coords.push(p.y);
    }

    let indices = earcut(&coords, &[], 2)
        .map_err(|_| Error::Triangulation("ear clipping failed"))?;
    if indices.is_empty() || indices.len() % 3 != 0 {
        return Err(Error::Triangulation("ear clipping returned no triangles"));
    }

    let mut flat = Vec::with_capacity(indices.len() * 2);
    for &i in &indices {
        flat.push(coords[2 * i]);
        flat.push(coords[2 * i + 1]);
    }
    Ok(flat)
}

#[cfg(test)]
#[path = "triangulate_test.rs"]
mod triangulate_test;
