//! Mesh output: OBJ-style text and JSON.

use std::io::Write;

use serde::Serialize;

use crate::error::Error;
use crate::polygon::Polygon;

/// Write all polygons as one OBJ mesh.
///
/// Vertices first (`v <x> <y> 0`, one line per exterior point across all
/// polygons), then faces (`f <i0> <i1> <i2>`, 1-based, each polygon's
/// triangles offset by the vertex count of the polygons before it).
pub fn write_obj<W: Write>(out: &mut W, polygons: &[Polygon]) -> Result<(), Error> {
    for poly in polygons {
        for v in poly.exterior.iter() {
            writeln!(out, "v {} {} 0", v.x, v.y)?;
        }
    }

    let mut base = 1usize;
    for poly in polygons {
        for tri in &poly.triangles {
            writeln!(out, "f {} {} {}", base + tri[0], base + tri[1], base + tri[2])?;
        }
        base += poly.exterior.len();
    }
    Ok(())
}

/// Write all polygons as a tab-indented JSON array.
pub fn write_json<W: Write>(out: &mut W, polygons: &[Polygon]) -> Result<(), Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut ser = serde_json::Serializer::with_formatter(&mut *out, formatter);
    polygons.serialize(&mut ser)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;
