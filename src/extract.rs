//! Element tree walk: SVG document in, polygons out.
//!
//! Shapes carry no inherited state (no transform/group composition), so each
//! element converts independently. Traversal is document pre-order, which
//! fixes the output vertex/face numbering.

use roxmltree::{Document, Node};

use crate::color::Color;
use crate::error::Error;
use crate::polygon::Polygon;

/// Extract every rect/polygon/path element as a triangulated polygon.
///
/// Any shape failure aborts the whole extraction.
pub fn extract_polygons(doc: &Document<'_>, resolution: f64) -> Result<Vec<Polygon>, Error> {
    let mut polygons = Vec::new();
    collect(doc.root_element(), resolution, &mut polygons)?;
    Ok(polygons)
}

fn collect(node: Node<'_, '_>, resolution: f64, out: &mut Vec<Polygon>) -> Result<(), Error> {
    if node.is_element() {
        match node.tag_name().name() {
            "rect" => {
                let x = numeric_attribute(&node, "x")?;
                let y = numeric_attribute(&node, "y")?;
                let width = numeric_attribute(&node, "width")?;
                let height = numeric_attribute(&node, "height")?;
                out.push(Polygon::rect(x, y, width, height, fill_color(&node)?));
            }
            "polygon" => {
                let points = node.attribute("points").unwrap_or("");
                out.push(Polygon::point_list(points, fill_color(&node)?)?);
            }
            "path" => {
                let d = node.attribute("d").unwrap_or("");
                log::debug!("d attribute: {d}");
                out.push(Polygon::path(d, resolution, fill_color(&node)?)?);
            }
            _ => {}
        }
    }

    for child in node.children() {
        collect(child, resolution, out)?;
    }
    Ok(())
}

/// A missing attribute fails the same way as a malformed one.
fn numeric_attribute(node: &Node<'_, '_>, name: &'static str) -> Result<f64, Error> {
    node.attribute(name)
        .unwrap_or("")
        .trim()
        .parse()
        .map_err(|_| Error::Attribute(name))
}

/// Absent or empty fill means the all-zero default color.
fn fill_color(node: &Node<'_, '_>) -> Result<Color, Error> {
    match node.attribute("fill") {
        Some(fill) if !fill.is_empty() => Color::parse(fill),
        _ => Ok(Color::default()),
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod extract_test;
