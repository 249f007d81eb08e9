use super::*;
use crate::color::Color;

fn two_rects() -> Vec<Polygon> {
    vec![
        Polygon::rect(0.0, 0.0, 1.0, 1.0, Color::parse("#F00").expect("valid color")),
        Polygon::rect(2.0, 0.0, 1.0, 1.0, Color::default()),
    ]
}

#[test]
fn obj_lists_vertices_then_offset_faces() {
    let mut buf = Vec::new();
    write_obj(&mut buf, &two_rects()).expect("write should succeed");
    let text = String::from_utf8(buf).expect("utf-8");
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "v 0 0 0");
    assert_eq!(lines[1], "v 0 1 0");
    assert_eq!(lines[4], "v 2 0 0");

    // Faces are 1-based; the second polygon is offset by the first's 4 vertices.
    assert_eq!(lines[8], "f 1 2 3");
    assert_eq!(lines[9], "f 3 4 1");
    assert_eq!(lines[10], "f 5 6 7");
    assert_eq!(lines[11], "f 7 8 5");
}

#[test]
fn obj_for_no_polygons_is_empty() {
    let mut buf = Vec::new();
    write_obj(&mut buf, &[]).expect("write should succeed");
    assert!(buf.is_empty());
}

#[test]
fn json_uses_reference_field_names() {
    let mut buf = Vec::new();
    write_json(&mut buf, &two_rects()).expect("write should succeed");
    let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid json");

    let first = &value[0];
    assert_eq!(first["fill"]["R"], 1.0);
    assert_eq!(first["fill"]["A"], 0.0);
    assert_eq!(first["exterior"][0]["x"], 0.0);
    assert_eq!(first["exterior"][2]["y"], 1.0);
    assert_eq!(first["triangle"][0], serde_json::json!([0, 1, 2]));
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn json_is_tab_indented() {
    let mut buf = Vec::new();
    write_json(&mut buf, &two_rects()).expect("write should succeed");
    let text = String::from_utf8(buf).expect("utf-8");
    assert!(text.contains("\n\t"));
}
