//! svg2mesh
//!
//! Converts SVG `rect`/`polygon`/`path` elements into flat, indexed triangle
//! meshes (vertex/face lists) for 3-D export.
//!
//! Design rule: keep this file thin.

pub mod color;
pub mod error;
pub mod extract;
pub mod geom;
pub mod logging;
pub mod output;
pub mod path;
pub mod polygon;
pub mod triangulate;

pub use error::Error;
