//! Error taxonomy.
//!
//! Errors are values; printing and exiting is the binary's concern. Every
//! failure aborts the whole run (there is no partial-success mode), so the
//! variants exist to make diagnostics precise, not to drive recovery.

use thiserror::Error;

/// Failure inside the path-data mini-language (`d` attribute).
///
/// Lex failures (`MalformedNumber`, `DoubleDecimalPoint`) and grammar failures
/// (the rest) are both fatal to the enclosing path parse.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("malformed number in path data")]
    MalformedNumber,
    #[error("double decimal point in number")]
    DoubleDecimalPoint,
    #[error("unknown path command '{0}'")]
    UnknownCommand(char),
    #[error("wrong argument count for path command '{0}'")]
    InvalidArguments(char),
    #[error("path data ended before a close command")]
    UnterminatedPath,
    #[error("trailing data after close command, starting at '{0}'")]
    TrailingData(char),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid path data: {0}")]
    Path(#[from] PathError),

    /// Missing or malformed numeric attribute on a rect or polygon element.
    #[error("missing or malformed attribute '{0}'")]
    Attribute(&'static str),

    #[error("unrecognized color format '{0}'")]
    ColorFormat(String),

    /// Curve resolution is a startup configuration value, checked once.
    #[error("curve resolution must be > 0 and <= 1, got {0}")]
    InvalidResolution(f64),

    #[error("triangulation failed: {0}")]
    Triangulation(&'static str),

    /// The triangulator returned a vertex not present in its input ring.
    ///
    /// This is a contract violation between the core and its collaborator,
    /// not a data problem.
    #[error("internal consistency violation: {0}")]
    Internal(String),

    #[error("svg parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("json encode error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for failures that indicate a bug rather than bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Error::Internal(_))
    }
}
