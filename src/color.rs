//! Fill color parsing.
//!
//! Supports `#RRGGBB` and `#RGB`, hex digits case-insensitive. Channels are
//! normalized so that a full-scale digit group maps to exactly 1.0.

use serde::Serialize;

use crate::error::Error;

/// RGBA color with channels in [0, 1].
///
/// The all-zero default is used when a shape carries no fill attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Parse a `#RRGGBB` or `#RGB` token.
    ///
    /// Any other shape, including a missing `#` or a non-hex digit, fails
    /// with [`Error::ColorFormat`].
    pub fn parse(token: &str) -> Result<Color, Error> {
        let bad = || Error::ColorFormat(token.to_owned());

        let digits = token.strip_prefix('#').ok_or_else(bad)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }

        let (r, g, b) = match digits.len() {
            3 => (
                channel(&digits[0..1])?,
                channel(&digits[1..2])?,
                channel(&digits[2..3])?,
            ),
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            _ => return Err(bad()),
        };

        Ok(Color { r, g, b, a: 0.0 })
    }
}

/// Normalize one hex digit group: `F` -> 15/15, `FF` -> 255/255.
fn channel(hex: &str) -> Result<f64, Error> {
    let value =
        u32::from_str_radix(hex, 16).map_err(|_| Error::ColorFormat(hex.to_owned()))?;
    let max = (1u32 << (4 * hex.len())) - 1;
    Ok(f64::from(value) / f64::from(max))
}

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;
