//! Pixel-to-fraction coordinate transform.
//!
//! Converts pixel-space mirror endpoints into fractions of a reference
//! frame:
//!
//! ```text
//! frac_x = pixel_x / frame_width
//! frac_y = pixel_y / frame_height
//! ```
//!
//! Points inside the frame land in `[0, 1]`. Points outside it are not
//! clamped and produce fractions outside that range.

use crate::types::{Mirror, Point, Resolution};

/// Divide every endpoint of every mirror by `frame`.
///
/// Order and `absorption_factor` are preserved. Each component is a
/// true division, so the result equals `x / width` bit for bit.
#[must_use]
pub fn to_fractions(mirrors: &[Mirror], frame: Resolution) -> Vec<Mirror> {
    let width = f64::from(frame.width);
    let height = f64::from(frame.height);
    mirrors
        .iter()
        .map(|m| m.map_points(|p| Point::new(p.x / width, p.y / height)))
        .collect()
}
