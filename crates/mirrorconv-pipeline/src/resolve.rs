//! Fraction-to-window coordinate transform.
//!
//! The renderer places mirrors in a concrete window. A document tagged
//! `"pixels"` is already in window space; a document tagged
//! `"fractions"` is scaled up by the window size.

use crate::types::{ConvertError, CoordFormat, Mirror, MirrorDocument, Point, Resolution};

/// Resolve a tagged document into window-space mirrors.
///
/// # Errors
///
/// Returns [`ConvertError::MissingCoordFormat`] if the document carries
/// no `coord_format` tag, since its coordinate space cannot be inferred.
pub fn resolve(
    document: &MirrorDocument,
    window: Resolution,
) -> Result<Vec<Mirror>, ConvertError> {
    match document.coord_format {
        Some(CoordFormat::Pixels) => Ok(document.mirrors.clone()),
        Some(CoordFormat::Fractions) => {
            let width = f64::from(window.width);
            let height = f64::from(window.height);
            Ok(document
                .mirrors
                .iter()
                .map(|m| m.map_points(|p| Point::new(p.x * width, p.y * height)))
                .collect())
        }
        None => Err(ConvertError::MissingCoordFormat),
    }
}
