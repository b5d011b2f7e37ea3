//! mirrorconv-pipeline: Pure mirror document transforms (sans-IO).
//!
//! Holds the mirror document model and the coordinate transforms applied
//! to it:
//!
//! - pixels -> fractions of the 1080×1920 reference frame ([`normalize`])
//! - tagged document -> window pixels ([`resolve`])
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! documents. Reading and writing files lives in `mirrorconv-io`.

pub mod normalize;
pub mod resolve;
pub mod types;

pub use resolve::resolve;
pub use types::{
    ConvertConfig, ConvertError, CoordFormat, Mirror, MirrorDocument, Point, Resolution,
};

/// Convert a mirror document according to `config`.
///
/// With `to_fractions` set, every endpoint is divided component-wise by
/// [`Resolution::REFERENCE`]. Otherwise the mirrors are copied unchanged
/// (their coordinates are already floats once deserialized). In both
/// cases mirror count, order, and `absorption_factor` are preserved.
///
/// A `coord_format` tag, if present, follows the conversion: it becomes
/// `"fractions"` after dividing. Untagged documents stay untagged.
///
/// # Errors
///
/// Returns [`ConvertError::AlreadyFractional`] if `to_fractions` is set
/// and the document is already tagged `"fractions"`.
pub fn convert(
    document: &MirrorDocument,
    config: &ConvertConfig,
) -> Result<MirrorDocument, ConvertError> {
    if !config.to_fractions {
        return Ok(document.clone());
    }

    if document.coord_format == Some(CoordFormat::Fractions) {
        return Err(ConvertError::AlreadyFractional);
    }

    Ok(MirrorDocument {
        coord_format: document.coord_format.map(|_| CoordFormat::Fractions),
        mirrors: normalize::to_fractions(&document.mirrors, Resolution::REFERENCE),
    })
}
