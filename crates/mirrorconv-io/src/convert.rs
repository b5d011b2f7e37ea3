//! Batch conversion of a mirror document file.

use std::path::Path;

use mirrorconv_pipeline::{ConvertConfig, Resolution};

use crate::document::{IoError, read_document, write_document};

/// What a [`convert_file`] run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Number of mirrors written.
    pub mirrors: usize,
    /// Whether coordinates were divided by the reference resolution.
    pub to_fractions: bool,
    /// Whether the output overwrote the input file.
    pub in_place: bool,
}

/// Load the document at `input`, convert it, and write it to `output`.
///
/// With `to_fractions` set, each `start_pos`/`end_pos` is divided
/// component-wise by [`Resolution::REFERENCE`]; otherwise coordinates
/// are copied unchanged as floats. `absorption_factor` is preserved
/// verbatim. `output` is created or overwritten and may name the same
/// file as `input`.
///
/// Converting to fractions in place is not repeatable: a second run
/// divides again. Tagged documents are refused by the pipeline; for
/// untagged ones a warning is logged.
///
/// # Errors
///
/// Returns an [`IoError`] if the input cannot be read or parsed, the
/// document cannot be converted, or the output cannot be written.
pub fn convert_file(
    input: &Path,
    output: &Path,
    to_fractions: bool,
) -> Result<ConvertSummary, IoError> {
    let config = ConvertConfig { to_fractions };
    let in_place = same_file(input, output);

    let document = read_document(input)?;
    if to_fractions && in_place && document.coord_format.is_none() {
        tracing::warn!(
            path = %input.display(),
            "converting to fractions in place; running again will divide the coordinates a second time",
        );
    }

    let converted = mirrorconv_pipeline::convert(&document, &config)?;
    write_document(output, &converted)?;

    let summary = ConvertSummary {
        mirrors: converted.mirrors.len(),
        to_fractions,
        in_place,
    };
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        mirrors = summary.mirrors,
        to_fractions,
        reference_width = Resolution::REFERENCE_WIDTH,
        reference_height = Resolution::REFERENCE_HEIGHT,
        "converted mirror document",
    );
    Ok(summary)
}

/// Whether `a` and `b` name the same existing file.
///
/// A path that does not exist yet cannot alias anything.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
