//! Loading and storing mirror documents on disk.
//!
//! Files are read and written whole; no handle outlives a call.

use std::path::{Path, PathBuf};

use mirrorconv_pipeline::{ConvertError, MirrorDocument};

/// Errors that can occur while loading, converting, or storing a
/// document.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// The input file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// File that was being read.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The input file is not a valid mirror document.
    ///
    /// Covers malformed JSON as well as missing `mirrors`, `start_pos`,
    /// `end_pos`, or `absorption_factor` keys.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying JSON error, with line and column.
        source: serde_json::Error,
    },

    /// The converted document could not be serialized.
    #[error("failed to serialize document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// File that was being written.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The document was read but could not be converted.
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

/// Read and parse the mirror document at `path`.
///
/// # Errors
///
/// Returns [`IoError::Read`] if the file cannot be read and
/// [`IoError::Parse`] if its contents are not a mirror document.
pub fn read_document(path: &Path) -> Result<MirrorDocument, IoError> {
    let text = std::fs::read_to_string(path).map_err(|source| IoError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: MirrorDocument =
        serde_json::from_str(&text).map_err(|source| IoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        path = %path.display(),
        mirrors = document.mirrors.len(),
        "loaded mirror document",
    );
    Ok(document)
}

/// Serialize `document` as compact JSON and write it to `path`,
/// creating the file or truncating an existing one.
///
/// # Errors
///
/// Returns [`IoError::Serialize`] if serialization fails and
/// [`IoError::Write`] if the file cannot be written.
pub fn write_document(path: &Path, document: &MirrorDocument) -> Result<(), IoError> {
    let json = serde_json::to_string(document).map_err(IoError::Serialize)?;
    std::fs::write(path, &json).map_err(|source| IoError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        path = %path.display(),
        mirrors = document.mirrors.len(),
        bytes = json.len(),
        "stored mirror document",
    );
    Ok(())
}
