//! mirrorconv-io: Filesystem I/O for mirror documents.
//!
//! Loads documents from disk, runs them through `mirrorconv-pipeline`,
//! and stores the result. All logging goes through `tracing`; installing
//! a subscriber is left to the binary.

pub mod convert;
pub mod document;

pub use convert::{ConvertSummary, convert_file};
pub use document::{IoError, read_document, write_document};
