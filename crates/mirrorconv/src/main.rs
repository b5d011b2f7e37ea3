//! mirrorconv: convert a mirror scene file between pixel and fractional
//! coordinates.
//!
//! Reads a `{"mirrors": [...]}` document, optionally divides every
//! endpoint by the 1080×1920 reference frame, and writes the result.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin mirrorconv -- [--to-fractions] <INPUT> <OUTPUT>
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

#![allow(clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Convert mirror scene coordinates to reference-frame fractions.
///
/// Without `--to-fractions` the mirrors are rewritten unchanged with
/// float coordinates. `OUTPUT` may be the same file as `INPUT`.
#[derive(Parser)]
#[command(name = "mirrorconv", version)]
struct Cli {
    /// Path to the input mirror document.
    input: PathBuf,

    /// Path to write the converted document to (overwritten if present).
    output: PathBuf,

    /// Divide coordinates by the 1080×1920 reference resolution.
    #[arg(long)]
    to_fractions: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match mirrorconv_io::convert_file(&cli.input, &cli.output, cli.to_fractions) {
        Ok(summary) => {
            tracing::debug!(?summary, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
