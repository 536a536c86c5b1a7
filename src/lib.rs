//! tpcfix: re-frame TPC tape containers.
//!
//! A TPC container copied between hosts as a plain byte stream ends up as a
//! file of fixed 512-byte records. This crate reconstructs the original
//! variable-length logical records from such a file and writes them back out
//! with variable-length framing, checking the container structure as it goes.
//!
//! The pipeline is:
//!
//! | Module      | Responsibility |
//! |-------------|----------------|
//! | [`tape`]    | Block reader, working buffer, record demuxer, record writer/reader, container builder. |
//! | [`driver`]  | File/EOF state machine, progress reporting, the conversion loop. |
//! | [`io`]      | Opening and validating files, filename-level convert and verify. |
//! | [`cli`]     | Command-line parsing and logger setup for the `tpcfix` binary. |

pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod io;
pub mod tape;

// ── Version constants ────────────────────────────────────────────────────────
pub const TPCFIX_VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
pub const PROGRAM_NAME: &str = "tpcfix";

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    TPCFIX_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use driver::{convert_stream, ConversionSummary, Driver, FileSummary};
pub use error::{Error, Result};
pub use io::{convert_filename, verify_filename, Prefs};
pub use tape::{LogicalRecord, VarFraming, VarRecordReader, VarRecordWriter};
