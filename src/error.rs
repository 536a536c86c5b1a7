//! Error taxonomy for the conversion pipeline.
//!
//! Every variant is terminal for the run: nothing is retried, and the binary
//! maps all of them to [`EXIT_ABORT`].

use std::io;
use std::path::PathBuf;

use crate::config::EXIT_ABORT;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{message}")]
    Usage { message: String },

    #[error("Cannot open input file `{}`", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Expected input file of fixed 512b record size: `{}` {reason}", .path.display())]
    SourceFormat { path: PathBuf, reason: String },

    #[error("Cannot attach to input file `{}`", .path.display())]
    SourceConnect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create output file `{}`", .path.display())]
    SinkCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot attach to output file `{}`", .path.display())]
    SinkConnect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(
        "Unexpected End of File: record at offset {offset} needs {needed} bytes, {available} available"
    )]
    TruncatedRecord {
        offset: u64,
        needed: usize,
        available: usize,
    },

    #[error("Bogus block of size 0x{found:04x} in file {file_no} of block size 0x{expected:04x}")]
    InconsistentBlockSize { file_no: u32, expected: u16, found: u16 },

    #[error("Record at offset {offset} declares 0x{length:04x} bytes, maximum is 0x{max:04x}")]
    OversizedRecord { offset: u64, length: usize, max: usize },

    #[error("Read failed on input")]
    SourceRead {
        #[source]
        source: io::Error,
    },

    #[error("Write failed on output")]
    SinkWrite {
        #[source]
        source: io::Error,
    },

    #[error("Working buffer overflow: {len} buffered + {incoming} incoming exceeds {capacity}")]
    BufferOverflow {
        len: usize,
        incoming: usize,
        capacity: usize,
    },

    #[error("Cannot open output file `{}` for verification", .path.display())]
    VerifyOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Verification failed at record {record}: {reason}")]
    VerifyMismatch { record: u64, reason: String },
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        EXIT_ABORT
    }

    /// True for errors caused by the container contents rather than the
    /// environment (files, permissions, devices).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::TruncatedRecord { .. }
                | Error::InconsistentBlockSize { .. }
                | Error::OversizedRecord { .. }
        )
    }
}
