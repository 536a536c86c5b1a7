//! File-level operations.
//!
//! This module assembles the file I/O sub-modules and re-exports what the CLI
//! and library users call.

pub mod convert;
pub mod file_io;
pub mod prefs;
pub mod verify;

pub use prefs::Prefs;

// ── Opening files ─────────────────────────────────────────────────────────────
/// Open and validate a fixed 512-byte record input file.
pub use file_io::open_src_file;

/// Create a fresh output file; never overwrites.
pub use file_io::create_dst_file;

// ── Conversion ───────────────────────────────────────────────────────────────
/// Convert one input file to one output file.
pub use convert::convert_filename;

// ── Verification ─────────────────────────────────────────────────────────────
/// Compare a converted output file against its input, record by record.
pub use verify::{verify_filename, verify_stream, VerifyReport};
