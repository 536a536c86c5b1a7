// config.rs: Compile-time configuration constants.
//
// The 512-byte physical block and the 32767-byte record ceiling are fixed by
// the fixed-record transfer convention and the record management limits of the
// systems that write TPC tapes; neither is configurable at runtime.

/// Size of one physical block of a fixed-record source file.
pub const PHYSICAL_BLOCK_SIZE: usize = 512;

/// Width of the little-endian length prefix in front of every logical record.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Largest payload a logical record may declare.
pub const MAX_RECORD_LENGTH: usize = 32_767;

/// Working buffer capacity: one maximal record rounded up to a whole block,
/// plus one block of read-ahead so a refill never overflows.
pub const WORKING_BUFFER_CAPACITY: usize = 32_768 + PHYSICAL_BLOCK_SIZE;

// Buffer sizes for the `BufReader` / `BufWriter` wrapped around the files.
pub const INPUT_BUFFER_SIZE: usize = 64 * PHYSICAL_BLOCK_SIZE;
pub const OUTPUT_BUFFER_SIZE: usize = 64 * 1024;

/// Process exit status after a container was converted up to its double EOF.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit status for every abort: usage, open/create, structure, I/O.
pub const EXIT_ABORT: i32 = 1;

/// Environment variable read by the logger for filter directives.
pub const LOG_ENV: &str = "TPCFIX_LOG";

// A maximal record is fully buffered while at most one block short, and the
// next refill must still fit.
const _: () = assert!(
    LENGTH_PREFIX_SIZE + MAX_RECORD_LENGTH - 1 + PHYSICAL_BLOCK_SIZE <= WORKING_BUFFER_CAPACITY
);
const _: () = assert!(WORKING_BUFFER_CAPACITY % PHYSICAL_BLOCK_SIZE == 0);
const _: () = assert!(MAX_RECORD_LENGTH <= u16::MAX as usize);
