//! Output verification.
//!
//! The input is run through the same [`Driver`] a conversion uses, but the
//! sink compares every record with the next record read back from the output
//! instead of writing it.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::config::{INPUT_BUFFER_SIZE, OUTPUT_BUFFER_SIZE};
use crate::driver::{Driver, NoProgress};
use crate::error::{Error, Result};
use crate::io::file_io::open_src_file;
use crate::tape::{FixedBlockReader, RecordWrite, VarFraming, VarRecordReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    /// Records compared, terminators included.
    pub records: u64,
    pub files: usize,
}

struct CompareSink<R> {
    output: VarRecordReader<R>,
}

impl<R: Read> RecordWrite for CompareSink<R> {
    fn write_record(&mut self, payload: &[u8]) -> Result<()> {
        let record = self.output.records_read();
        match self.output.next_record()? {
            Some(found) if found == payload => Ok(()),
            Some(found) if found.len() != payload.len() => Err(Error::VerifyMismatch {
                record,
                reason: format!(
                    "output record has {} bytes, input record has {}",
                    found.len(),
                    payload.len()
                ),
            }),
            Some(_) => Err(Error::VerifyMismatch {
                record,
                reason: "payload differs".to_owned(),
            }),
            None => Err(Error::VerifyMismatch {
                record,
                reason: "output ends early".to_owned(),
            }),
        }
    }
}

/// Check that `output` holds exactly the logical records of the fixed-block
/// container `input`, in order, and nothing more.
pub fn verify_stream<I: Read, O: Read>(
    input: I,
    output: O,
    framing: VarFraming,
) -> Result<VerifyReport> {
    let sink = CompareSink {
        output: VarRecordReader::new(output, framing),
    };
    let mut driver = Driver::new(FixedBlockReader::new(input), sink, NoProgress);
    let summary = driver.run()?;

    let mut sink = driver.into_sink();
    let record = sink.output.records_read();
    if sink.output.next_record()?.is_some() {
        return Err(Error::VerifyMismatch {
            record,
            reason: "output has records after the container end".to_owned(),
        });
    }

    Ok(VerifyReport {
        records: summary.records_written,
        files: summary.files.len(),
    })
}

pub fn verify_filename(input: &Path, output: &Path, framing: VarFraming) -> Result<VerifyReport> {
    let src = BufReader::with_capacity(INPUT_BUFFER_SIZE, open_src_file(input)?);
    let out = File::open(output).map_err(|source| Error::VerifyOpen {
        path: output.to_path_buf(),
        source,
    })?;
    verify_stream(src, BufReader::with_capacity(OUTPUT_BUFFER_SIZE, out), framing)
}
