//! The conversion loop.
//!
//! [`Driver`] ties the pieces together: it pulls the next record from the
//! [`RecordDemuxer`], feeds its length to the [`StateMachine`], reports
//! progress, writes the record, and only then compacts the working buffer.
//! The loop ends at the container's double EOF or on the first error.

pub mod progress;
pub mod state;

use std::io::{Read, Write};

pub use progress::{ConsoleProgress, NoProgress, Progress};
pub use state::{DriverState, FailureReason, StateMachine, Transition};

use crate::error::{Error, Result};
use crate::tape::{
    BlockRead, FixedBlockReader, RecordDemuxer, RecordWrite, VarFraming, VarRecordWriter,
    WorkingBuffer,
};

/// Shape of one logical file seen during a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSummary {
    pub file_no: u32,
    pub block_size: u16,
    /// Non-terminator records in the file.
    pub records: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub files: Vec<FileSummary>,
    /// Records written, terminators included.
    pub records_written: u64,
    /// Container bytes consumed up to and including the final terminator.
    pub bytes_consumed: u64,
    pub blocks_read: u64,
}

pub struct Driver<S, W, P> {
    demuxer: RecordDemuxer<S>,
    sink: W,
    progress: P,
    buffer: WorkingBuffer,
    machine: StateMachine,
    summary: ConversionSummary,
}

impl<S: BlockRead, W: RecordWrite, P: Progress> Driver<S, W, P> {
    pub fn new(source: S, sink: W, progress: P) -> Self {
        Self {
            demuxer: RecordDemuxer::new(source),
            sink,
            progress,
            buffer: WorkingBuffer::new(),
            machine: StateMachine::new(),
            summary: ConversionSummary::default(),
        }
    }

    pub fn state(&self) -> DriverState {
        self.machine.state()
    }

    pub fn summary(&self) -> &ConversionSummary {
        &self.summary
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Process records until the double EOF.
    pub fn run(&mut self) -> Result<ConversionSummary> {
        while !self.step()? {}
        Ok(self.summary.clone())
    }

    /// Process one record. Returns `true` once the container has ended.
    ///
    /// A driver that already failed keeps returning the error that stopped it.
    pub fn step(&mut self) -> Result<bool> {
        if let Some(err) = self.failure() {
            return Err(err);
        }
        if self.machine.state() == DriverState::Done {
            return Ok(true);
        }

        let record = self.demuxer.next_record(&mut self.buffer)?;
        let consumed = record.encoded_len();
        let transition = self.machine.step(record.length());

        if !transition.writes_record() {
            if let Transition::Rejected { found, .. } = transition {
                self.progress.bogus_block(found);
            }
            return match self.failure() {
                Some(err) => Err(err),
                None => Ok(true),
            };
        }

        match transition {
            Transition::FileStarted { file_no, block_size } => {
                log::debug!("file {} starts with block size {:#06x}", file_no, block_size);
                self.progress.file_started(file_no, block_size);
                self.progress.record_accepted();
                self.summary.files.push(FileSummary {
                    file_no,
                    block_size,
                    records: 1,
                });
            }
            Transition::RecordAccepted => {
                self.progress.record_accepted();
                if let Some(file) = self.summary.files.last_mut() {
                    file.records += 1;
                }
            }
            Transition::FileEnded { file_no } => {
                log::debug!("file {} ends at container offset {}", file_no, self.demuxer.offset());
                self.progress.file_ended(file_no);
            }
            Transition::ContainerEnded => {
                self.progress.container_ended();
            }
            Transition::Rejected { .. } | Transition::Halted => {}
        }

        self.sink.write_record(record.payload())?;
        self.summary.records_written += 1;

        self.demuxer.consume(&mut self.buffer, consumed);
        self.summary.bytes_consumed = self.demuxer.offset();
        self.summary.blocks_read = self.demuxer.source().blocks_read();

        if transition == Transition::ContainerEnded {
            if !self.buffer.is_empty() {
                log::debug!(
                    "{} buffered bytes after the double EOF ignored",
                    self.buffer.len()
                );
            }
            return Ok(true);
        }
        Ok(false)
    }
}

impl<S, W, P> Driver<S, W, P> {
    /// The error a failed driver stopped with.
    fn failure(&self) -> Option<Error> {
        match self.machine.state() {
            DriverState::Failed(FailureReason::InconsistentBlockSize { expected, found }) => {
                Some(Error::InconsistentBlockSize {
                    file_no: self.machine.file_no(),
                    expected,
                    found,
                })
            }
            _ => None,
        }
    }
}

/// Convert a fixed-block container read from `src` into variable-length
/// records written to `dst`. `dst` is flushed before returning.
pub fn convert_stream<R, W, P>(
    src: R,
    dst: W,
    framing: VarFraming,
    progress: P,
) -> Result<ConversionSummary>
where
    R: Read,
    W: Write,
    P: Progress,
{
    let mut driver = Driver::new(
        FixedBlockReader::new(src),
        VarRecordWriter::new(dst, framing),
        progress,
    );
    let summary = driver.run()?;
    let sink = driver.into_sink();
    log::debug!(
        "{} records, {} bytes written",
        sink.records_written(),
        sink.bytes_written()
    );
    sink.into_inner()?;
    Ok(summary)
}
