// Integration tests for src/driver.rs: Driver / convert_stream
//
// Whole-container behaviour: round trip, empty container, truncation,
// inconsistent block size, idempotence, progress output, I/O failures.

use std::io::{self, Cursor, Write};

use tpcfix::config::{MAX_RECORD_LENGTH, PHYSICAL_BLOCK_SIZE};
use tpcfix::driver::{convert_stream, ConsoleProgress, Driver, FileSummary, NoProgress};
use tpcfix::tape::{ContainerBuilder, FixedBlockReader, VarFraming, VarRecordReader, VarRecordWriter};
use tpcfix::Error;

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn convert(input: Vec<u8>) -> Result<(Vec<u8>, tpcfix::ConversionSummary), Error> {
    let mut out = Vec::new();
    let summary = convert_stream(Cursor::new(input), &mut out, VarFraming::Counted, NoProgress)?;
    Ok((out, summary))
}

fn read_back(out: &[u8], framing: VarFraming) -> Vec<Vec<u8>> {
    VarRecordReader::new(Cursor::new(out), framing)
        .collect::<Result<_, _>>()
        .unwrap()
}

/// Accepts `limit` bytes, then fails every write.
struct FullDisk {
    written: Vec<u8>,
    limit: usize,
}

impl Write for FullDisk {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::Other, "no space left on device"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Well-formed containers
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn two_files_reported_with_progress() {
    let input = ContainerBuilder::new()
        .pattern_file(10, 3)
        .pattern_file(20, 2)
        .end()
        .into_blocks();
    let mut out = Vec::new();
    let mut progress = ConsoleProgress::new(Vec::new());
    let summary =
        convert_stream(Cursor::new(input), &mut out, VarFraming::Counted, &mut progress).unwrap();

    assert_eq!(
        summary.files,
        vec![
            FileSummary { file_no: 1, block_size: 10, records: 3 },
            FileSummary { file_no: 2, block_size: 20, records: 2 },
        ]
    );
    let text = String::from_utf8(progress.into_inner()).unwrap();
    assert_eq!(
        text,
        "File 1 of block size 0x000a... EOF\nFile 2 of block size 0x0014.. EOF\nEOF\n"
    );
    let lengths: Vec<usize> = read_back(&out, VarFraming::Counted).iter().map(Vec::len).collect();
    assert_eq!(lengths, [10, 10, 10, 0, 20, 20, 0, 0]);
}

#[test]
fn round_trip_preserves_every_record() {
    let containers = [
        ContainerBuilder::new().pattern_file(1, 1).end(),
        ContainerBuilder::new().pattern_file(80, 50).pattern_file(2048, 9).end(),
        ContainerBuilder::new()
            .pattern_file(MAX_RECORD_LENGTH, 3)
            .pattern_file(511, 7)
            .pattern_file(PHYSICAL_BLOCK_SIZE, 4)
            .end(),
    ];
    for builder in containers {
        for framing in [VarFraming::Counted, VarFraming::WordAligned] {
            let mut out = Vec::new();
            convert_stream(Cursor::new(builder.clone().into_blocks()), &mut out, framing, NoProgress)
                .unwrap();
            assert_eq!(read_back(&out, framing), builder.records());
        }
    }
}

#[test]
fn empty_container_yields_single_terminator() {
    let input = ContainerBuilder::new().end().end().into_blocks();
    let (out, summary) = convert(input).unwrap();
    assert_eq!(out, [0, 0]);
    assert!(summary.files.is_empty());
    assert_eq!(summary.records_written, 1);
}

#[test]
fn data_after_double_eof_is_ignored() {
    let builder = ContainerBuilder::new().pattern_file(6, 2).end();
    let expected = builder.as_bytes().to_vec();
    let input = builder.raw(b"\x05\x00junk and more junk").into_blocks();
    let (out, _) = convert(input).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn conversion_is_idempotent() {
    let input = ContainerBuilder::new()
        .pattern_file(300, 20)
        .pattern_file(17, 3)
        .end()
        .into_blocks();
    let (first, _) = convert(input.clone()).unwrap();
    let (second, _) = convert(input).unwrap();
    assert_eq!(first, second);
}

// ═════════════════════════════════════════════════════════════════════════════
// Structural failures
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn missing_terminator_is_truncated() {
    let input = ContainerBuilder::new()
        .record(&[1u8; 254])
        .record(&[2u8; 254])
        .into_blocks();
    assert_eq!(input.len(), PHYSICAL_BLOCK_SIZE);
    assert!(matches!(convert(input), Err(Error::TruncatedRecord { .. })));
}

#[test]
fn record_cut_by_end_of_file_is_truncated() {
    let input = ContainerBuilder::new()
        .pattern_file(100, 2)
        .raw(&600u16.to_le_bytes())
        .into_blocks();
    match convert(input) {
        Err(Error::TruncatedRecord { offset, needed, .. }) => {
            assert_eq!(offset, 2 * 102 + 2);
            assert_eq!(needed, 602);
        }
        other => panic!("expected TruncatedRecord, got {other:?}"),
    }
}

#[test]
fn inconsistent_block_size_stops_before_the_mismatch() {
    let input = ContainerBuilder::new()
        .record(&[0xA1; 12])
        .record(&[0xB2; 14])
        .record(&[0xC3; 12])
        .terminator()
        .end()
        .into_blocks();
    let mut progress = ConsoleProgress::new(Vec::new());
    let mut driver = Driver::new(
        FixedBlockReader::new(Cursor::new(input)),
        VarRecordWriter::new(Vec::new(), VarFraming::Counted),
        &mut progress,
    );

    let err = driver.run().unwrap_err();
    assert!(matches!(
        err,
        Error::InconsistentBlockSize { file_no: 1, expected: 12, found: 14 }
    ));
    let out = driver.into_sink().into_inner().unwrap();
    assert_eq!(read_back(&out, VarFraming::Counted), vec![vec![0xA1; 12]]);

    let text = String::from_utf8(progress.into_inner()).unwrap();
    assert_eq!(text, "File 1 of block size 0x000c.!\nBogus block of size 0x000e.\n");
}

#[test]
fn failed_driver_keeps_failing() {
    let input = ContainerBuilder::new()
        .record(&[1; 4])
        .record(&[2; 5])
        .terminator()
        .end()
        .into_blocks();
    let mut driver = Driver::new(
        FixedBlockReader::new(Cursor::new(input)),
        VarRecordWriter::new(Vec::new(), VarFraming::Counted),
        NoProgress,
    );

    assert!(driver.run().is_err());
    for _ in 0..2 {
        assert!(matches!(
            driver.run(),
            Err(Error::InconsistentBlockSize { file_no: 1, expected: 4, found: 5 })
        ));
        assert!(matches!(
            driver.step(),
            Err(Error::InconsistentBlockSize { file_no: 1, expected: 4, found: 5 })
        ));
    }
    assert_eq!(driver.summary().records_written, 1);
    assert_eq!(driver.into_sink().into_inner().unwrap(), [4, 0, 1, 1, 1, 1]);
}

#[test]
fn inconsistency_in_a_later_file_keeps_earlier_files() {
    let input = ContainerBuilder::new()
        .pattern_file(5, 2)
        .record(&[7; 9])
        .record(&[8; 3])
        .into_blocks();
    let mut out = Vec::new();
    let err = convert_stream(Cursor::new(input), &mut out, VarFraming::Counted, NoProgress)
        .unwrap_err();
    assert!(matches!(err, Error::InconsistentBlockSize { file_no: 2, .. }));
    let lengths: Vec<usize> = read_back(&out, VarFraming::Counted).iter().map(Vec::len).collect();
    assert_eq!(lengths, [5, 5, 0, 9]);
}

// ═════════════════════════════════════════════════════════════════════════════
// I/O failures
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn write_failure_aborts_with_partial_output() {
    let input = ContainerBuilder::new().pattern_file(40, 10).end().into_blocks();
    let mut sink = FullDisk { written: Vec::new(), limit: 100 };
    let err = convert_stream(Cursor::new(input), &mut sink, VarFraming::Counted, NoProgress)
        .unwrap_err();
    assert!(matches!(err, Error::SinkWrite { .. }));
    assert!(!sink.written.is_empty());
    assert!(sink.written.len() <= 100);
}
