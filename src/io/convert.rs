//! Filename-level conversion.

use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::config::{INPUT_BUFFER_SIZE, OUTPUT_BUFFER_SIZE};
use crate::driver::{convert_stream, ConsoleProgress, ConversionSummary, NoProgress};
use crate::error::Result;
use crate::io::file_io::{create_dst_file, open_src_file};
use crate::io::prefs::Prefs;
use crate::io::verify::verify_filename;

/// Convert the fixed-block container at `input` into a new variable-length
/// record file at `output`.
///
/// The output is created before any data is read and is left partially
/// written if the conversion fails part way.
pub fn convert_filename(input: &Path, output: &Path, prefs: &Prefs) -> Result<ConversionSummary> {
    let src = BufReader::with_capacity(INPUT_BUFFER_SIZE, open_src_file(input)?);
    let dst = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, create_dst_file(output)?);

    let converted = if prefs.progress {
        convert_stream(src, dst, prefs.framing, ConsoleProgress::stdout())
    } else {
        convert_stream(src, dst, prefs.framing, NoProgress)
    };
    let summary = converted.map_err(|err| {
        if err.is_structural() {
            log::warn!(
                "`{}` is not a well-formed container; `{}` holds the records before the fault",
                input.display(),
                output.display()
            );
        }
        err
    })?;

    log::info!(
        "`{}` -> `{}`: {} files, {} records, {} container bytes",
        input.display(),
        output.display(),
        summary.files.len(),
        summary.records_written,
        summary.bytes_consumed
    );

    if prefs.verify {
        let report = verify_filename(input, output, prefs.framing)?;
        log::info!("verified {} records in `{}`", report.records, output.display());
    }

    Ok(summary)
}
