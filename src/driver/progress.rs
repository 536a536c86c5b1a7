//! Progress markers printed while converting.
//!
//! The console format is line-oriented per logical file:
//!
//! ```text
//! File 1 of block size 0x000a... EOF
//! File 2 of block size 0x0014.. EOF
//! EOF
//! ```
//!
//! Output errors are ignored and never abort a conversion.

use std::io::Write;

pub trait Progress {
    fn file_started(&mut self, file_no: u32, block_size: u16);
    fn record_accepted(&mut self);
    fn file_ended(&mut self, file_no: u32);
    fn container_ended(&mut self);
    fn bogus_block(&mut self, found: u16);
}

/// Writes progress markers to any `Write`, normally stdout.
pub struct ConsoleProgress<W: Write> {
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleProgress<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn file_started(&mut self, file_no: u32, block_size: u16) {
        let _ = write!(self.out, "File {} of block size 0x{:04x}", file_no, block_size);
    }

    fn record_accepted(&mut self) {
        let _ = self.out.write_all(b".");
    }

    fn file_ended(&mut self, _file_no: u32) {
        let _ = self.out.write_all(b" EOF\n");
        let _ = self.out.flush();
    }

    fn container_ended(&mut self) {
        let _ = self.out.write_all(b"EOF\n");
        let _ = self.out.flush();
    }

    fn bogus_block(&mut self, found: u16) {
        let _ = write!(self.out, "!\nBogus block of size 0x{:04x}.\n", found);
        let _ = self.out.flush();
    }
}

/// Discards all progress, for `--quiet` and library callers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn file_started(&mut self, _file_no: u32, _block_size: u16) {}
    fn record_accepted(&mut self) {}
    fn file_ended(&mut self, _file_no: u32) {}
    fn container_ended(&mut self) {}
    fn bogus_block(&mut self, _found: u16) {}
}

impl<P: Progress + ?Sized> Progress for &mut P {
    fn file_started(&mut self, file_no: u32, block_size: u16) {
        (**self).file_started(file_no, block_size)
    }
    fn record_accepted(&mut self) {
        (**self).record_accepted()
    }
    fn file_ended(&mut self, file_no: u32) {
        (**self).file_ended(file_no)
    }
    fn container_ended(&mut self) {
        (**self).container_ended()
    }
    fn bogus_block(&mut self, found: u16) {
        (**self).bogus_block(found)
    }
}
