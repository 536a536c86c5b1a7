//! Opening the input and creating the output.
//!
//! - [`open_src_file`] opens the input and checks, before any data is read,
//!   that it has the fixed 512-byte record shape: a regular file whose length
//!   is a whole number of physical blocks.
//! - [`create_dst_file`] creates the output; an existing file is an error,
//!   never overwritten.
//!
//! Both return a plain [`File`]; it is closed when dropped, on every path.

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::config::PHYSICAL_BLOCK_SIZE;
use crate::error::{Error, Result};

pub fn open_src_file(path: &Path) -> Result<File> {
    let file = File::open(path).map_err(|source| Error::SourceOpen {
        path: path.to_path_buf(),
        source,
    })?;
    let meta = file.metadata().map_err(|source| Error::SourceConnect {
        path: path.to_path_buf(),
        source,
    })?;

    if !meta.is_file() {
        return Err(Error::SourceFormat {
            path: path.to_path_buf(),
            reason: "is not a regular file".to_owned(),
        });
    }
    let len = meta.len();
    if len % PHYSICAL_BLOCK_SIZE as u64 != 0 {
        return Err(Error::SourceFormat {
            path: path.to_path_buf(),
            reason: format!(
                "has length {}, not a multiple of {} bytes",
                len, PHYSICAL_BLOCK_SIZE
            ),
        });
    }

    log::debug!(
        "input `{}`: {} blocks of {} bytes",
        path.display(),
        len / PHYSICAL_BLOCK_SIZE as u64,
        PHYSICAL_BLOCK_SIZE
    );
    Ok(file)
}

pub fn create_dst_file(path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| Error::SinkCreate {
            path: path.to_path_buf(),
            source,
        })?;
    file.metadata().map_err(|source| Error::SinkConnect {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("output `{}` created", path.display());
    Ok(file)
}
