//! Opening and closing record files.
//!
//! Streams are closed by dropping them, so every exit path releases the
//! file. Use [`finish`] on the happy path of a writer: dropping a
//! `BufWriter` flushes too, but swallows the error.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use log::{debug, info};
use rawcast::{ByteSink, IoStream};
use snafu::ResultExt;

use crate::error::{FlushSnafu, OpenSnafu, Result, SyncSnafu};

/// Buffered output stream over a file.
pub type FileSink = IoStream<BufWriter<File>>;

/// Buffered input stream over a file.
pub type FileSource = IoStream<BufReader<File>>;

/// Create (or truncate) `path` for writing.
pub fn create(path: impl AsRef<Path>) -> Result<FileSink> {
    let path = path.as_ref();
    let file = File::create(path).context(OpenSnafu { path })?;
    info!("writing {}", path.display());
    Ok(IoStream::new(BufWriter::new(file)))
}

/// Open `path` for reading.
pub fn open(path: impl AsRef<Path>) -> Result<FileSource> {
    let path = path.as_ref();
    let file = File::open(path).context(OpenSnafu { path })?;
    info!("reading {}", path.display());
    Ok(IoStream::new(BufReader::new(file)))
}

/// Flush and sync a file written through [`create`], then close it.
pub fn finish(mut sink: FileSink) -> Result<()> {
    sink.flush().context(FlushSnafu)?;
    sink.get_ref().get_ref().sync_all().context(SyncSnafu)?;
    debug!("output synced");
    Ok(())
}
