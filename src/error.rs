//! Errors for record files.

use std::path::PathBuf;

use rawcast::CodecError;
use snafu::Snafu;

/// Error from reading or writing a record file.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// The file could not be opened or created.
    #[snafu(display("could not open {}", path.display()))]
    Open {
        /// Path as given by the caller.
        path: PathBuf,
        /// Error from the file system.
        source: std::io::Error,
    },

    /// Buffered bytes could not be pushed to the file.
    #[snafu(display("could not flush output"))]
    Flush {
        /// Error from the stream.
        source: CodecError,
    },

    /// The file contents could not be synced to disk.
    #[snafu(display("could not sync output to disk"))]
    Sync {
        /// Error from the file system.
        source: std::io::Error,
    },

    /// A text field does not have the length the schema fixes for it.
    #[snafu(display("text field must be {expected} bytes, got {actual}"))]
    TextLength {
        /// Length fixed by the schema.
        expected: usize,
        /// Length of the offending text.
        actual: usize,
    },

    /// Encoding or decoding failed.
    #[snafu(transparent)]
    Codec {
        /// Error from the codec.
        source: CodecError,
    },
}

/// Result type for record file operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
