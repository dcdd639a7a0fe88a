use core::fmt;

/// Error from an encode or decode call.
#[derive(Debug)]
#[non_exhaustive]
pub enum CodecError {
    /// The sink accepted fewer bytes than the value needs.
    ShortWrite {
        /// Bytes the value needs.
        needed: usize,
        /// Bytes the sink accepted before it stopped.
        written: usize,
    },

    /// The source ran out before the value was complete.
    ///
    /// `available == 0` is a plain end of stream.
    ShortRead {
        /// Bytes the value needs.
        needed: usize,
        /// Bytes the source produced before it ended.
        available: usize,
    },

    /// Decoded text is not UTF-8.
    InvalidText {
        /// Length of the valid prefix.
        valid_up_to: usize,
    },

    /// Failure reported by a user stream implementation.
    Custom {
        /// Error description.
        message: &'static str,
    },

    /// The underlying I/O stream refused the operation.
    #[cfg(any(feature = "std", test))]
    StreamUnavailable {
        /// Error from the I/O layer.
        source: std::io::Error,
    },
}

impl CodecError {
    /// True when a read found no bytes at all.
    #[inline]
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Self::ShortRead { available: 0, .. })
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortWrite { needed, written } => {
                write!(f, "short write: {written} of {needed} bytes accepted")
            }
            Self::ShortRead {
                needed,
                available: 0,
            } => write!(f, "end of stream: needed {needed} bytes"),
            Self::ShortRead { needed, available } => {
                write!(
                    f,
                    "short read: needed {needed} bytes, only {available} available"
                )
            }
            Self::InvalidText { valid_up_to } => {
                write!(f, "invalid text: not UTF-8 after byte {valid_up_to}")
            }
            Self::Custom { message } => write!(f, "{message}"),
            #[cfg(any(feature = "std", test))]
            Self::StreamUnavailable { source } => write!(f, "stream unavailable: {source}"),
        }
    }
}

impl core::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(any(feature = "std", test))]
            Self::StreamUnavailable { source } => Some(source),
            _ => None,
        }
    }
}

#[cfg(any(feature = "std", test))]
impl From<std::io::Error> for CodecError {
    fn from(source: std::io::Error) -> Self {
        Self::StreamUnavailable { source }
    }
}

/// Result type for codec operations.
pub type Result<T> = core::result::Result<T, CodecError>;
