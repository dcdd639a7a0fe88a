//! Flat binary record files.
//!
//! Thin glue over [`rawcast`]: it opens and closes files, and knows the
//! two record layouts used by the demo programs. All byte layout decisions
//! live in `rawcast`.
//!
//! ```no_run
//! use rawbin::{Sample, files};
//!
//! let mut out = files::create("data.bin")?;
//! Sample::answer().write_to(&mut out)?;
//! files::finish(out)?;
//!
//! let mut input = files::open("data.bin")?;
//! assert_eq!(Sample::read_from(&mut input)?, Sample::answer());
//! # Ok::<(), rawbin::Error>(())
//! ```

#![warn(missing_docs)]

mod error;
pub mod files;
mod numbers;
mod sample;

pub use error::{Error, Result};
pub use numbers::{parse_numbers, read_numbers, write_numbers};
pub use sample::{SAMPLE_TEXT_LEN, Sample};

pub use rawcast;
