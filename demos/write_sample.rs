//! Write the sample record (42, 42.0, "hola") to a file.
//!
//! Run: cargo run --example write_sample -- [output_file]

use std::process::ExitCode;

use log::error;
use rawbin::{Error, Sample, files};

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "my-file.bin".to_owned());

    let result = files::create(&path).and_then(|mut out| {
        Sample::answer().write_to(&mut out)?;
        files::finish(out)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ Error::Open { .. }) => {
            error!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
