//! Write the sample record to a file, read it back and print it.
//!
//! Run: cargo run --example roundtrip -- [file]

use std::process::ExitCode;

use log::error;
use rawbin::{Result, Sample, files};

fn write_data(path: &str) -> Result<()> {
    let mut out = files::create(path)?;
    Sample::answer().write_to(&mut out)?;
    files::finish(out)
}

fn read_data(path: &str) -> Result<Sample> {
    let mut input = files::open(path)?;
    Sample::read_from(&mut input)
}

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data.bin".to_owned());

    match write_data(&path).and_then(|()| read_data(&path)) {
        Ok(sample) => {
            println!("{sample}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
