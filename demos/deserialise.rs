//! Print the integers stored in a file by the `serialise` demo, one per line.
//!
//! Run: cargo run --example deserialise -- <input_file>

use std::process::ExitCode;

use log::error;
use rawbin::{files, read_numbers};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: deserialise <input_file>");
        return ExitCode::FAILURE;
    }

    let mut input = match files::open(&args[1]) {
        Ok(input) => input,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    match read_numbers(&mut input) {
        Ok(numbers) => {
            for n in numbers {
                println!("{n}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
