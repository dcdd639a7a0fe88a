//! Read integers from standard input and store them in a file.
//!
//! Run: cargo run --example serialise -- <output_file>
//!
//! ```text
//! $ cargo run --example serialise -- data.bin
//! 1 2 3
//! 4 5 6 7
//! 8
//! <Ctrl-D>
//! $ hexdump data.bin
//! 0000000 0001 0000 0002 0000 0003 0000 0004 0000
//! 0000010 0005 0000 0006 0000 0007 0000 0008 0000
//! 0000020
//! ```
//!
//! Every number takes 4 bytes in host byte order (little-endian above).

use std::io::Read;
use std::process::ExitCode;

use log::{error, info};
use rawbin::{files, parse_numbers, write_numbers};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: serialise <output_file>");
        return ExitCode::FAILURE;
    }

    let mut out = match files::create(&args[1]) {
        Ok(out) => out,
        Err(e) => {
            error!("{e}");
            return ExitCode::from(2);
        }
    };

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        error!("could not read standard input: {e}");
        return ExitCode::FAILURE;
    }

    let result = write_numbers(&mut out, parse_numbers(&input))
        .and_then(|count| files::finish(out).map(|()| count));
    match result {
        Ok(count) => {
            info!("stored {count} numbers");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
