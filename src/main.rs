//! `jester_recover` reconstructs a Shamir secret from a JSON share file and reports shares that do not lie on the
//! reconstructed polynomial.
//!
//! # Usage
//!
//! ```text
//! jester_recover                             # read input.json, exact integer arithmetic
//! jester_recover shares.json                 # read another file
//! jester_recover shares.json --domain field  # arithmetic modulo 2^127 - 1
//! jester_recover shares.json -d field -m 7919 --format json
//! ```
//!
//! The exit status is 0 whenever a secret was reconstructed, even if wrong shares were reported, and 1 otherwise.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use jester_recover::config::Config;
use jester_recover::{app, telemetry};

fn main() -> ExitCode {
    let config = Config::parse();
    telemetry::init(&config.log_level);

    let stdout = io::stdout();
    match app::run(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", app::error_message(&e));
            ExitCode::FAILURE
        }
    }
}
