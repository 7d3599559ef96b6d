//! Command line configuration. Every option can also be set through an environment variable.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use jester_maths::num_bigint::BigUint;
use jester_maths::radix::parse_numeral;
use jester_maths::{DomainError, NumeralError, PrimeFieldDomain};

/// The share file read when no path is given.
pub const DEFAULT_INPUT: &str = "input.json";

/// The arithmetic domain used for interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DomainKind {
    /// Exact arithmetic over the integers. Divisions must not leave a remainder.
    Integer,
    /// Arithmetic modulo a prime, `2^127 - 1` unless `--modulus` is given.
    Field,
}

/// How the result is printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable summary with a table of wrong shares.
    Table,
    /// A JSON object with `secret` and `wrongShares`.
    Json,
}

/// Errors of configuration values that cannot be checked by the argument parser.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("the modulus must be a decimal number")]
    ModulusSyntax(#[source] NumeralError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Parser)]
#[command(
    name = "jester_recover",
    version,
    about = "Reconstruct a Shamir secret from its shares and report shares that do not fit"
)]
pub struct Config {
    /// Path to the JSON share file.
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Arithmetic domain used for the interpolation.
    #[arg(short, long, value_enum, default_value_t = DomainKind::Integer, env = "JESTER_DOMAIN")]
    pub domain: DomainKind,

    /// Prime modulus of the field domain in decimal. Defaults to the Mersenne prime 2^127 - 1.
    #[arg(short, long, env = "JESTER_MODULUS")]
    pub modulus: Option<String>,

    /// Output format of the result.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "JESTER_FORMAT")]
    pub format: OutputFormat,

    /// Log level filter, e.g. "info" or "debug". `RUST_LOG` takes precedence.
    #[arg(long, default_value = "warn", env = "JESTER_LOG")]
    pub log_level: String,
}

impl Config {
    /// Build the field domain over the configured modulus.
    pub fn field_domain(&self) -> Result<PrimeFieldDomain, ConfigError> {
        match &self.modulus {
            Some(modulus) => {
                let modulus: BigUint =
                    parse_numeral(10, modulus.trim()).map_err(ConfigError::ModulusSyntax)?;
                Ok(PrimeFieldDomain::new(modulus)?)
            }
            None => Ok(PrimeFieldDomain::mersenne_127()),
        }
    }
}
