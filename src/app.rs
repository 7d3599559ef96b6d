//! The top level flow of the command line tool: load, reconstruct, render.

use std::io::Write;

use anyhow::{Context, Result};
use jester_maths::IntegerDomain;
use tracing::info;

use crate::config::{Config, DomainKind};
use crate::report::Report;
use crate::{loader, recovery, report};

/// Reconstruct the secret of the configured share file and write the report to `out`.
///
/// Wrong shares are part of a successful report. Errors are returned for unreadable or malformed input and for
/// reconstructions the domain rejects.
pub fn run<W>(config: &Config, out: &mut W) -> Result<()>
where
    W: Write,
{
    let file = loader::load(&config.input)?;

    info!(domain = ?config.domain, "selected arithmetic domain");
    let outcome: Report = match config.domain {
        DomainKind::Integer => recovery::recover(IntegerDomain, &file),
        DomainKind::Field => recovery::recover(config.field_domain()?, &file),
    }
    .context("cannot reconstruct the secret")?;

    report::render(&outcome, config.format, out)?;
    out.flush()?;

    Ok(())
}

/// The line printed to stderr when `run` fails, including the whole chain of causes.
pub fn error_message(error: &anyhow::Error) -> String {
    format!("Error: {:#}", error)
}
