//! Presentation of reconstruction results, either as a human readable table or as JSON.

use std::fmt::Display;
use std::io::{self, Write};
use std::iter;

use jester_sharing::ReconstructionResult;
use serde::Serialize;

use crate::config::OutputFormat;

/// A share that does not lie on the reconstructed polynomial, with all values as decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WrongShareReport {
    pub x: String,
    pub given: String,
    pub expected: String,
}

/// The rendered outcome of a reconstruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub secret: String,
    pub wrong_shares: Vec<WrongShareReport>,
}

impl<E> From<&ReconstructionResult<E>> for Report
where
    E: Display,
{
    fn from(result: &ReconstructionResult<E>) -> Self {
        Report {
            secret: result.secret.to_string(),
            wrong_shares: result
                .wrong_shares
                .iter()
                .map(|wrong| WrongShareReport {
                    x: wrong.x.to_string(),
                    given: wrong.given.to_string(),
                    expected: wrong.expected.to_string(),
                })
                .collect(),
        }
    }
}

/// Write `report` to `out` in the requested format.
pub fn render<W>(report: &Report, format: OutputFormat, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    match format {
        OutputFormat::Table => render_table(report, out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)
        }
    }
}

fn render_table<W>(report: &Report, out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "Secret (constant term): {}", report.secret)?;

    if report.wrong_shares.is_empty() {
        return writeln!(out, "All shares are valid");
    }

    writeln!(out, "Wrong shares:")?;

    let wrong_shares = &report.wrong_shares;
    let x_width = column_width("x", wrong_shares.iter().map(|wrong| wrong.x.as_str()));
    let given_width = column_width("given", wrong_shares.iter().map(|wrong| wrong.given.as_str()));
    let expected_width = column_width(
        "expected",
        wrong_shares.iter().map(|wrong| wrong.expected.as_str()),
    );

    writeln!(
        out,
        "{:>xw$} | {:>gw$} | {:>ew$}",
        "x",
        "given",
        "expected",
        xw = x_width,
        gw = given_width,
        ew = expected_width
    )?;
    writeln!(
        out,
        "{}-+-{}-+-{}",
        "-".repeat(x_width),
        "-".repeat(given_width),
        "-".repeat(expected_width)
    )?;

    for wrong in report.wrong_shares.iter() {
        writeln!(
            out,
            "{:>xw$} | {:>gw$} | {:>ew$}",
            wrong.x,
            wrong.given,
            wrong.expected,
            xw = x_width,
            gw = given_width,
            ew = expected_width
        )?;
    }

    Ok(())
}

fn column_width<'a, I>(header: &str, values: I) -> usize
where
    I: Iterator<Item = &'a str>,
{
    values.map(str::len).chain(iter::once(header.len())).max().unwrap_or(0)
}
