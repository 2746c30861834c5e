//! Per-input results of the `parse` and `format` subcommands.
//!
//! Each command-line input becomes one [`SizeReport`], whether it succeeded
//! or not, so a single bad input never hides the results of the others.

use crate::config::FormatOptions;
use crate::parse::parse_size;
use crate::size::Size;

/// The outcome of handling one command-line input.
#[derive(Clone, Debug)]
pub struct SizeReport {
    /// The input exactly as given.
    pub input: String,

    /// The resulting size, or the error message explaining why there is none.
    pub result: Result<Size, String>,
}

impl SizeReport {
    /// A report for an input that produced a size.
    #[must_use]
    pub fn ok(input: impl Into<String>, size: Size) -> Self {
        Self {
            input: input.into(),
            result: Ok(size),
        }
    }

    /// A report for an input that failed.
    #[must_use]
    pub fn failed(input: impl Into<String>, error: String) -> Self {
        Self {
            input: input.into(),
            result: Err(error),
        }
    }
}

/// Parse every input as a human-readable size string.
#[must_use]
pub fn parse_inputs(inputs: &[String]) -> Vec<SizeReport> {
    inputs
        .iter()
        .map(|input| {
            parse_size(input).map_or_else(
                |e| SizeReport::failed(input.as_str(), e.to_string()),
                |size| SizeReport::ok(input.as_str(), size),
            )
        })
        .collect()
}

/// Read every input as an integer in the configured unit.
#[must_use]
pub fn format_inputs(values: &[String], opts: &FormatOptions) -> Vec<SizeReport> {
    values
        .iter()
        .map(|value| {
            let Ok(number) = value.trim().parse::<i64>() else {
                return SizeReport::failed(value.as_str(), format!("not an integer: {value:?}"));
            };

            opts.input_unit.to_size(number).map_or_else(
                || {
                    SizeReport::failed(
                        value.as_str(),
                        format!("{number} bytes does not fit in a bit count"),
                    )
                },
                |size| SizeReport::ok(value.as_str(), size),
            )
        })
        .collect()
}

/// Number of reports that failed.
#[must_use]
pub fn failure_count(reports: &[SizeReport]) -> usize {
    reports.iter().filter(|r| r.result.is_err()).count()
}
