//! Structured JSON output for scripting and piping.
//!
//! This module provides serializable data structures that represent the
//! complete output of a `parse` or `format` run. When the `--json` flag is
//! passed, these structures are serialized to stdout as a single JSON object,
//! replacing all human-readable output.

use humansize::{DECIMAL, format_size_i};
use serde::Serialize;

use crate::report::SizeReport;
use crate::size::Size;

/// Render a size in decimal (1000-based) byte units, e.g. `"1.02 kB"`.
#[must_use]
pub fn decimal_string(size: Size) -> String {
    format_size_i(size.bytes(), DECIMAL)
}

/// Top-level JSON output emitted when `--json` is active.
#[derive(Serialize, Debug)]
pub struct JsonOutput {
    /// The subcommand that produced this output: `"parse"` or `"format"`.
    pub mode: String,

    /// One entry per input, in input order.
    pub entries: Vec<JsonSizeEntry>,

    /// Aggregated summary statistics.
    pub summary: JsonSummary,
}

/// A single input in the JSON output.
#[derive(Serialize, Debug)]
pub struct JsonSizeEntry {
    /// The input as given on the command line.
    pub input: String,

    /// Size in bits, or `null` on failure.
    pub bits: Option<i64>,

    /// Size in whole bytes, or `null` on failure.
    pub bytes: Option<i64>,

    /// Human-readable binary rendering (e.g. `"976.56 KiB"`).
    pub formatted: Option<String>,

    /// Human-readable decimal rendering. Present only with `--decimal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_decimal: Option<String>,

    /// Error message. Present only when the input failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated summary across all inputs.
#[derive(Serialize, Debug)]
pub struct JsonSummary {
    /// Total number of inputs.
    pub total_entries: usize,

    /// Number of inputs that produced a size.
    pub success_count: usize,

    /// Number of inputs that failed.
    pub failure_count: usize,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a slice of reports.
    #[must_use]
    pub fn from_reports(mode: &str, reports: &[SizeReport], decimal: bool) -> Self {
        Self {
            mode: mode.to_string(),
            entries: reports
                .iter()
                .map(|report| JsonSizeEntry::from_report(report, decimal))
                .collect(),
            summary: JsonSummary::from_reports(reports),
        }
    }
}

impl JsonSizeEntry {
    /// Convert a `SizeReport` into a `JsonSizeEntry`.
    #[must_use]
    pub fn from_report(report: &SizeReport, decimal: bool) -> Self {
        let size = report.result.as_ref().ok().copied();

        Self {
            input: report.input.clone(),
            bits: size.map(Size::bits),
            bytes: size.map(Size::bytes),
            formatted: size.as_ref().map(ToString::to_string),
            formatted_decimal: size.filter(|_| decimal).map(decimal_string),
            error: report.result.as_ref().err().cloned(),
        }
    }
}

impl JsonSummary {
    /// Compute summary statistics from a slice of reports.
    #[must_use]
    pub fn from_reports(reports: &[SizeReport]) -> Self {
        let success_count = reports.iter().filter(|r| r.result.is_ok()).count();

        Self {
            total_entries: reports.len(),
            success_count,
            failure_count: reports.len() - success_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::units::{KB, MIB};

    fn sample_reports() -> Vec<SizeReport> {
        vec![
            SizeReport::ok("11KB", 11 * KB),
            SizeReport::failed("5Q", "unknown unit 'Q'".to_string()),
            SizeReport::ok("12MiB", 12 * MIB),
        ]
    }

    #[test]
    fn test_summary_counts() {
        let summary = JsonSummary::from_reports(&sample_reports());

        assert_eq!(summary.total_entries, 3);
        assert_eq!(summary.success_count, 2);
        assert_eq!(summary.failure_count, 1);
    }

    #[test]
    fn test_entry_from_successful_report() {
        let entry = JsonSizeEntry::from_report(&SizeReport::ok("11KB", 11 * KB), false);

        assert_eq!(entry.input, "11KB");
        assert_eq!(entry.bits, Some(88_000));
        assert_eq!(entry.bytes, Some(11_000));
        assert_eq!(entry.formatted.as_deref(), Some("10.74 KiB"));
        assert!(entry.formatted_decimal.is_none());
        assert!(entry.error.is_none());
    }

    #[test]
    fn test_entry_with_decimal_rendering() {
        let entry = JsonSizeEntry::from_report(&SizeReport::ok("11KB", 11 * KB), true);
        let decimal = entry.formatted_decimal.unwrap();
        assert!(decimal.starts_with("11"));
        assert!(decimal.ends_with("kB"));
    }

    #[test]
    fn test_entry_from_failed_report() {
        let failed = SizeReport::failed("5Q", "unknown unit 'Q'".to_string());
        let entry = JsonSizeEntry::from_report(&failed, true);

        assert!(entry.bits.is_none());
        assert!(entry.formatted.is_none());
        assert!(entry.formatted_decimal.is_none());
        assert_eq!(entry.error.as_deref(), Some("unknown unit 'Q'"));
    }

    #[test]
    fn test_json_serialization_shape() {
        let output = JsonOutput::from_reports("parse", &sample_reports(), false);
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["mode"], "parse");
        assert_eq!(value["entries"][0]["bits"], 88_000);
        assert_eq!(value["entries"][2]["formatted"], "12 MiB");
        assert_eq!(value["entries"][1]["bits"], serde_json::Value::Null);
        assert_eq!(value["entries"][1]["error"], "unknown unit 'Q'");
        assert!(value["entries"][0].get("error").is_none());
        assert!(value["entries"][0].get("formatted_decimal").is_none());
        assert_eq!(value["summary"]["failure_count"], 1);
    }
}
