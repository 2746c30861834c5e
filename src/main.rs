//! # disize
//!
//! Parse and format data sizes from the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Parse human-readable sizes
//! disize parse 100 "11 KB" 1.5GiB
//!
//! # Format raw counts (bits by default)
//! disize format 8000000
//! disize format --input-unit bytes 1073741824
//!
//! # Machine-readable output
//! disize parse --json 42PiB
//!
//! # Settings from a specific file
//! disize --config ./disize.toml format 8192
//! ```

mod cli;

use anyhow::{Ok, Result, bail};
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use disize::{
    config::{FileConfig, OutputOptions},
    logger::{init_logger, set_verbosity},
    output::{JsonOutput, decimal_string},
    report::{SizeReport, failure_count, format_inputs, parse_inputs},
};
use std::process::exit;

/// Entry point for the disize application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// # Errors
///
/// Returns an error if the logger cannot be installed, if a settings file
/// exists but cannot be read, if JSON serialization fails, or if any input
/// could not be read.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    // Only `--verbose` is known this early; the file may turn it on below.
    init_logger(args.verbose_flag())
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))?;

    let file_config = FileConfig::locate(args.config_file())
        .map_or_else(|| Ok(FileConfig::default()), |path| FileConfig::load_from(&path))?;
    let output = args.output_options(&file_config);
    set_verbosity(output.verbose);

    match &args.command {
        Commands::Parse { inputs } => {
            let reports = parse_inputs(inputs);
            emit_reports("parse", &reports, &output)
        }
        Commands::Format { values, .. } => {
            let format_opts = args.format_options(&file_config);
            let reports = format_inputs(values, &format_opts);
            emit_reports("format", &reports, &output)
        }
    }
}

// ── Helper functions ────────────────────────────────────────────────────

/// Print reports in JSON or human-readable form, then fail if any input failed.
fn emit_reports(mode: &str, reports: &[SizeReport], output: &OutputOptions) -> Result<()> {
    if output.json {
        let json = JsonOutput::from_reports(mode, reports, output.decimal);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        for report in reports {
            println!("{}", human_line(report, output.decimal));
        }
    }

    let failures = failure_count(reports);
    if failures > 0 {
        bail!("{failures} of {} inputs could not be read", reports.len());
    }

    Ok(())
}

/// Render one report as a coloured line of text.
fn human_line(report: &SizeReport, decimal: bool) -> String {
    let size = match &report.result {
        std::result::Result::Ok(size) => *size,
        Err(error) => return format!("{} {}", report.input.bold(), error.red()),
    };

    let decimal_part = if decimal {
        format!(", {}", decimal_string(size))
    } else {
        String::new()
    };
    let details = format!("({} bits, {} bytes{decimal_part})", size.bits(), size.bytes());

    format!(
        "{} {} {} {}",
        report.input.bold(),
        "→".dimmed(),
        size.to_string().green().bold(),
        details.bright_black()
    )
}
