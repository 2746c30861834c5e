//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments, options, and their validation
//! using the [clap](https://docs.rs/clap/) library.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use disize::config::{FileConfig, FormatOptions, InputUnit, OutputOptions};

/// Command-line arguments controlling how results are printed.
///
/// These flags are global, so they may appear before or after the subcommand.
#[derive(Parser)]
struct OutputArgs {
    /// Output results as a single JSON object for scripting/piping
    ///
    /// When enabled, all human-readable output is suppressed and a single
    /// JSON document is printed to stdout.
    #[arg(long, global = true)]
    json: bool,

    /// Also show sizes in decimal (1000-based) units
    #[arg(short = 'd', long, global = true)]
    decimal: bool,

    /// Print debug logs to stderr
    #[arg(short = 'v', long, global = true)]
    verbose: bool,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse human-readable sizes such as "100", "11 KB" or "`1.5GiB`"
    ///
    /// A bare number is read as bytes. A trailing "b" means bits.
    /// Negative sizes go after `--`: `disize parse -- -1KB`.
    Parse {
        /// Size strings to parse
        #[arg(required = true, num_args = 1..)]
        inputs: Vec<String>,
    },

    /// Format integer sizes in the largest binary unit they reach
    Format {
        /// Unit of the integer inputs
        #[arg(short = 'u', long, value_enum)]
        input_unit: Option<InputUnit>,

        /// Integer sizes to format
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        values: Vec<String>,
    },
}

/// Main command-line interface structure.
///
/// Helper methods accept a [`FileConfig`] reference so that config-file values act as
/// defaults when the corresponding CLI argument is not provided.
#[derive(Parser)]
#[command(name = "disize")]
#[command(about = "Parse and format data sizes in bits, bytes, decimal and binary units")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,

    /// Read settings from this TOML file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Whether `--verbose` was passed on the command line.
    ///
    /// Used to set up logging before the config file is read.
    #[must_use]
    pub const fn verbose_flag(&self) -> bool {
        self.output.verbose
    }

    /// The settings file given with `--config`, if any.
    #[must_use]
    pub fn config_file(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    /// Extract output options from CLI args and config file.
    ///
    /// For boolean flags, the CLI flag (if set to `true`) takes priority,
    /// then the config file value, then `false`.
    #[must_use]
    pub fn output_options(&self, config: &FileConfig) -> OutputOptions {
        OutputOptions {
            json: self.output.json || config.output.json.unwrap_or(false),
            decimal: self.output.decimal || config.output.decimal.unwrap_or(false),
            verbose: self.output.verbose || config.output.verbose.unwrap_or(false),
        }
    }

    /// Extract `format` options from CLI args and config file.
    ///
    /// Priority: CLI argument > config file > default (`bits`).
    /// Unrecognised config values fall back to the default.
    #[must_use]
    pub fn format_options(&self, config: &FileConfig) -> FormatOptions {
        let cli_unit = match &self.command {
            Commands::Format { input_unit, .. } => *input_unit,
            Commands::Parse { .. } => None,
        };

        FormatOptions {
            input_unit: cli_unit
                .or_else(|| {
                    config
                        .format
                        .input_unit
                        .as_ref()
                        .and_then(|s| InputUnit::from_str(s, true).ok())
                })
                .unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disize::config::file::{FileFormatConfig, FileOutputConfig};

    #[test]
    fn test_parse_subcommand_inputs() {
        let args = Cli::parse_from(["disize", "parse", "11KB", "1.5 GiB"]);

        let Commands::Parse { inputs } = args.command else {
            panic!("expected parse subcommand");
        };
        assert_eq!(inputs, vec!["11KB", "1.5 GiB"]);
    }

    #[test]
    fn test_parse_subcommand_accepts_negative_sizes() {
        let args = Cli::parse_from(["disize", "parse", "--", "-1KB"]);

        let Commands::Parse { inputs } = args.command else {
            panic!("expected parse subcommand");
        };
        assert_eq!(inputs, vec!["-1KB"]);
    }

    #[test]
    fn test_parse_requires_input() {
        assert!(Cli::try_parse_from(["disize", "parse"]).is_err());
        assert!(Cli::try_parse_from(["disize"]).is_err());
    }

    #[test]
    fn test_format_subcommand_values() {
        let args = Cli::parse_from(["disize", "format", "8", "-16"]);

        let Commands::Format { values, input_unit } = args.command else {
            panic!("expected format subcommand");
        };
        assert_eq!(values, vec!["8", "-16"]);
        assert!(input_unit.is_none());
    }

    #[test]
    fn test_default_values() {
        let args = Cli::parse_from(["disize", "parse", "1"]);
        let config = FileConfig::default();

        let output = args.output_options(&config);
        assert!(!output.json);
        assert!(!output.decimal);
        assert!(!output.verbose);

        assert_eq!(args.format_options(&config).input_unit, InputUnit::Bits);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Cli::parse_from(["disize", "parse", "1", "--json", "-d", "-v"]);
        let output = args.output_options(&FileConfig::default());

        assert!(args.verbose_flag());
        assert!(output.json);
        assert!(output.decimal);
        assert!(output.verbose);
    }

    #[test]
    fn test_global_flags_before_subcommand() {
        let args = Cli::parse_from(["disize", "--json", "parse", "1"]);
        assert!(args.output_options(&FileConfig::default()).json);
    }

    #[test]
    fn test_input_unit_flag() {
        let args = Cli::parse_from(["disize", "format", "--input-unit", "bytes", "1024"]);
        assert_eq!(
            args.format_options(&FileConfig::default()).input_unit,
            InputUnit::Bytes
        );

        let short = Cli::parse_from(["disize", "format", "-u", "bits", "1024"]);
        assert_eq!(
            short.format_options(&FileConfig::default()).input_unit,
            InputUnit::Bits
        );
    }

    #[test]
    fn test_config_values_used_when_flags_absent() {
        let args = Cli::parse_from(["disize", "format", "1024"]);
        let config = FileConfig {
            output: FileOutputConfig {
                json: Some(true),
                decimal: Some(true),
                verbose: None,
            },
            format: FileFormatConfig {
                input_unit: Some("Bytes".to_string()),
            },
        };

        let output = args.output_options(&config);
        assert!(output.json);
        assert!(output.decimal);
        assert!(!output.verbose);
        assert_eq!(args.format_options(&config).input_unit, InputUnit::Bytes);
    }

    #[test]
    fn test_cli_overrides_config_input_unit() {
        let args = Cli::parse_from(["disize", "format", "-u", "bits", "1024"]);
        let config = FileConfig {
            format: FileFormatConfig {
                input_unit: Some("bytes".to_string()),
            },
            ..FileConfig::default()
        };

        assert_eq!(args.format_options(&config).input_unit, InputUnit::Bits);
    }

    #[test]
    fn test_invalid_config_input_unit_falls_back() {
        let args = Cli::parse_from(["disize", "format", "1024"]);
        let config = FileConfig {
            format: FileFormatConfig {
                input_unit: Some("nibbles".to_string()),
            },
            ..FileConfig::default()
        };

        assert_eq!(args.format_options(&config).input_unit, InputUnit::Bits);
    }

    #[test]
    fn test_config_file_flag() {
        let args = Cli::parse_from(["disize", "parse", "1"]);
        assert!(args.config_file().is_none());

        let args = Cli::parse_from(["disize", "--config", "limits.toml", "parse", "1"]);
        assert_eq!(args.config_file(), Some(Path::new("limits.toml")));

        let args = Cli::parse_from(["disize", "format", "8", "--config", "limits.toml"]);
        assert_eq!(args.config_file(), Some(Path::new("limits.toml")));
    }

    #[test]
    fn test_verbose_flag_is_read_before_config() {
        let args = Cli::parse_from(["disize", "-v", "parse", "1"]);
        assert!(args.verbose_flag());

        let quiet = Cli::parse_from(["disize", "parse", "1"]);
        let config = FileConfig {
            output: FileOutputConfig {
                verbose: Some(true),
                ..FileOutputConfig::default()
            },
            ..FileConfig::default()
        };
        assert!(!quiet.verbose_flag());
        assert!(quiet.output_options(&config).verbose);
    }
}
