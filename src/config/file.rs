//! Configuration file support for persistent settings.
//!
//! Settings are read from the file named by `--config`, or else from
//! `~/.config/disize/config.toml` (or the platform-specific equivalent) when
//! it exists. They serve as defaults that CLI arguments can override.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! [output]
//! json = false
//! decimal = true
//! verbose = false
//!
//! [format]
//! input_unit = "bytes"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so we can detect which values are present in the
/// config file and apply layered configuration (CLI > config file > defaults).
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Output options
    #[serde(default)]
    pub output: FileOutputConfig,

    /// `format` subcommand options
    #[serde(default)]
    pub format: FileFormatConfig,
}

/// Output options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileOutputConfig {
    /// Whether to print JSON instead of human-readable output
    pub json: Option<bool>,

    /// Whether to also show decimal-unit renderings
    pub decimal: Option<bool>,

    /// Whether to enable debug logging
    pub verbose: Option<bool>,
}

/// `format` subcommand options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileFormatConfig {
    /// Unit of integer inputs (`"bits"` or `"bytes"`)
    pub input_unit: Option<String>,
}

impl FileConfig {
    /// `<config_dir>/disize/config.toml`, where `<config_dir>` is the platform
    /// configuration directory. `None` if the platform has none.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join("disize").join("config.toml"))
    }

    /// Pick the settings file to read.
    ///
    /// An explicit path always wins, even if nothing exists there yet, so a
    /// mistyped `--config` is reported instead of silently ignored. Without
    /// one, the default location is used only when a file is present.
    #[must_use]
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| Self::default_path().filter(|path| path.is_file()))
    }

    /// Read settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds keys this version does not know.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        log::debug!("settings read from {}", path.display());

        Ok(config)
    }
}
