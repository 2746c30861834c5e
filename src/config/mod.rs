//! Configuration for the `disize` command-line front end.
//!
//! - [`file`] - Persistent settings loaded from `config.toml`
//! - [`options`] - The resolved options the binary acts on

pub mod file;
pub mod options;

pub use file::FileConfig;
pub use options::{FormatOptions, InputUnit, OutputOptions};
