//! # disize
//!
//! A data-size value type. A [`Size`] counts bits exactly, and can be built
//! from named decimal (`KB`, `MB`, ...) and binary (`KiB`, `MiB`, ...) unit
//! constants, formatted for humans, and parsed back from strings.
//!
//! ## Usage
//!
//! ```
//! use disize::units::{KB, MIB};
//! use disize::{Size, format_size, parse_size};
//!
//! let size = parse_size("11 KB").unwrap();
//! assert_eq!(size, 11 * KB);
//! assert_eq!(format_size(12 * MIB), "12 MiB");
//! assert_eq!(Size::from_bits(8).bytes(), 1);
//! ```
//!
//! The `disize` binary wraps these operations in a small command-line tool.

pub mod config;
pub mod format;
pub mod logger;
pub mod output;
pub mod parse;
pub mod report;
pub mod size;

pub use config::{FileConfig, FormatOptions, InputUnit, OutputOptions};
pub use format::format_size;
pub use parse::{ParseSizeError, parse_size};
pub use size::{Size, bit_count_to_byte_count, units};
