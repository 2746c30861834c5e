//! Resolved options for the command-line front end.
//!
//! These are the values left after layering CLI arguments over the
//! configuration file over hardcoded defaults.

use clap::ValueEnum;

use crate::size::Size;

/// How integer arguments to `disize format` are interpreted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum, Default)]
pub enum InputUnit {
    /// Values are raw bit counts
    #[default]
    Bits,

    /// Values are whole bytes
    Bytes,
}

impl InputUnit {
    /// Build a [`Size`] from an integer in this unit.
    ///
    /// Byte values whose bit count would overflow `i64` return `None`.
    #[must_use]
    pub const fn to_size(self, value: i64) -> Option<Size> {
        match self {
            Self::Bits => Some(Size::from_bits(value)),
            Self::Bytes => Size::checked_from_bytes(value),
        }
    }
}

/// Options controlling how results are printed.
#[derive(Clone, Debug, Default)]
pub struct OutputOptions {
    /// Emit a single JSON document instead of human-readable lines
    pub json: bool,

    /// Also show each size in decimal (1000-based) units
    pub decimal: bool,

    /// Enable debug logging on stderr
    pub verbose: bool,
}

/// Options for the `format` subcommand.
#[derive(Clone, Debug, Default)]
pub struct FormatOptions {
    /// Unit of the integer inputs
    pub input_unit: InputUnit,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::units::{B, KIB};

    #[test]
    fn test_input_unit_default() {
        assert_eq!(InputUnit::default(), InputUnit::Bits);
    }

    #[test]
    fn test_input_unit_from_str_ignores_case() {
        assert_eq!(InputUnit::from_str("bytes", true), Ok(InputUnit::Bytes));
        assert_eq!(InputUnit::from_str("BITS", true), Ok(InputUnit::Bits));
        assert!(InputUnit::from_str("nibbles", true).is_err());
    }

    #[test]
    fn test_input_unit_to_size() {
        assert_eq!(InputUnit::Bits.to_size(8), Some(B));
        assert_eq!(InputUnit::Bytes.to_size(1024), Some(KIB));
        assert_eq!(InputUnit::Bytes.to_size(-1), Some(Size::from_bits(-8)));
        assert_eq!(InputUnit::Bytes.to_size(i64::MAX), None);
    }

    #[test]
    fn test_output_options_default() {
        let opts = OutputOptions::default();
        assert!(!opts.json);
        assert!(!opts.decimal);
        assert!(!opts.verbose);
    }

    #[test]
    fn test_format_options_clone() {
        let original = FormatOptions {
            input_unit: InputUnit::Bytes,
        };
        let cloned = original.clone();
        assert_eq!(original.input_unit, cloned.input_unit);
    }
}
