//! Parsing of human-readable size strings.
//!
//! A size string is a floating-point number followed by an optional unit
//! suffix, with whitespace allowed around either part (`"100"`, `"1.5 GiB"`,
//! `" 11 KB "`). Suffixes are tried longest first:
//!
//! - **Binary**: `KiB`, `MiB`, `GiB`, `TiB`, `PiB` (1024ⁿ bytes)
//! - **Decimal**: `KB`, `MB`, `GB`, `TB`, `PB` (1000ⁿ bytes)
//! - **Shorthand**: `K`, `M`, `G`, `T`, `P` (same as the decimal units)
//! - **Bytes**: `B`, or no suffix at all
//! - **Bits**: `b`
//!
//! The prefix letter (`K`, `M`, ...) is case-insensitive. The `i`, `B` and
//! `b` are not: `B` always means bytes and `b` always means bits.

use log::debug;
use thiserror::Error;

use crate::size::Size;
use crate::size::units::{B, BIT, GB, GIB, KB, KIB, MB, MIB, PB, PIB, TB, TIB};

/// Errors returned by [`parse_size`].
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum ParseSizeError {
    /// The input was empty or only whitespace.
    #[error("empty size string")]
    EmptySizeString,

    /// The numeric part could not be read, or was too short to hold a unit.
    #[error("unidentifiable size string {0:?}")]
    UnidentifiableSizeString(String),

    /// A unit was expected but its prefix letter is not one of `K M G T P`.
    #[error("unknown unit {0:?}")]
    UnknownUnit(char),
}

/// Three-character binary suffixes.
///
/// Prefix letters are stored uppercase; see [`strip_unit`].
const BINARY_UNITS: &[(&str, Size)] = &[
    ("KiB", KIB),
    ("MiB", MIB),
    ("GiB", GIB),
    ("TiB", TIB),
    ("PiB", PIB),
];

/// Everything else, longest first.
const DECIMAL_UNITS: &[(&str, Size)] = &[
    ("KB", KB),
    ("MB", MB),
    ("GB", GB),
    ("TB", TB),
    ("PB", PB),
    ("K", KB),
    ("M", MB),
    ("G", GB),
    ("T", TB),
    ("P", PB),
    ("B", B),
    ("b", BIT),
];

/// Parse a human-readable size string.
///
/// The number may carry a fraction; the result is truncated toward zero to a
/// whole number of bits.
///
/// # Errors
///
/// - [`ParseSizeError::EmptySizeString`] if the input is empty or blank
/// - [`ParseSizeError::UnknownUnit`] if a unit position holds an unknown
///   prefix letter (`"5QiB"`, `"5Q"`)
/// - [`ParseSizeError::UnidentifiableSizeString`] if the number cannot be
///   parsed, is not finite, or the result does not fit in an `i64` bit count
///
/// # Examples
///
/// ```
/// # use disize::{parse_size, Size};
/// # use disize::units::{B, KB, PIB};
/// assert_eq!(parse_size("100").unwrap(), 100 * B);
/// assert_eq!(parse_size(" 11 KB ").unwrap(), 11 * KB);
/// assert_eq!(parse_size("42PiB").unwrap(), 42 * PIB);
/// assert_eq!(parse_size("5 b").unwrap(), Size::from_bits(5));
/// ```
pub fn parse_size(text: &str) -> Result<Size, ParseSizeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseSizeError::EmptySizeString);
    }

    let Some((number, suffix, scale)) = split_unit(text)? else {
        return parse_bare(text);
    };

    debug!("size {text:?}: unit {suffix:?}, magnitude {number:?}");

    scale_magnitude(number, scale).ok_or_else(|| unidentifiable(text))
}

/// Split `text` into its numeric part, the matched suffix and that suffix's scale.
///
/// Returns `Ok(None)` when no unit suffix is present.
fn split_unit(text: &str) -> Result<Option<(&str, &'static str, Size)>, ParseSizeError> {
    if let Some(found) = find_unit(text, BINARY_UNITS) {
        return Ok(Some(found));
    }

    // "?iB" with an unrecognised prefix letter
    if let Some(prefix) = text.strip_suffix("iB")
        && let Some(letter) = prefix.chars().next_back()
    {
        return Err(ParseSizeError::UnknownUnit(letter));
    }

    Ok(find_unit(text, DECIMAL_UNITS))
}

/// Return the first unit in `units` that `text` ends with.
fn find_unit<'a>(
    text: &'a str,
    units: &[(&'static str, Size)],
) -> Option<(&'a str, &'static str, Size)> {
    units.iter().find_map(|&(suffix, scale)| {
        strip_unit(text, suffix).map(|number| (number, suffix, scale))
    })
}

/// Strip a unit suffix from the end of `text`.
///
/// Uppercase prefix letters in `suffix` match either case; every other
/// character must match exactly.
fn strip_unit<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(suffix.len())?;
    let tail = text.as_bytes().get(split..)?;

    let matches = tail.iter().zip(suffix.bytes()).all(|(&actual, expected)| {
        actual == expected || (is_prefix_letter(expected) && actual.to_ascii_uppercase() == expected)
    });

    if matches { text.get(..split) } else { None }
}

const fn is_prefix_letter(byte: u8) -> bool {
    matches!(byte, b'K' | b'M' | b'G' | b'T' | b'P')
}

/// Parse a string with no unit suffix as a byte count.
///
/// A number followed by a single unrecognised letter (`"5Q"`) is reported as
/// an unknown unit rather than an unreadable string.
fn parse_bare(text: &str) -> Result<Size, ParseSizeError> {
    if let Some(size) = scale_magnitude(text, B) {
        return Ok(size);
    }

    let mut chars = text.chars();
    if let Some(letter) = chars.next_back()
        && letter.is_alphabetic()
        && parse_magnitude(chars.as_str()).is_some()
    {
        return Err(ParseSizeError::UnknownUnit(letter));
    }

    Err(unidentifiable(text))
}

/// Parse `number` and multiply it by `scale`, truncating to whole bits.
///
/// Returns `None` if the number is unreadable or the product does not fit.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn scale_magnitude(number: &str, scale: Size) -> Option<Size> {
    // [-2^63, 2^63): the exact range of i64 as f64
    const MIN: f64 = i64::MIN as f64;
    const MAX: f64 = -(i64::MIN as f64);

    let bits = parse_magnitude(number)? * scale.bits() as f64;
    if (MIN..MAX).contains(&bits) {
        Some(Size::from_bits(bits as i64))
    } else {
        None
    }
}

/// Parse a trimmed, finite floating-point number.
fn parse_magnitude(number: &str) -> Option<f64> {
    number
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn unidentifiable(text: &str) -> ParseSizeError {
    ParseSizeError::UnidentifiableSizeString(text.to_string())
}
