//! Human-readable formatting of sizes.
//!
//! A size is rendered in the largest binary unit it reaches, rounded to at
//! most two decimal places with trailing zeros dropped (`"976.56 KiB"`,
//! `"12 MiB"`). Anything under one byte, negative sizes included, is printed
//! as a plain bit count (`"7 b"`).

use std::fmt::{self, Formatter};

use crate::size::Size;
use crate::size::units::{B, GIB, KIB, MIB, PIB, TIB};

/// Binary display units, largest first.
const DISPLAY_UNITS: [(Size, &str); 6] = [
    (PIB, "PiB"),
    (TIB, "TiB"),
    (GIB, "GiB"),
    (MIB, "MiB"),
    (KIB, "KiB"),
    (B, "B"),
];

/// Format a size as a human-readable string.
///
/// This never fails; every `Size` has a rendering.
///
/// # Examples
///
/// ```
/// # use disize::{format_size, Size};
/// # use disize::units::MB;
/// assert_eq!(format_size(Size::from_bits(8)), "1 B");
/// assert_eq!(format_size(MB), "976.56 KiB");
/// assert_eq!(format_size(Size::from_bits(3)), "3 b");
/// ```
#[must_use]
pub fn format_size(size: Size) -> String {
    size.to_string()
}

/// Write the human-readable form of `size` into a formatter.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn write_size(f: &mut Formatter<'_>, size: Size) -> fmt::Result {
    let Some((scale, suffix)) = select_unit(size) else {
        return write!(f, "{} b", size.bits());
    };

    let value = size.bits() as f64 / scale.bits() as f64;
    write!(f, "{} {suffix}", round_to_hundredths(value))
}

/// Pick the largest display unit not exceeding `size`, or `None` below one byte.
fn select_unit(size: Size) -> Option<(Size, &'static str)> {
    DISPLAY_UNITS
        .iter()
        .copied()
        .find(|&(scale, _)| size >= scale)
}

/// Round half away from zero to two decimal places.
///
/// `f64`'s `Display` already prints the shortest form without trailing
/// zeros, so `12.0` renders as `12` and `976.5625` as `976.56`.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
