//! Core size value type.
//!
//! A [`Size`] is a signed count of bits. It has no identity beyond that
//! integer: it is built from arithmetic on the unit constants or by parsing,
//! and consumed by formatting or by extracting a byte count.

use std::{
    fmt::{self, Display, Formatter},
    ops::Mul,
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::format::write_size;
use crate::parse::{ParseSizeError, parse_size};

/// A quantity of data, measured in bits.
///
/// Serializes as the integer bit count. Deserializes from either an integer
/// bit count or a human-readable string such as `"50MB"` or `"1.5 GiB"`.
#[derive(
    Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize,
)]
#[serde(try_from = "SizeRepr", into = "i64")]
pub struct Size(i64);

impl Size {
    /// The empty size.
    pub const ZERO: Self = Self(0);

    /// Create a size from a raw bit count.
    #[must_use]
    pub const fn from_bits(bits: i64) -> Self {
        Self(bits)
    }

    /// Create a size from a whole number of bytes.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `bytes * 8` overflows `i64`. Use
    /// [`Size::checked_from_bytes`] for untrusted input.
    #[must_use]
    pub const fn from_bytes(bytes: i64) -> Self {
        Self(bytes * 8)
    }

    /// Create a size from a whole number of bytes, or `None` if the bit count
    /// does not fit in an `i64`.
    #[must_use]
    pub const fn checked_from_bytes(bytes: i64) -> Option<Self> {
        match bytes.checked_mul(8) {
            Some(bits) => Some(Self(bits)),
            None => None,
        }
    }

    /// Multiply by a scalar, or `None` on overflow.
    #[must_use]
    pub const fn checked_mul(self, rhs: i64) -> Option<Self> {
        match self.0.checked_mul(rhs) {
            Some(bits) => Some(Self(bits)),
            None => None,
        }
    }

    /// The raw bit count.
    #[must_use]
    pub const fn bits(self) -> i64 {
        self.0
    }

    /// The whole number of bytes, truncating toward zero.
    ///
    /// A size of 15 bits is 1 byte; a size of -15 bits is -1 byte.
    #[must_use]
    pub const fn bytes(self) -> i64 {
        self.0 / 8
    }
}

/// Convert a bit count into a whole number of bytes, truncating toward zero.
#[must_use]
pub const fn bit_count_to_byte_count(size: Size) -> i64 {
    size.bytes()
}

/// # Panics
///
/// Panics in debug builds if the product overflows `i64`, as `1024 * PIB`
/// does. Use [`Size::checked_mul`] when the factor is not a constant.
impl Mul<i64> for Size {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        Self(self.0 * rhs)
    }
}

/// # Panics
///
/// Same overflow behaviour as `Size * i64`.
impl Mul<Size> for i64 {
    type Output = Size;

    fn mul(self, rhs: Size) -> Size {
        Size(self * rhs.0)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_size(f, *self)
    }
}

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_size(s)
    }
}

impl From<Size> for i64 {
    fn from(size: Size) -> Self {
        size.0
    }
}

/// Accepted serialized forms of a [`Size`].
#[derive(Deserialize)]
#[serde(untagged)]
enum SizeRepr {
    Bits(i64),
    Text(String),
}

impl TryFrom<SizeRepr> for Size {
    type Error = ParseSizeError;

    fn try_from(repr: SizeRepr) -> Result<Self, Self::Error> {
        match repr {
            SizeRepr::Bits(bits) => Ok(Self(bits)),
            SizeRepr::Text(text) => parse_size(&text),
        }
    }
}
