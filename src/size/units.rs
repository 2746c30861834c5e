//! Named unit scales, all expressed as multiples of one bit.
//!
//! Rust constant names cannot tell `KB` (kilobyte) from `Kb` (kilobit) by
//! case alone, so the bit families carry a `BIT` suffix: `KBIT` is the
//! kilobit, `KIBIT` the kibibit.

use super::Size;

/// One bit.
pub const BIT: Size = Size::from_bits(1);

/// Byte
pub const B: Size = Size::from_bits(8 * BIT.bits());

/// Kilobyte
pub const KB: Size = Size::from_bits(1000 * B.bits());
/// Megabyte
pub const MB: Size = Size::from_bits(1000 * KB.bits());
/// Gigabyte
pub const GB: Size = Size::from_bits(1000 * MB.bits());
/// Terabyte
pub const TB: Size = Size::from_bits(1000 * GB.bits());
/// Petabyte
pub const PB: Size = Size::from_bits(1000 * TB.bits());

// The decimal bit family starts from the byte, so `KBIT == KB`.
// Kept as-is; see `test_decimal_bit_units_scale_from_byte`.

/// Kilobit
pub const KBIT: Size = Size::from_bits(1000 * B.bits());
/// Megabit
pub const MBIT: Size = Size::from_bits(1000 * KBIT.bits());
/// Gigabit
pub const GBIT: Size = Size::from_bits(1000 * MBIT.bits());
/// Terabit
pub const TBIT: Size = Size::from_bits(1000 * GBIT.bits());
/// Petabit
pub const PBIT: Size = Size::from_bits(1000 * TBIT.bits());

/// Kibibyte
pub const KIB: Size = Size::from_bits(1024 * B.bits());
/// Mebibyte
pub const MIB: Size = Size::from_bits(1024 * KIB.bits());
/// Gibibyte
pub const GIB: Size = Size::from_bits(1024 * MIB.bits());
/// Tebibyte
pub const TIB: Size = Size::from_bits(1024 * GIB.bits());
/// Pebibyte
pub const PIB: Size = Size::from_bits(1024 * TIB.bits());

/// Kibibit
pub const KIBIT: Size = Size::from_bits(1024 * BIT.bits());
/// Mebibit
pub const MIBIT: Size = Size::from_bits(1024 * KIBIT.bits());
/// Gibibit
pub const GIBIT: Size = Size::from_bits(1024 * MIBIT.bits());
/// Tebibit
pub const TIBIT: Size = Size::from_bits(1024 * GIBIT.bits());
/// Pebibit
pub const PIBIT: Size = Size::from_bits(1024 * TIBIT.bits());
