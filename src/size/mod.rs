//! The data-size value type and its unit table.
//!
//! ## Main Parts
//!
//! - [`Size`] - A signed quantity of bits
//! - [`units`] - Named decimal, binary and bit-unit scales

#[allow(clippy::module_inception)]
// This is acceptable as it is the main module for the size value type
pub mod size;
pub mod units;

pub use size::{Size, bit_count_to_byte_count};
