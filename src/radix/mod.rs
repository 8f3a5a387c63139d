//! Radix conversion between bases 2 and 20.
//!
//! Independent of the binary engines: numbers here are text in some base,
//! optionally signed and fractional.

pub mod digit;
mod convert;

pub use convert::{convert, is_valid_number, ConversionRequest, ConvertError, MAX_FRACTION_DIGITS};
pub use digit::{MAX_BASE, MIN_BASE};
