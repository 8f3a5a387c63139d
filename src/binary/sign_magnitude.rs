//! Sign-magnitude arithmetic.
//!
//! Bit 0 is the sign and the remaining `width - 1` bits are an unsigned
//! magnitude, so both `0...0` and `10...0` encode zero.

use std::cmp::Ordering;
use crate::binary::{unsigned, Arithmetic, ArithError, Bit, BitString};
use crate::binary::error::check_operands;
use crate::binary::prims::compare;

/// Sign-magnitude representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SignMagnitude;

/// Add two sign-magnitude values.
///
/// Like signs add magnitudes and fail rather than wrap when the magnitude
/// overflows. Unlike signs subtract the smaller magnitude from the larger and
/// take the larger operand's sign; equal magnitudes give positive zero.
pub fn add(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, SignMagnitude::MIN_WIDTH)?;

    let (sign_a, mag_a) = a.split_sign();
    let (sign_b, mag_b) = b.split_sign();

    if sign_a == sign_b {
        let magnitude = unsigned::add(&mag_a, &mag_b, width - 1).map_err(|e| match e {
            ArithError::Overflow => ArithError::SignMagnitudeOverflow,
            other => other,
        })?;
        return Ok(BitString::with_sign(sign_a, &magnitude));
    }

    match compare(&mag_a, &mag_b) {
        Ordering::Greater => {
            let magnitude = unsigned::subtract(&mag_a, &mag_b, width - 1)?;
            Ok(BitString::with_sign(sign_a, &magnitude))
        }
        Ordering::Less => {
            let magnitude = unsigned::subtract(&mag_b, &mag_a, width - 1)?;
            Ok(BitString::with_sign(sign_b, &magnitude))
        }
        Ordering::Equal => Ok(BitString::zeros(width)),
    }
}

/// Flip the sign bit.
pub fn negate(value: &BitString) -> BitString {
    let (sign, magnitude) = value.split_sign();
    BitString::with_sign(sign.not(), &magnitude)
}

/// Subtract by adding the sign-flipped subtrahend.
pub fn subtract(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, SignMagnitude::MIN_WIDTH)?;
    add(a, &negate(b), width)
}

/// Multiply magnitudes, returning a `2 * width - 1`-bit result: the sign
/// followed by the `2 * (width - 1)`-bit magnitude product.
pub fn multiply(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, SignMagnitude::MIN_WIDTH)?;

    let (sign_a, mag_a) = a.split_sign();
    let (sign_b, mag_b) = b.split_sign();

    let product = unsigned::multiply(&mag_a, &mag_b, width - 1)?;
    let magnitude = product.low(2 * width - 2);
    Ok(BitString::with_sign(sign_a.xor(sign_b), &magnitude))
}

/// Truncating division of magnitudes.
///
/// The quotient's sign is the XOR of the operand signs; the remainder keeps
/// the dividend's sign.
pub fn divide(a: &BitString, b: &BitString, width: usize) -> Result<(BitString, BitString), ArithError> {
    check_operands(a, b, width, SignMagnitude::MIN_WIDTH)?;

    let (sign_a, mag_a) = a.split_sign();
    let (sign_b, mag_b) = b.split_sign();

    if mag_b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }

    let (quotient, remainder) = unsigned::divide(&mag_a, &mag_b, width - 1)?;
    Ok((
        BitString::with_sign(sign_a.xor(sign_b), &quotient),
        BitString::with_sign(sign_a, &remainder),
    ))
}

impl Arithmetic for SignMagnitude {
    const MIN_WIDTH: usize = 2;
    const NAME: &'static str = "sign-magnitude";
    const LABEL: &'static str = "signed";

    fn add(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
        add(a, b, width)
    }

    fn subtract(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
        subtract(a, b, width)
    }

    fn multiply(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
        multiply(a, b, width)
    }

    fn divide(a: &BitString, b: &BitString, width: usize) -> Result<(BitString, BitString), ArithError> {
        divide(a, b, width)
    }

    fn decode(bits: &BitString) -> Option<i64> {
        let (sign, magnitude) = bits.split_sign();
        let magnitude = i64::try_from(magnitude.to_u64()?).ok()?;
        Some(if sign == Bit::One { -magnitude } else { magnitude })
    }
}
