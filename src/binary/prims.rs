//! Bit string primitives shared by every engine.
//!
//! None of these validate their operands; callers have already checked widths.

use std::cmp::Ordering;
use crate::binary::{Bit, BitString};

/// Compare two bit strings as unsigned magnitudes.
///
/// The shorter operand is left-padded with zeros, then the strings are
/// compared from the most significant bit down. Signs are never interpreted.
pub fn compare(a: &BitString, b: &BitString) -> Ordering {
    let width = a.width().max(b.width());
    let a = a.zero_extend(width);
    let b = b.zero_extend(width);

    for (x, y) in a.bits().iter().zip(b.bits()) {
        match x.cmp(y) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Check if every bit is zero.
#[inline]
pub fn is_zero(bits: &BitString) -> bool {
    bits.is_zero()
}

/// Shift left by `n` positions inside a `width`-bit field.
///
/// Bits pushed past the top of the field are lost and zeros fill in from the
/// right. Shifting by `width` or more leaves all zeros.
pub fn left_shift(bits: &BitString, n: usize, width: usize) -> BitString {
    if n >= width {
        return BitString::zeros(width);
    }

    let mut shifted = bits.bits().to_vec();
    shifted.extend(std::iter::repeat(Bit::Zero).take(n));
    BitString::from_bits(shifted).low(width)
}

/// Ripple-carry addition of two equal-width strings, returning
/// `(sum, carry_out)`.
pub(crate) fn ripple_add(a: &BitString, b: &BitString) -> (BitString, Bit) {
    let width = a.width();
    let mut result = BitString::zeros(width);
    let mut carry = Bit::Zero;

    for i in (0..width).rev() {
        let (sum, carry_out) = a.get(i).full_add(b.get(i), carry);
        result.set(i, sum);
        carry = carry_out;
    }

    (result, carry)
}

/// Borrow-chain subtraction of two equal-width strings, returning
/// `(difference, borrow_out)`.
pub(crate) fn ripple_sub(a: &BitString, b: &BitString) -> (BitString, Bit) {
    let width = a.width();
    let mut result = BitString::zeros(width);
    let mut borrow = Bit::Zero;

    for i in (0..width).rev() {
        let (diff, borrow_out) = a.get(i).full_sub(b.get(i), borrow);
        result.set(i, diff);
        borrow = borrow_out;
    }

    (result, borrow)
}

/// Add two `width`-bit strings, discarding any carry out of the top bit.
///
/// Used where wrap-around is expected: product accumulation and complement
/// negation.
pub fn add_no_overflow_check(a: &BitString, b: &BitString, width: usize) -> BitString {
    let (sum, _) = ripple_add(&a.low(width), &b.low(width));
    sum
}
