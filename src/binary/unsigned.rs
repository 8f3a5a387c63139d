//! Unsigned fixed-width arithmetic.
//!
//! All `width` bits are magnitude. The signed engines reuse these routines on
//! their magnitude fields.

use std::cmp::Ordering;
use crate::binary::{Arithmetic, ArithError, Bit, BitString};
use crate::binary::error::check_operands;
use crate::binary::prims::{add_no_overflow_check, compare, left_shift, ripple_add, ripple_sub};

/// Unsigned representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unsigned;

/// Add two unsigned values. A carry out of the top bit is an overflow.
pub fn add(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, Unsigned::MIN_WIDTH)?;

    let (sum, carry) = ripple_add(a, b);
    if carry.is_one() {
        return Err(ArithError::Overflow);
    }
    Ok(sum)
}

/// Subtract `b` from `a`. Fails with underflow when `b > a`.
pub fn subtract(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, Unsigned::MIN_WIDTH)?;

    if compare(b, a) == Ordering::Greater {
        return Err(ArithError::Underflow);
    }
    let (diff, _) = ripple_sub(a, b);
    Ok(diff)
}

/// Multiply by shift-and-add, returning the full `2 * width`-bit product.
///
/// For each set bit of `b`, from least significant upwards, `a` shifted by
/// that bit's position is added into a double-width accumulator. The
/// accumulator is wide enough that nothing can overflow.
pub fn multiply(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, Unsigned::MIN_WIDTH)?;

    let wide = 2 * width;
    let extended = a.zero_extend(wide);
    let mut product = BitString::zeros(wide);

    for position in 0..width {
        if b.get(width - 1 - position).is_one() {
            let partial = left_shift(&extended, position, wide);
            product = add_no_overflow_check(&product, &partial, wide);
        }
    }

    Ok(product)
}

/// Restoring division, returning `(quotient, remainder)`, both `width` bits.
pub fn divide(a: &BitString, b: &BitString, width: usize) -> Result<(BitString, BitString), ArithError> {
    check_operands(a, b, width, Unsigned::MIN_WIDTH)?;

    if b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }

    let mut remainder = BitString::zeros(width);
    let mut quotient = BitString::zeros(width);

    for i in 0..width {
        // The remainder is always below the divisor here, so the bit shifted
        // out of the top is zero.
        remainder = remainder.shift_in(a.get(i));
        if compare(&remainder, b) != Ordering::Less {
            let (diff, _) = ripple_sub(&remainder, b);
            remainder = diff;
            quotient.set(i, Bit::One);
        }
    }

    Ok((quotient, remainder))
}

impl Arithmetic for Unsigned {
    const MIN_WIDTH: usize = 1;
    const NAME: &'static str = "unsigned";
    const LABEL: &'static str = "unsigned";

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
        bits.to_u64().and_then(|v| i64::try_from(v).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_add_basic() {
        assert_eq!(add(&bits("0101"), &bits("0011"), 4).unwrap().to_string(), "1000");
        assert_eq!(add(&bits("0000"), &bits("0000"), 4).unwrap().to_string(), "0000");
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(add(&bits("1111"), &bits("0001"), 4), Err(ArithError::Overflow));
        assert_eq!(add(&bits("1000"), &bits("1000"), 4), Err(ArithError::Overflow));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(&bits("1000"), &bits("0011"), 4).unwrap().to_string(), "0101");
        assert_eq!(subtract(&bits("0110"), &bits("0110"), 4).unwrap().to_string(), "0000");
    }

    #[test]
    fn test_subtract_underflow() {
        assert_eq!(subtract(&bits("0001"), &bits("0010"), 4), Err(ArithError::Underflow));
    }

    #[test]
    fn test_multiply_double_width() {
        let product = multiply(&bits("1111"), &bits("1111"), 4).unwrap();
        assert_eq!(product.to_string(), "11100001");
        assert_eq!(product.width(), 8);

        assert_eq!(multiply(&bits("0110"), &bits("0111"), 4).unwrap().to_string(), "00101010");
        assert_eq!(multiply(&bits("1011"), &bits("0000"), 4).unwrap().to_string(), "00000000");
    }

    #[test]
    fn test_divide() {
        let (q, r) = divide(&bits("1111"), &bits("1001"), 4).unwrap();
        assert_eq!((q.to_string(), r.to_string()), ("0001".to_string(), "0110".to_string()));

        let (q, r) = divide(&bits("1101"), &bits("0011"), 4).unwrap();
        assert_eq!((q.to_string(), r.to_string()), ("0100".to_string(), "0001".to_string()));

        let (q, r) = divide(&bits("0010"), &bits("0101"), 4).unwrap();
        assert_eq!((q.to_string(), r.to_string()), ("0000".to_string(), "0010".to_string()));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(divide(&bits("0110"), &bits("0000"), 4), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_rejects_wrong_width() {
        assert_eq!(
            add(&bits("010"), &bits("0001"), 4),
            Err(ArithError::WidthMismatch { expected: 4, found: 3 })
        );
        assert_eq!(
            multiply(&bits("0101"), &bits("01"), 4),
            Err(ArithError::WidthMismatch { expected: 4, found: 2 })
        );
    }

    #[test]
    fn test_decode() {
        assert_eq!(Unsigned::decode(&bits("1010")), Some(10));
        assert_eq!(Unsigned::decode(&BitString::ones(64)), None);
    }
}
