//! One's complement arithmetic.
//!
//! A negative value is the bitwise complement of its positive counterpart, so
//! there are two zeros: `0...0` and negative zero `1...1`.

use crate::binary::{unsigned, Arithmetic, ArithError, Bit, BitString};
use crate::binary::error::check_operands;
use crate::binary::prims::{add_no_overflow_check, ripple_add};

/// One's complement representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnesComplement;

/// The `width - 1`-bit magnitude of a value: the low bits, inverted when the
/// sign bit is set.
pub fn magnitude(value: &BitString) -> BitString {
    let (sign, rest) = value.split_sign();
    if sign.is_one() {
        rest.invert()
    } else {
        rest
    }
}

/// Encode a magnitude with the given sign, inverting it for negatives.
pub fn from_magnitude(sign: Bit, magnitude: &BitString) -> BitString {
    if sign.is_one() {
        BitString::with_sign(sign, &magnitude.invert())
    } else {
        BitString::with_sign(sign, magnitude)
    }
}

/// Add with end-around carry.
///
/// A carry out of the top bit is added back in at the bottom. The sum then
/// overflows when both operands share a sign the result does not.
pub fn add(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, OnesComplement::MIN_WIDTH)?;

    let (mut sum, carry) = ripple_add(a, b);
    if carry.is_one() {
        sum = add_no_overflow_check(&sum, &BitString::one(width), width);
    }

    if a.sign() == b.sign() && sum.sign() != a.sign() {
        return Err(ArithError::OnesComplementOverflow);
    }
    Ok(sum)
}

/// Subtract by adding the complement of `b`.
pub fn subtract(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, OnesComplement::MIN_WIDTH)?;
    add(a, &b.invert(), width)
}

/// Multiply magnitudes, returning a `2 * width - 1`-bit result.
///
/// Negative products have their magnitude bits inverted.
pub fn multiply(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, OnesComplement::MIN_WIDTH)?;

    let product = unsigned::multiply(&magnitude(a), &magnitude(b), width - 1)?;
    let sign = a.sign().xor(b.sign());
    Ok(from_magnitude(sign, &product.low(2 * width - 2)))
}

/// Divide magnitudes.
///
/// Both `0...0` and `1...1` are zero divisors. The quotient is inverted when
/// the operand signs differ and the remainder when the dividend is negative.
pub fn divide(a: &BitString, b: &BitString, width: usize) -> Result<(BitString, BitString), ArithError> {
    check_operands(a, b, width, OnesComplement::MIN_WIDTH)?;

    if b.is_zero() || b.is_all_ones() {
        return Err(ArithError::DivisionByZero);
    }

    let (quotient, remainder) = unsigned::divide(&magnitude(a), &magnitude(b), width - 1)?;
    Ok((
        from_magnitude(a.sign().xor(b.sign()), &quotient),
        from_magnitude(a.sign(), &remainder),
    ))
}

impl Arithmetic for OnesComplement {
    const MIN_WIDTH: usize = 2;
    const NAME: &'static str = "1's complement";
    const LABEL: &'static str = "1's complement";

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
        let value = i64::try_from(magnitude(bits).to_u64()?).ok()?;
        Some(if bits.sign().is_one() { -value } else { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_end_around_carry() {
        // Negative zero plus one wraps round to one.
        assert_eq!(add(&bits("1111"), &bits("0001"), 4).unwrap().to_string(), "0001");
        // -2 + 5 = 3
        assert_eq!(add(&bits("1101"), &bits("0101"), 4).unwrap().to_string(), "0011");
        // -1 + -2 = -3
        assert_eq!(add(&bits("1110"), &bits("1101"), 4).unwrap().to_string(), "1100");
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(add(&bits("0111"), &bits("0001"), 4), Err(ArithError::OnesComplementOverflow));
        assert_eq!(add(&bits("1000"), &bits("1110"), 4), Err(ArithError::OnesComplementOverflow));
    }

    #[test]
    fn test_subtract() {
        // 3 - 5 = -2
        assert_eq!(subtract(&bits("0011"), &bits("0101"), 4).unwrap().to_string(), "1101");
        // 5 - 5 gives negative zero
        assert_eq!(subtract(&bits("0101"), &bits("0101"), 4).unwrap().to_string(), "1111");
    }

    #[test]
    fn test_multiply() {
        // -3 * 2 = -6
        let product = multiply(&bits("1100"), &bits("0010"), 4).unwrap();
        assert_eq!(product.to_string(), "1111001");
        assert_eq!(OnesComplement::decode(&product), Some(-6));

        // -3 * -3 = 9
        assert_eq!(multiply(&bits("1100"), &bits("1100"), 4).unwrap().to_string(), "0001001");
    }

    #[test]
    fn test_divide() {
        // -7 / 2 = -3 r -1
        let (q, r) = divide(&bits("1000"), &bits("0010"), 4).unwrap();
        assert_eq!(q.to_string(), "1100");
        assert_eq!(r.to_string(), "1110");
    }

    #[test]
    fn test_divide_by_either_zero() {
        assert_eq!(divide(&bits("0101"), &bits("0000"), 4), Err(ArithError::DivisionByZero));
        assert_eq!(divide(&bits("0101"), &bits("1111"), 4), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_magnitude_roundtrip() {
        for s in ["0000", "0101", "1010", "1111", "1000"] {
            let value = bits(s);
            assert_eq!(from_magnitude(value.sign(), &magnitude(&value)), value);
        }
    }
}
