//! Two's complement arithmetic.
//!
//! A negative value is its positive counterpart inverted plus one. The range
//! is asymmetric: `10...0` has no positive counterpart.

use crate::binary::{unsigned, Arithmetic, ArithError, Bit, BitString};
use crate::binary::error::check_operands;
use crate::binary::prims::{add_no_overflow_check, ripple_add};

/// Two's complement representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TwosComplement;

/// Invert and add one, wrapping at the value's own width.
///
/// The most negative value negates to itself.
pub fn wrapping_negate(value: &BitString) -> BitString {
    let width = value.width();
    add_no_overflow_check(&value.invert(), &BitString::one(width), width)
}

/// Negate a `width`-bit value by inverting and adding one.
pub fn negate(value: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(value, value, width, TwosComplement::MIN_WIDTH)?;
    Ok(wrapping_negate(value))
}

/// The absolute value of `value`, read as an unsigned number of the same width.
///
/// This is exact even for the most negative value, whose bits are its own
/// magnitude.
pub fn magnitude(value: &BitString) -> BitString {
    if value.sign().is_one() {
        wrapping_negate(value)
    } else {
        value.clone()
    }
}

/// Encode an unsigned magnitude, negating it when `sign` is set.
pub fn from_magnitude(sign: Bit, magnitude: &BitString) -> BitString {
    if sign.is_one() {
        wrapping_negate(magnitude)
    } else {
        magnitude.clone()
    }
}

/// Add, discarding the carry out of the top bit.
///
/// The sum overflows when both operands share a sign the result does not.
pub fn add(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, TwosComplement::MIN_WIDTH)?;

    let (sum, _) = ripple_add(a, b);
    if a.sign() == b.sign() && sum.sign() != a.sign() {
        return Err(ArithError::TwosComplementOverflow);
    }
    Ok(sum)
}

/// Subtract by adding the negated subtrahend.
///
/// Subtracting the most negative value fails outright, since its negation is
/// not representable.
pub fn subtract(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, TwosComplement::MIN_WIDTH)?;

    if *b == BitString::min_signed(width) {
        return Err(ArithError::TwosComplementNegation);
    }
    add(a, &wrapping_negate(b), width)
}

/// Multiply absolute values, returning the full `2 * width`-bit product,
/// negated when the operand signs differ.
pub fn multiply(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError> {
    check_operands(a, b, width, TwosComplement::MIN_WIDTH)?;

    let product = unsigned::multiply(&magnitude(a), &magnitude(b), width)?;
    Ok(from_magnitude(a.sign().xor(b.sign()), &product))
}

/// Truncating division of absolute values.
///
/// The quotient is negated when the signs differ, the remainder when the
/// dividend is negative; a zero result is never negated.
pub fn divide(a: &BitString, b: &BitString, width: usize) -> Result<(BitString, BitString), ArithError> {
    check_operands(a, b, width, TwosComplement::MIN_WIDTH)?;

    if b.is_zero() {
        return Err(ArithError::DivisionByZero);
    }
    if *a == BitString::min_signed(width) && b.is_all_ones() {
        return Err(ArithError::TwosComplementDivisionOverflow);
    }

    let (mut quotient, mut remainder) = unsigned::divide(&magnitude(a), &magnitude(b), width)?;
    if a.sign() != b.sign() && !quotient.is_zero() {
        quotient = wrapping_negate(&quotient);
    }
    if a.sign().is_one() && !remainder.is_zero() {
        remainder = wrapping_negate(&remainder);
    }
    Ok((quotient, remainder))
}

impl Arithmetic for TwosComplement {
    const MIN_WIDTH: usize = 2;
    const NAME: &'static str = "2's complement";
    const LABEL: &'static str = "2's complement";

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
        let value = i128::from(magnitude(bits).to_u64()?);
        let value = if bits.sign().is_one() { -value } else { value };
        i64::try_from(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(&bits("0011"), 4).unwrap().to_string(), "1101");
        assert_eq!(negate(&bits("0000"), 4).unwrap().to_string(), "0000");
        assert_eq!(negate(&bits("1000"), 4).unwrap().to_string(), "1000");
        assert_eq!(
            negate(&bits("011"), 4),
            Err(ArithError::WidthMismatch { expected: 4, found: 3 })
        );
    }

    #[test]
    fn test_add() {
        // -3 + 5 = 2, carry discarded
        assert_eq!(add(&bits("1101"), &bits("0101"), 4).unwrap().to_string(), "0010");
        // -4 + -4 = -8
        assert_eq!(add(&bits("1100"), &bits("1100"), 4).unwrap().to_string(), "1000");
    }

    #[test]
    fn test_add_overflow() {
        assert_eq!(add(&bits("0111"), &bits("0001"), 4), Err(ArithError::TwosComplementOverflow));
        assert_eq!(add(&bits("1000"), &bits("1111"), 4), Err(ArithError::TwosComplementOverflow));
    }

    #[test]
    fn test_subtract() {
        // 2 - 5 = -3
        assert_eq!(subtract(&bits("0010"), &bits("0101"), 4).unwrap().to_string(), "1101");
        // -8 - 1 overflows
        assert_eq!(subtract(&bits("1000"), &bits("0001"), 4), Err(ArithError::TwosComplementOverflow));
    }

    #[test]
    fn test_subtract_most_negative() {
        assert_eq!(subtract(&bits("0000"), &bits("1000"), 4), Err(ArithError::TwosComplementNegation));
        assert_eq!(subtract(&bits("1111"), &bits("1000"), 4), Err(ArithError::TwosComplementNegation));
    }

    #[test]
    fn test_multiply() {
        // -3 * 5 = -15
        let product = multiply(&bits("1101"), &bits("0101"), 4).unwrap();
        assert_eq!(product.to_string(), "11110001");
        assert_eq!(TwosComplement::decode(&product), Some(-15));

        // -8 * -8 = 64
        assert_eq!(multiply(&bits("1000"), &bits("1000"), 4).unwrap().to_string(), "01000000");
        // -8 * 0 stays positive zero
        assert_eq!(multiply(&bits("1000"), &bits("0000"), 4).unwrap().to_string(), "00000000");
    }

    #[test]
    fn test_divide() {
        // -7 / 2 = -3 r -1
        let (q, r) = divide(&bits("1001"), &bits("0010"), 4).unwrap();
        assert_eq!(q.to_string(), "1101");
        assert_eq!(r.to_string(), "1111");

        // -8 / 2 = -4 r 0
        let (q, r) = divide(&bits("1000"), &bits("0010"), 4).unwrap();
        assert_eq!(q.to_string(), "1100");
        assert_eq!(r.to_string(), "0000");

        // 1 / -2 = 0 r 1, zero quotient not negated
        let (q, r) = divide(&bits("0001"), &bits("1110"), 4).unwrap();
        assert_eq!(q.to_string(), "0000");
        assert_eq!(r.to_string(), "0001");
    }

    #[test]
    fn test_divide_errors() {
        assert_eq!(divide(&bits("0110"), &bits("0000"), 4), Err(ArithError::DivisionByZero));
        assert_eq!(
            divide(&bits("1000"), &bits("1111"), 4),
            Err(ArithError::TwosComplementDivisionOverflow)
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn encode(value: i64, width: usize) -> BitString {
        let raw = (value as u64) & ((1u64 << width) - 1);
        BitString::from_u64(raw, width).unwrap()
    }

    fn operands() -> impl Strategy<Value = (usize, i64, i64)> {
        (2usize..=10).prop_flat_map(|w| {
            let min = -(1i64 << (w - 1));
            let max = (1i64 << (w - 1)) - 1;
            (Just(w), min..=max, min..=max)
        })
    }

    proptest! {
        #[test]
        fn negate_is_an_involution(w in 2usize..=16, raw in any::<u64>()) {
            let value = BitString::from_u64(raw & ((1u64 << w) - 1), w).unwrap();
            let twice = negate(&negate(&value, w).unwrap(), w).unwrap();
            prop_assert_eq!(twice, value);
        }

        #[test]
        fn magnitude_roundtrip(w in 2usize..=16, raw in any::<u64>()) {
            let value = BitString::from_u64(raw & ((1u64 << w) - 1), w).unwrap();
            prop_assert_eq!(from_magnitude(value.sign(), &magnitude(&value)), value);
        }

        #[test]
        fn add_matches_native((w, x, y) in operands()) {
            let (min, max) = (-(1i64 << (w - 1)), (1i64 << (w - 1)) - 1);
            match add(&encode(x, w), &encode(y, w), w) {
                Ok(sum) => prop_assert_eq!(TwosComplement::decode(&sum), Some(x + y)),
                Err(e) => {
                    prop_assert_eq!(e, ArithError::TwosComplementOverflow);
                    prop_assert!(x + y > max || x + y < min);
                }
            }
        }

        #[test]
        fn multiply_matches_native((w, x, y) in operands()) {
            let product = multiply(&encode(x, w), &encode(y, w), w).unwrap();
            prop_assert_eq!(product.width(), 2 * w);
            prop_assert_eq!(TwosComplement::decode(&product), Some(x * y));
        }

        #[test]
        fn division_identity((w, x, y) in operands()) {
            prop_assume!(y != 0);
            prop_assume!(!(x == -(1i64 << (w - 1)) && y == -1));
            let (q, r) = divide(&encode(x, w), &encode(y, w), w).unwrap();
            let q = TwosComplement::decode(&q).unwrap();
            let r = TwosComplement::decode(&r).unwrap();
            prop_assert_eq!(y * q + r, x);
            prop_assert!(r.abs() < y.abs());
            prop_assert!(r == 0 || r.signum() == x.signum());
        }
    }
}
