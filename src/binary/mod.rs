//! Fixed-width binary arithmetic.
//!
//! This module provides the bit-level types and the four arithmetic engines:
//! - [`Bit`] - A single binary digit
//! - [`BitString`] - A fixed-width, MSB-first bit string
//! - [`unsigned`] - Plain magnitudes; the other engines are built on it
//! - [`sign_magnitude`], [`ones`], [`twos`] - The signed representations
//!
//! Every engine exposes `add`, `subtract`, `multiply` and `divide` as free
//! functions over `(a, b, width)`, and through the [`Arithmetic`] trait.

mod bit;
mod word;
mod error;
pub mod prims;
pub mod unsigned;
pub mod sign_magnitude;
pub mod ones;
pub mod twos;

pub use bit::Bit;
pub use word::{BitString, ParseError};
pub use error::ArithError;
pub use prims::{compare, is_zero, left_shift, add_no_overflow_check};
pub use unsigned::Unsigned;
pub use sign_magnitude::SignMagnitude;
pub use ones::OnesComplement;
pub use twos::TwosComplement;

/// A binary number representation with fixed-width arithmetic.
///
/// Implementors are zero-sized markers; the operations are associated
/// functions so callers can pick an engine by type.
pub trait Arithmetic {
    /// Smallest width the representation accepts.
    const MIN_WIDTH: usize;

    /// Representation name as shown to users, e.g. `"sign-magnitude"`.
    const NAME: &'static str;

    /// Prefix for operation descriptions, e.g. `"signed"` in "signed addition".
    const LABEL: &'static str;

    /// Add two `width`-bit values.
    fn add(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError>;

    /// Subtract `b` from `a`.
    fn subtract(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError>;

    /// Multiply; the product is wider than the operands.
    fn multiply(a: &BitString, b: &BitString, width: usize) -> Result<BitString, ArithError>;

    /// Divide, returning `(quotient, remainder)`.
    fn divide(a: &BitString, b: &BitString, width: usize) -> Result<(BitString, BitString), ArithError>;

    /// Decimal value of a bit string in this representation, if it fits in an `i64`.
    fn decode(bits: &BitString) -> Option<i64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> BitString {
        BitString::parse(s).unwrap()
    }

    fn divide_by_zero<A: Arithmetic>(width: usize) {
        let zero = BitString::zeros(width);
        for value in 1..(1u64 << width) {
            let a = BitString::from_u64(value, width).unwrap();
            assert_eq!(
                A::divide(&a, &zero, width),
                Err(ArithError::DivisionByZero),
                "{} {} / {}",
                A::NAME,
                a,
                zero
            );
        }
    }

    #[test]
    fn test_division_by_zero_in_every_representation() {
        divide_by_zero::<Unsigned>(4);
        divide_by_zero::<SignMagnitude>(4);
        divide_by_zero::<OnesComplement>(4);
        divide_by_zero::<TwosComplement>(4);
    }

    #[test]
    fn test_boundary_cases() {
        assert_eq!(Unsigned::add(&bits("1111"), &bits("0001"), 4), Err(ArithError::Overflow));
        assert_eq!(Unsigned::subtract(&bits("0001"), &bits("0010"), 4), Err(ArithError::Underflow));
        assert_eq!(
            TwosComplement::add(&bits("0111"), &bits("0001"), 4),
            Err(ArithError::TwosComplementOverflow)
        );
        assert_eq!(OnesComplement::add(&bits("1111"), &bits("0001"), 4), Ok(bits("0001")));
        assert_eq!(SignMagnitude::add(&bits("1011"), &bits("0011"), 4), Ok(bits("0000")));
        assert_eq!(
            TwosComplement::divide(&bits("1000"), &bits("1111"), 4),
            Err(ArithError::TwosComplementDivisionOverflow)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ArithError::Overflow.to_string(), "Overflow");
        assert_eq!(ArithError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(ArithError::SignMagnitudeOverflow.to_string(), "Signed magnitude overflow");
        assert_eq!(ArithError::OnesComplementOverflow.to_string(), "1's complement overflow");
        assert_eq!(ArithError::TwosComplementOverflow.to_string(), "2's complement overflow");
        assert!(ArithError::WidthMismatch { expected: 4, found: 3 }.is_malformed_input());
        assert!(!ArithError::Underflow.is_malformed_input());
    }
}
