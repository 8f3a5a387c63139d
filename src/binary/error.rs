//! Arithmetic failures.

use thiserror::Error;
use crate::binary::{BitString, ParseError};

/// Errors raised by the arithmetic engines.
///
/// Every engine validates its operands before doing any arithmetic and fails
/// without a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Bad input: operand has {found} bits, expected {expected}")]
    WidthMismatch { expected: usize, found: usize },

    #[error("Bad input: width {width} is below the minimum of {minimum}")]
    WidthTooSmall { width: usize, minimum: usize },

    #[error("Division by zero")]
    DivisionByZero,

    /// Unsigned carry out of the most significant bit.
    #[error("Overflow")]
    Overflow,

    /// Unsigned subtrahend larger than the minuend.
    #[error("Underflow")]
    Underflow,

    #[error("Signed magnitude overflow")]
    SignMagnitudeOverflow,

    #[error("1's complement overflow")]
    OnesComplementOverflow,

    #[error("2's complement overflow")]
    TwosComplementOverflow,

    /// The subtrahend is the most negative value, whose negation does not fit.
    #[error("2's complement subtraction error")]
    TwosComplementNegation,

    /// Most negative value divided by -1.
    #[error("2's complement division overflow")]
    TwosComplementDivisionOverflow,
}

impl ArithError {
    /// Check if this is a malformed-input error rather than an arithmetic one.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            ArithError::Parse(_) | ArithError::WidthMismatch { .. } | ArithError::WidthTooSmall { .. }
        )
    }
}

/// Check that `width` is at least `minimum` and that both operands have
/// exactly `width` bits.
pub(crate) fn check_operands(
    a: &BitString,
    b: &BitString,
    width: usize,
    minimum: usize,
) -> Result<(), ArithError> {
    if width < minimum {
        return Err(ArithError::WidthTooSmall { width, minimum });
    }
    for operand in [a, b] {
        if operand.width() != width {
            return Err(ArithError::WidthMismatch { expected: width, found: operand.width() });
        }
    }
    Ok(())
}
