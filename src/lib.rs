//! # bitcalc
//!
//! Fixed-width binary arithmetic over four number representations:
//! unsigned, sign-magnitude, one's complement and two's complement.
//!
//! Every operation works digit by digit on [`BitString`] values, the way it
//! would be done by hand: ripple-carry addition, borrow-chain subtraction,
//! shift-and-add multiplication and restoring division. Overflow, sign and
//! zero rules are those of each representation.
//!
//! A radix converter for bases 2 to 20 is included alongside.

pub mod binary;
pub mod dispatch;
pub mod radix;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use binary::{
    Arithmetic, ArithError, Bit, BitString, OnesComplement, ParseError, SignMagnitude,
    TwosComplement, Unsigned,
};
pub use dispatch::{
    dispatch, evaluate, BinaryOperationRequest, DispatchError, Operation, Outcome, Representation,
    Response,
};
pub use radix::{convert, ConversionRequest, ConvertError};
