//! Fixed-width bit strings.
//!
//! A [`BitString`] is an owned, most-significant-bit-first sequence of
//! [`Bit`]s. Its length is the bit width of the value; the engines never pad
//! or truncate an operand to make it fit.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::binary::Bit;

/// A fixed-width bit string, index 0 being the most significant bit.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BitString {
    bits: Vec<Bit>,
}

impl BitString {
    /// All-zero string of the given width.
    pub fn zeros(width: usize) -> Self {
        Self { bits: vec![Bit::Zero; width] }
    }

    /// All-one string of the given width.
    ///
    /// In one's complement this is negative zero; in two's complement, -1.
    pub fn ones(width: usize) -> Self {
        Self { bits: vec![Bit::One; width] }
    }

    /// The value one: `0...01`.
    pub fn one(width: usize) -> Self {
        let mut result = Self::zeros(width);
        if width > 0 {
            result.bits[width - 1] = Bit::One;
        }
        result
    }

    /// `1` followed by `width - 1` zeros, the most negative two's complement value.
    pub fn min_signed(width: usize) -> Self {
        let mut result = Self::zeros(width);
        if width > 0 {
            result.bits[0] = Bit::One;
        }
        result
    }

    /// Create from bits ordered most significant first.
    pub fn from_bits(bits: Vec<Bit>) -> Self {
        Self { bits }
    }

    /// The underlying bits, most significant first.
    #[inline]
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Number of bits.
    #[inline]
    pub fn width(&self) -> usize {
        self.bits.len()
    }

    /// Get a single bit by index (0 = MSB).
    #[inline]
    pub fn get(&self, index: usize) -> Bit {
        self.bits[index]
    }

    /// Set a single bit by index (0 = MSB).
    #[inline]
    pub fn set(&mut self, index: usize, bit: Bit) {
        self.bits[index] = bit;
    }

    /// Check if every bit is zero.
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| b.is_zero())
    }

    /// Check if every bit is one.
    pub fn is_all_ones(&self) -> bool {
        self.bits.iter().all(|b| b.is_one())
    }

    /// The most significant bit, read as a sign by the signed representations.
    ///
    /// An empty string reports `Bit::Zero`.
    pub fn sign(&self) -> Bit {
        self.bits.first().copied().unwrap_or_default()
    }

    /// Split into the leading sign bit and the remaining bits.
    pub fn split_sign(&self) -> (Bit, BitString) {
        match self.bits.split_first() {
            Some((sign, rest)) => (*sign, Self { bits: rest.to_vec() }),
            None => (Bit::Zero, Self::default()),
        }
    }

    /// Prefix `rest` with a sign bit.
    pub fn with_sign(sign: Bit, rest: &BitString) -> Self {
        let mut bits = Vec::with_capacity(rest.width() + 1);
        bits.push(sign);
        bits.extend_from_slice(&rest.bits);
        Self { bits }
    }

    /// Bitwise NOT.
    pub fn invert(&self) -> Self {
        Self { bits: self.bits.iter().map(|b| b.not()).collect() }
    }

    /// Left-pad with zeros up to `width`. Wider strings are returned unchanged.
    pub fn zero_extend(&self, width: usize) -> Self {
        if self.width() >= width {
            return self.clone();
        }
        let mut bits = vec![Bit::Zero; width - self.width()];
        bits.extend_from_slice(&self.bits);
        Self { bits }
    }

    /// The `width` least significant bits, left-padded with zeros if the
    /// string is narrower.
    pub fn low(&self, width: usize) -> Self {
        if self.width() <= width {
            return self.zero_extend(width);
        }
        Self { bits: self.bits[self.width() - width..].to_vec() }
    }

    /// Drop the most significant bit and append `bit` on the right.
    ///
    /// This is the register shift used by restoring division.
    pub fn shift_in(&self, bit: Bit) -> Self {
        let mut bits = Vec::with_capacity(self.width());
        if let Some((_, rest)) = self.bits.split_first() {
            bits.extend_from_slice(rest);
            bits.push(bit);
        }
        Self { bits }
    }

    /// Create from an unsigned integer.
    ///
    /// Returns `None` when `value` needs more than `width` bits.
    pub fn from_u64(value: u64, width: usize) -> Option<Self> {
        if width < 64 && value >> width != 0 {
            return None;
        }
        let bits = (0..width)
            .rev()
            .map(|i| if i < 64 { Bit::from((value >> i) & 1 == 1) } else { Bit::Zero })
            .collect();
        Some(Self { bits })
    }

    /// Read as an unsigned integer.
    ///
    /// Returns `None` when a set bit lies beyond bit 63.
    pub fn to_u64(&self) -> Option<u64> {
        let mut result: u64 = 0;
        for bit in &self.bits {
            if result >> 63 != 0 {
                return None;
            }
            result = (result << 1) | u64::from(bit.is_one());
        }
        Some(result)
    }

    /// Parse from a string of `'0'` and `'1'` characters.
    ///
    /// Every character must be a binary digit: no prefix, no whitespace. The
    /// width of the result is the length of `s`.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let bits = s
            .chars()
            .enumerate()
            .map(|(position, c)| Bit::from_char(c).ok_or(ParseError::InvalidChar { position, found: c }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { bits })
    }
}

impl fmt::Debug for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitString({}; {})", self, self.width())
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

impl FromStr for BitString {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BitString::parse(s)
    }
}

impl TryFrom<String> for BitString {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        BitString::parse(&s)
    }
}

impl From<BitString> for String {
    fn from(bits: BitString) -> Self {
        bits.to_string()
    }
}

/// Errors that can occur when parsing a bit string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Bad input: empty bit string")]
    Empty,

    #[error("Bad input: {found:?} at position {position} is not a binary digit")]
    InvalidChar { position: usize, found: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_roundtrip() {
        for s in ["0", "1", "0101", "1111000011110000"] {
            let bits: BitString = s.parse().unwrap();
            assert_eq!(bits.to_string(), s);
            assert_eq!(bits.width(), s.len());
        }
    }

    #[test]
    fn test_parse_rejects_prefix_and_whitespace() {
        assert_eq!(
            BitString::parse("0b1010"),
            Err(ParseError::InvalidChar { position: 1, found: 'b' })
        );
        assert_eq!(
            BitString::parse(" 1010"),
            Err(ParseError::InvalidChar { position: 0, found: ' ' })
        );
        assert_eq!(
            BitString::parse("1010\n"),
            Err(ParseError::InvalidChar { position: 4, found: '\n' })
        );
        assert!(serde_json::from_str::<BitString>("\" 1010\"").is_err());
    }

    #[test]
    fn test_parse_rejects_other_digits() {
        assert_eq!(
            BitString::parse("0120"),
            Err(ParseError::InvalidChar { position: 2, found: '2' })
        );
        assert_eq!(BitString::parse(""), Err(ParseError::Empty));
    }

    #[test]
    fn test_constants() {
        assert_eq!(BitString::zeros(4).to_string(), "0000");
        assert_eq!(BitString::ones(4).to_string(), "1111");
        assert_eq!(BitString::one(4).to_string(), "0001");
        assert_eq!(BitString::min_signed(4).to_string(), "1000");
    }

    #[test]
    fn test_sign_split_and_join() {
        let bits = BitString::parse("1011").unwrap();
        let (sign, rest) = bits.split_sign();
        assert_eq!(sign, Bit::One);
        assert_eq!(rest.to_string(), "011");
        assert_eq!(BitString::with_sign(sign, &rest), bits);
    }

    #[test]
    fn test_extend_and_low() {
        let bits = BitString::parse("101").unwrap();
        assert_eq!(bits.zero_extend(6).to_string(), "000101");
        assert_eq!(bits.zero_extend(2).to_string(), "101");
        assert_eq!(BitString::parse("110101").unwrap().low(3).to_string(), "101");
        assert_eq!(bits.low(5).to_string(), "00101");
    }

    #[test]
    fn test_shift_in() {
        let bits = BitString::parse("0110").unwrap();
        assert_eq!(bits.shift_in(Bit::One).to_string(), "1101");
    }

    #[test]
    fn test_u64_conversion() {
        assert_eq!(BitString::from_u64(5, 4).unwrap().to_string(), "0101");
        assert_eq!(BitString::from_u64(16, 4), None);
        assert_eq!(BitString::parse("1101").unwrap().to_u64(), Some(13));
        assert_eq!(BitString::from_u64(u64::MAX, 64).unwrap().to_u64(), Some(u64::MAX));
        assert_eq!(BitString::from_u64(3, 70).unwrap().to_u64(), Some(3));
        assert_eq!(BitString::ones(65).to_u64(), None);
    }

    #[test]
    fn test_serde_as_string() {
        let bits = BitString::parse("1001").unwrap();
        let json = serde_json::to_string(&bits).unwrap();
        assert_eq!(json, "\"1001\"");
        let back: BitString = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bits);
        assert!(serde_json::from_str::<BitString>("\"10a1\"").is_err());
    }
}
