//! Single binary digit.
//!
//! A bit is kept as its own two-valued type rather than a `bool` or `u8` so
//! that every carry and borrow in the engines is spelled out digit by digit.

use std::fmt;

/// A single binary digit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Bit {
    /// `'0'`
    #[default]
    Zero,
    /// `'1'`
    One,
}

impl Bit {
    /// Both bit values in ascending order.
    pub const ALL: [Bit; 2] = [Bit::Zero, Bit::One];

    /// Parse a bit from its character form.
    ///
    /// Only `'0'` and `'1'` are accepted.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Bit::Zero),
            '1' => Some(Bit::One),
            _ => None,
        }
    }

    /// The character form of this bit.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }

    /// Check if this bit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Bit::Zero)
    }

    /// Check if this bit is one.
    #[inline]
    pub const fn is_one(self) -> bool {
        matches!(self, Bit::One)
    }

    /// Logical NOT.
    #[inline]
    pub const fn not(self) -> Self {
        match self {
            Bit::Zero => Bit::One,
            Bit::One => Bit::Zero,
        }
    }

    /// Exclusive OR, used to combine operand signs.
    #[inline]
    pub const fn xor(self, other: Self) -> Self {
        if self.is_one() == other.is_one() {
            Bit::Zero
        } else {
            Bit::One
        }
    }

    /// Full adder: `self + other + carry`, returning `(sum, carry_out)`.
    #[inline]
    pub const fn full_add(self, other: Self, carry: Self) -> (Self, Self) {
        let total = self as u8 + other as u8 + carry as u8;
        (Self::from_low(total), Self::from_low(total >> 1))
    }

    /// Full subtractor: `self - other - borrow`, returning `(difference, borrow_out)`.
    #[inline]
    pub const fn full_sub(self, other: Self, borrow: Self) -> (Self, Self) {
        let subtrahend = other as u8 + borrow as u8;
        if (self as u8) >= subtrahend {
            (Self::from_low(self as u8 - subtrahend), Bit::Zero)
        } else {
            (Self::from_low(self as u8 + 2 - subtrahend), Bit::One)
        }
    }

    #[inline]
    const fn from_low(value: u8) -> Self {
        if value & 1 == 1 {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl fmt::Debug for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::ops::Not for Bit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Bit::not(self)
    }
}

impl From<bool> for Bit {
    fn from(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }
}

impl From<Bit> for bool {
    fn from(bit: Bit) -> Self {
        bit.is_one()
    }
}
