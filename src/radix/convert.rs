//! Base-to-base conversion of signed, possibly fractional numbers.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::radix::digit::{self, MAX_BASE, MIN_BASE};

/// Fractional digits emitted at most.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Remaining fraction below which digit generation stops.
const FRACTION_EPSILON: f64 = 1e-12;

/// A conversion as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub number: String,
    pub from_base: u32,
    pub to_base: u32,
}

impl ConversionRequest {
    /// Run the conversion.
    pub fn convert(&self) -> Result<String, ConvertError> {
        convert(&self.number, self.from_base, self.to_base)
    }
}

/// Convert `number`, written in `from_base`, to `to_base`.
///
/// The number may carry a leading `-` and a single `.`. At most
/// [`MAX_FRACTION_DIGITS`] fractional digits are produced.
pub fn convert(number: &str, from_base: u32, to_base: u32) -> Result<String, ConvertError> {
    for base in [from_base, to_base] {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(ConvertError::UnsupportedBase(base));
        }
    }

    let value = parse(number, from_base)?;
    Ok(format(value, to_base))
}

/// Check that `number` is well formed in `base`.
pub fn is_valid_number(number: &str, base: u32) -> bool {
    (MIN_BASE..=MAX_BASE).contains(&base) && parse(number, base).is_ok()
}

fn parse(number: &str, base: u32) -> Result<f64, ConvertError> {
    let incompatible = || ConvertError::Incompatible { number: number.to_string(), base };

    let (negative, body) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number),
    };

    let (integer, fraction) = match body.split_once('.') {
        Some((integer, fraction)) => (integer, fraction),
        None => (body, ""),
    };

    let digits = |part: &str| -> Result<Vec<u32>, ConvertError> {
        part.chars()
            .map(|c| digit::value_of(c).filter(|&v| v < base).ok_or_else(|| incompatible()))
            .collect()
    };
    let integer = digits(integer)?;
    let fraction = digits(fraction)?;

    if integer.is_empty() && fraction.is_empty() {
        return Err(incompatible());
    }

    let base = f64::from(base);
    let mut value = integer.iter().fold(0.0, |acc, &d| acc * base + f64::from(d));
    let mut divisor = base;
    for d in fraction {
        value += f64::from(d) / divisor;
        divisor *= base;
    }

    Ok(if negative { -value } else { value })
}

fn format(value: f64, base: u32) -> String {
    let mut output = String::new();
    let mut value = value;
    if value < 0.0 {
        output.push('-');
        value = -value;
    }

    let mut integer = value.trunc() as u128;
    let mut fraction = value - value.trunc();

    if integer == 0 {
        output.push('0');
    } else {
        let mut digits = Vec::new();
        while integer > 0 {
            digits.push(digit_char((integer % u128::from(base)) as u32));
            integer /= u128::from(base);
        }
        output.extend(digits.iter().rev());
    }

    if fraction > 0.0 {
        output.push('.');
        for _ in 0..MAX_FRACTION_DIGITS {
            fraction *= f64::from(base);
            let d = fraction.trunc();
            output.push(digit_char(d as u32));
            fraction -= d;
            if fraction < FRACTION_EPSILON {
                break;
            }
        }
    }

    output
}

fn digit_char(value: u32) -> char {
    // Values are always below the base, which is at most MAX_BASE.
    digit::char_of(value).unwrap_or('?')
}

/// Errors that can occur during base conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("base {0} is outside the supported range 2..=20")]
    UnsupportedBase(u32),

    #[error("Entered number is not compatible with base")]
    Incompatible { number: String, base: u32 },
}
