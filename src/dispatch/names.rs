//! Representation and operation names accepted from clients.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use crate::binary::{Arithmetic, BitString, OnesComplement, SignMagnitude, TwosComplement, Unsigned};

/// One of the four supported binary representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    Unsigned,
    #[serde(alias = "signed")]
    SignMagnitude,
    OnesComplement,
    TwosComplement,
}

impl Representation {
    pub const ALL: [Representation; 4] = [
        Representation::Unsigned,
        Representation::SignMagnitude,
        Representation::OnesComplement,
        Representation::TwosComplement,
    ];

    /// Name shown to users, e.g. `"1's complement"`.
    pub fn display_name(self) -> &'static str {
        match self {
            Representation::Unsigned => Unsigned::NAME,
            Representation::SignMagnitude => SignMagnitude::NAME,
            Representation::OnesComplement => OnesComplement::NAME,
            Representation::TwosComplement => TwosComplement::NAME,
        }
    }

    /// Prefix used in operation descriptions, e.g. `"signed"`.
    pub fn label(self) -> &'static str {
        match self {
            Representation::Unsigned => Unsigned::LABEL,
            Representation::SignMagnitude => SignMagnitude::LABEL,
            Representation::OnesComplement => OnesComplement::LABEL,
            Representation::TwosComplement => TwosComplement::LABEL,
        }
    }

    /// Smallest bit width the representation accepts.
    pub fn min_width(self) -> usize {
        match self {
            Representation::Unsigned => Unsigned::MIN_WIDTH,
            Representation::SignMagnitude => SignMagnitude::MIN_WIDTH,
            Representation::OnesComplement => OnesComplement::MIN_WIDTH,
            Representation::TwosComplement => TwosComplement::MIN_WIDTH,
        }
    }

    /// Decimal value of `bits` in this representation, if it fits in an `i64`.
    pub fn decode(self, bits: &BitString) -> Option<i64> {
        match self {
            Representation::Unsigned => Unsigned::decode(bits),
            Representation::SignMagnitude => SignMagnitude::decode(bits),
            Representation::OnesComplement => OnesComplement::decode(bits),
            Representation::TwosComplement => TwosComplement::decode(bits),
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Representation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unsigned" => Ok(Representation::Unsigned),
            "signed" | "sign-magnitude" | "sign_magnitude" => Ok(Representation::SignMagnitude),
            "ones_complement" | "ones-complement" | "ones" => Ok(Representation::OnesComplement),
            "twos_complement" | "twos-complement" | "twos" => Ok(Representation::TwosComplement),
            _ => Err(UnknownName::Representation(s.to_string())),
        }
    }
}

/// An arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    #[serde(alias = "sub")]
    Subtract,
    #[serde(alias = "mul")]
    Multiply,
    #[serde(alias = "div")]
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Noun form, e.g. `"multiplication"`.
    pub fn noun(self) -> &'static str {
        match self {
            Operation::Add => "addition",
            Operation::Subtract => "subtraction",
            Operation::Multiply => "multiplication",
            Operation::Divide => "division",
        }
    }

    /// Canonical name, e.g. `"multiply"`.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" | "sub" => Ok(Operation::Subtract),
            "multiply" | "mul" => Ok(Operation::Multiply),
            "divide" | "div" => Ok(Operation::Divide),
            _ => Err(UnknownName::Operation(s.to_string())),
        }
    }
}

/// A representation or operation name that is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownName {
    #[error("Invalid representation. Use 'unsigned', 'signed', 'ones_complement', or 'twos_complement'")]
    Representation(String),

    #[error("Invalid operation. Use 'add', 'subtract', 'multiply', or 'divide'")]
    Operation(String),
}
