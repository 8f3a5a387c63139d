//! Request routing and response shaping.
//!
//! A request names a representation and an operation as free text; the
//! handler picks the engine, runs it, and turns the outcome or failure into a
//! response a client can render directly.

use serde::{Serialize, Deserialize};
use thiserror::Error;
use tracing::{event, Level};
use crate::binary::{
    Arithmetic, ArithError, BitString, OnesComplement, SignMagnitude, TwosComplement, Unsigned,
};
use crate::dispatch::{Operation, Representation, UnknownName};

fn default_representation() -> String {
    "unsigned".to_string()
}

/// A binary operation as submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryOperationRequest {
    pub binary1: String,
    pub binary2: String,
    pub num_bits: usize,
    pub operation: String,
    #[serde(default = "default_representation")]
    pub representation: String,
}

/// The value computed by an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Sum, difference or product.
    Value(BitString),
    /// Quotient and remainder.
    Division { quotient: BitString, remainder: BitString },
}

/// A successful operation, shaped for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Description such as `"2's complement multiplication"`.
    pub operation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<BitString>,
    /// Width of a product, which differs from the operand width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_bits: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quotient: Option<BitString>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remainder: Option<BitString>,
    pub representation: String,
}

/// What a client receives: a report, or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    Success(Report),
    Failure { error: String },
}

impl Response {
    /// Check if this response carries an error.
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Failure { .. })
    }
}

/// Run `operation` on two operands in the given representation.
pub fn evaluate(
    representation: Representation,
    operation: Operation,
    a: &BitString,
    b: &BitString,
    width: usize,
) -> Result<Outcome, ArithError> {
    match representation {
        Representation::Unsigned => run::<Unsigned>(operation, a, b, width),
        Representation::SignMagnitude => run::<SignMagnitude>(operation, a, b, width),
        Representation::OnesComplement => run::<OnesComplement>(operation, a, b, width),
        Representation::TwosComplement => run::<TwosComplement>(operation, a, b, width),
    }
}

fn run<A: Arithmetic>(
    operation: Operation,
    a: &BitString,
    b: &BitString,
    width: usize,
) -> Result<Outcome, ArithError> {
    match operation {
        Operation::Add => A::add(a, b, width).map(Outcome::Value),
        Operation::Subtract => A::subtract(a, b, width).map(Outcome::Value),
        Operation::Multiply => A::multiply(a, b, width).map(Outcome::Value),
        Operation::Divide => A::divide(a, b, width)
            .map(|(quotient, remainder)| Outcome::Division { quotient, remainder }),
    }
}

/// Route a request and build its report.
pub fn handle(request: &BinaryOperationRequest) -> Result<Report, DispatchError> {
    let representation: Representation = request.representation.parse()?;
    let operation: Operation = request.operation.parse()?;
    let a = BitString::parse(&request.binary1).map_err(ArithError::from)?;
    let b = BitString::parse(&request.binary2).map_err(ArithError::from)?;

    event!(
        Level::DEBUG,
        "{} {} of {} and {} in {} bits",
        representation, operation, a, b, request.num_bits
    );

    let outcome = evaluate(representation, operation, &a, &b, request.num_bits)?;
    let mut report = Report {
        operation: format!("{} {}", representation.label(), operation.noun()),
        result: None,
        result_bits: None,
        quotient: None,
        remainder: None,
        representation: representation.display_name().to_string(),
    };
    match outcome {
        Outcome::Value(value) => {
            if operation == Operation::Multiply {
                report.result_bits = Some(value.width());
            }
            report.result = Some(value);
        }
        Outcome::Division { quotient, remainder } => {
            report.quotient = Some(quotient);
            report.remainder = Some(remainder);
        }
    }
    Ok(report)
}

/// Route a request, folding any failure into an error response.
pub fn dispatch(request: &BinaryOperationRequest) -> Response {
    match handle(request) {
        Ok(report) => Response::Success(report),
        Err(e) => {
            event!(Level::DEBUG, "request {:?} failed: {}", request, e);
            Response::Failure { error: e.to_string() }
        }
    }
}

/// Decode a JSON request, dispatch it, and encode the response.
pub fn dispatch_json(input: &str) -> Result<String, serde_json::Error> {
    let request: BinaryOperationRequest = serde_json::from_str(input)?;
    serde_json::to_string(&dispatch(&request))
}

/// Errors that can occur while handling a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error(transparent)]
    UnknownName(#[from] UnknownName),

    #[error(transparent)]
    Arithmetic(#[from] ArithError),
}
