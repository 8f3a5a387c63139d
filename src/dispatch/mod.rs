//! Routing of named operations to the arithmetic engines.
//!
//! This is the layer a front end talks to: it accepts representation and
//! operation names as text, runs the matching engine, and shapes the result
//! (or error message) for display.

mod names;
mod handler;

pub use names::{Operation, Representation, UnknownName};
pub use handler::{
    dispatch, dispatch_json, evaluate, handle, BinaryOperationRequest, DispatchError, Outcome, Report,
    Response,
};
