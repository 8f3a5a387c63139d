//! WebAssembly bindings.
//!
//! This module provides JavaScript-friendly wrappers around the dispatch
//! layer and the radix converter, for a browser front end.

use wasm_bindgen::prelude::*;
use crate::dispatch::dispatch_json;
use crate::radix::convert;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Run a binary operation given as a JSON request.
///
/// Returns the JSON response, which holds either the result fields or an
/// `error` message.
#[wasm_bindgen]
pub fn binary_operation(request_json: &str) -> Result<String, JsError> {
    dispatch_json(request_json).map_err(|e| JsError::new(&format!("{}", e)))
}

/// Convert a number between bases 2 and 20.
#[wasm_bindgen]
pub fn convert_number(number: &str, from_base: u32, to_base: u32) -> Result<String, JsError> {
    convert(number, from_base, to_base).map_err(|e| JsError::new(&format!("{}", e)))
}

/// Representation names accepted by [`binary_operation`].
#[wasm_bindgen]
pub fn representations() -> Vec<JsValue> {
    ["unsigned", "signed", "ones_complement", "twos_complement"]
        .iter()
        .map(|name| JsValue::from_str(name))
        .collect()
}
