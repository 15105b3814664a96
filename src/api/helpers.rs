//! Shared helpers for WASM API operations
//!
//! This module contains common patterns for serialization, deserialization,
//! error handling, and logging across all API operations.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::error::PadError;
use crate::models::key::{Key, Scale};
use crate::pad::KeyContext;

// ============================================================================
// Console Logging Functions
// ============================================================================

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn info(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn warn(s: &str);

    #[wasm_bindgen(js_namespace = console)]
    fn error(s: &str);
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_debug(&format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_info(&format!($($arg)*))
    };
}

/// Log a warning message with [WASM] ⚠️ prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_warn(&format!($($arg)*))
    };
}

/// Log an error message with [WASM] ❌ prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        $crate::api::helpers::log_error(&format!($($arg)*))
    };
}

// ============================================================================
// Logging Helper Functions (called by macros)
// ============================================================================

#[cfg(target_arch = "wasm32")]
pub fn log_debug(msg: &str) {
    log(&format!("[WASM] {}", msg));
}

#[cfg(target_arch = "wasm32")]
pub fn log_info(msg: &str) {
    info(&format!("[WASM] {}", msg));
}

#[cfg(target_arch = "wasm32")]
pub fn log_warn(msg: &str) {
    warn(&format!("[WASM] ⚠️ {}", msg));
}

#[cfg(target_arch = "wasm32")]
pub fn log_error(msg: &str) {
    error(&format!("[WASM] ❌ {}", msg));
}

// Native builds (tests, tooling) have no console; route through `log`
#[cfg(not(target_arch = "wasm32"))]
pub fn log_debug(msg: &str) {
    log::debug!("[WASM] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_info(msg: &str) {
    log::info!("[WASM] {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_warn(msg: &str) {
    log::warn!("[WASM] ⚠️ {}", msg);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_error(msg: &str) {
    log::error!("[WASM] ❌ {}", msg);
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Deserialize an optional argument, using the default for `undefined`/`null`
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling.
///
/// Maps become plain objects so chord tables index like `table["Dm7"]`.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log_error(&msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize an optional result, mapping `None` to `null`
pub fn serialize_option<T: Serialize>(
    value: Option<&T>,
    error_context: &str,
) -> Result<JsValue, JsValue> {
    match value {
        Some(v) => serialize(v, error_context),
        None => Ok(JsValue::NULL),
    }
}

// ============================================================================
// Validation Helpers
// ============================================================================

/// Parse a key spelling sent by the shell
pub fn parse_key(key: &str) -> Result<Key, PadError> {
    key.parse()
}

/// Parse a scale name sent by the shell
pub fn parse_scale(scale: &str) -> Result<Scale, PadError> {
    scale.parse()
}

/// Parse both halves of a key context
pub fn parse_context(key: &str, scale: &str) -> Result<KeyContext, PadError> {
    Ok(KeyContext::new(parse_key(key)?, parse_scale(scale)?))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(err: impl std::fmt::Display) -> JsValue {
    let msg = err.to_string();
    log_error(&msg);
    JsValue::from_str(&msg)
}
