//! # Tolerant JSON Decoding
//!
//! Converts the backend's loosely-typed JSON into domain records without
//! ever failing the whole decode over one bad field. Every field access
//! goes through the extraction rules in this module:
//!
//! - required strings default to `""` when absent, optional strings to
//!   `None` — a missing label never aborts a record
//! - optional numbers decode to `None` when absent, null, non-coercible or
//!   non-finite; they never decode to `0` or leak a NaN
//! - numeric strings (`"3.5"`) coerce to numbers, matching the backend's
//!   PHP habit of quoting decimals
//! - ids default to `0` when absent or malformed; they are opaque values
//!   this client only echoes back
//!
//! Record decoders ([`usuario`], [`finca`], [`fincas`], [`cultivos`]) build
//! on these rules; coordinate-sequence decoding, which is polymorphic over
//! the wire representation, is [`coordenadas`].

mod records;

pub use records::{coordenadas, cultivos, finca, fincas, usuario};

use serde_json::Value;

/// Extract a required string field. Absent, null or structured values
/// decode to the empty string; scalar non-strings coerce via display.
pub(crate) fn req_string(obj: &Value, key: &str) -> String {
    opt_string(obj, key).unwrap_or_default()
}

/// Extract an optional string field. Absent or null decodes to `None`.
pub(crate) fn opt_string(obj: &Value, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Extract an optional numeric field, normalizing anything that is not a
/// finite number — null, absent, unparseable text, NaN — to `None`.
pub(crate) fn opt_f64(obj: &Value, key: &str) -> Option<f64> {
    obj.get(key).and_then(finite)
}

/// Extract a numeric id, defaulting to 0 when absent or malformed.
pub(crate) fn id(obj: &Value, key: &str) -> i64 {
    match obj.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Coerce a single JSON value to a finite `f64`, or `None`.
pub(crate) fn finite(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}
