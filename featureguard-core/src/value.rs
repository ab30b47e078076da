//! Flag value encoding.
//!
//! Booleans are written as `"1"` / `"0"`. Reads accept the wider set of
//! spellings existing writers have produced.

/// Encoded form of `true`.
pub const TRUE: &str = "1";

/// Encoded form of `false`.
pub const FALSE: &str = "0";

/// Encode a flag state for storage.
pub fn encode(enabled: bool) -> &'static str {
    if enabled { TRUE } else { FALSE }
}

/// Decode a stored flag value.
///
/// Returns `None` when the value is not a recognised boolean.
pub fn decode(raw: &str) -> Option<bool> {
    match raw {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
