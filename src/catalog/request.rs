// src/catalog/request.rs

use crate::constants::DEFAULT_PAGE_LIMIT;
use serde_json::Value;

/// A normalized pagination window.
///
/// Built from raw request input by [`PageRequest::from_json`], which never
/// fails: missing or non-numeric fields fall back to their defaults and
/// negative values clamp to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first record in the window.
    pub offset: usize,
    /// Maximum number of records in the window.
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// Coerces an optional JSON request body into a window.
    ///
    /// Only a JSON object contributes fields; anything else (including an
    /// absent body) yields the default window.
    pub fn from_json(body: Option<&Value>) -> Self {
        let fields = body.and_then(Value::as_object);
        Self::from_raw(
            fields.and_then(|f| f.get("offset")),
            fields.and_then(|f| f.get("limit")),
        )
    }

    /// Coerces the raw `offset` and `limit` values independently.
    pub fn from_raw(offset: Option<&Value>, limit: Option<&Value>) -> Self {
        let defaults = Self::default();
        Self {
            offset: coerce_integer(offset).map_or(defaults.offset, clamp_non_negative),
            limit: coerce_integer(limit).map_or(defaults.limit, clamp_non_negative),
        }
    }
}

/// Interprets a JSON value as an integer, truncating toward zero.
///
/// Numbers and numeric strings (after trimming) are accepted. Everything else,
/// including non-finite results, is `None`.
fn coerce_integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| truncate(n.as_f64()?)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| truncate(s.parse::<f64>().ok()?))
        }
        _ => None,
    }
}

fn truncate(v: f64) -> Option<i64> {
    // `as` saturates at the i64 bounds
    v.is_finite().then(|| v.trunc() as i64)
}

fn clamp_non_negative(v: i64) -> usize {
    usize::try_from(v.max(0)).unwrap_or(usize::MAX)
}
