//! The successful result of one RPC call.

use std::fmt;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::amount::amount_from_json;

/// Wraps the `result` member of a successful azartd response.
///
/// Result shapes differ per method, so the value is kept verbatim and only
/// interpreted on request. Paths use dot notation where numeric segments
/// index into arrays: `"vout.0.value"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    result: Value,
}

impl ResponseEnvelope {
    pub fn new(result: Value) -> Self {
        Self { result }
    }

    /// The raw result exactly as the daemon sent it.
    pub fn get(&self) -> &Value {
        &self.result
    }

    pub fn into_inner(self) -> Value {
        self.result
    }

    /// Decode the result into a caller-defined type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.result)
    }

    /// Look up a nested value. An empty path yields the whole result.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        if path.is_empty() {
            return Some(&self.result);
        }
        path.split('.').try_fold(&self.result, |node, segment| match node {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Whether `path` resolves to a non-null value.
    pub fn has(&self, path: &str) -> bool {
        self.get_path(path).is_some_and(|v| !v.is_null())
    }

    /// Number of elements in the array or object at `path`; 0 otherwise.
    pub fn count(&self, path: &str) -> usize {
        match self.get_path(path) {
            Some(Value::Array(items)) => items.len(),
            Some(Value::Object(map)) => map.len(),
            _ => 0,
        }
    }

    /// Read a coin amount at `path` as an exact decimal.
    pub fn amount(&self, path: &str) -> Option<Decimal> {
        self.get_path(path).and_then(amount_from_json)
    }
}

impl From<Value> for ResponseEnvelope {
    fn from(result: Value) -> Self {
        Self::new(result)
    }
}

impl fmt::Display for ResponseEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}
