// Pipeline Property Bag
//
// Pipeline settings come from loosely-typed sources, so every typed
// accessor takes a default: an absent key and a failed coercion both
// resolve to the default instead of surfacing an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Scalar setting value (string | integer | float | boolean)
///
/// Floats are carried so one stray scalar cannot reject an otherwise
/// valid document; the typed accessors decide what coerces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

/// One named job pipeline's configuration: an order-insensitive mapping
/// from setting key to scalar value.
///
/// After defaulting, every pipeline carries a `name` (equal to its key
/// in the owning mapping) and an integer `priority`. Driver-specific
/// keys pass through unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pipeline(HashMap<String, Value>);

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup without a default.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// String accessor; integers and booleans render to their text form.
    pub fn string(&self, key: &str, default: &str) -> String {
        match self.0.get(key) {
            Some(Value::Str(s)) => s.clone(),
            Some(Value::Int(i)) => i.to_string(),
            Some(Value::Float(f)) => f.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            None => default.to_string(),
        }
    }

    /// Integer accessor; numeric strings and whole-number floats
    /// coerce, anything else resolves to the default.
    pub fn int(&self, key: &str, default: i64) -> i64 {
        match self.0.get(key) {
            Some(Value::Int(i)) => *i,
            Some(Value::Float(f)) if f.is_finite() && f.fract() == 0.0 => *f as i64,
            Some(Value::Str(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Boolean accessor; `"true"` / `"false"` strings parse.
    pub fn bool(&self, key: &str, default: bool) -> bool {
        match self.0.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::Str(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Insert or overwrite a setting in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
