//! Typed path parameters extracted from a matched URL.

use std::collections::HashMap;

use serde::Serialize;

/// A single extracted placeholder value, converted per its declared kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Value of an `int` placeholder.
    Int(i64),
    /// Value of a `float` placeholder.
    Float(f64),
    /// Value of a `str`, `uuid` or `path` placeholder.
    Str(String),
}

impl ParamValue {
    /// Returns the integer value, if this is an `int` parameter.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float value, if this is a `float` parameter.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string-like parameter.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

/// Path parameters extracted from the URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PathParams {
    params: HashMap<String, ParamValue>,
}

impl PathParams {
    /// Creates new empty path params.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Gets a parameter value.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Gets a string-like parameter value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    /// Gets an integer parameter value.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ParamValue::as_int)
    }

    /// Gets a float parameter value.
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ParamValue::as_float)
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` when no parameters were extracted.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }
}
