//! Search query parameters
//!
//! Netdisco search and report endpoints take free-form query parameters
//! which the client forwards verbatim. `SearchQuery` keeps parameters in
//! insertion order and renders flag values the way the service expects
//! (`true` / `false`).

use std::fmt;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Free-text value, sent as-is
    Str(String),
    /// Flag value, rendered as `true` or `false`
    Bool(bool),
}

impl ParamValue {
    /// Wire form of the value
    pub fn as_str(&self) -> &str {
        match self {
            ParamValue::Str(s) => s,
            ParamValue::Bool(true) => "true",
            ParamValue::Bool(false) => "false",
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered collection of query parameters
///
/// Parameter names are not interpreted by the client; unknown names are
/// passed through for the server to judge. Order of addition is preserved
/// on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    params: Vec<(String, ParamValue)>,
}

impl SearchQuery {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, returning the query (builder style)
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Add a parameter in place
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.push((name.into(), value.into()));
    }

    /// True if no parameters have been added
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Iterate over parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Borrowed `(name, value)` pairs in wire form, for the query string
    pub(crate) fn as_pairs(&self) -> Vec<(&str, &str)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect()
    }
}
