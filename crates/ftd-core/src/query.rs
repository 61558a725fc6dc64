//! Convenience builder for HTTP query parameters.
//!
//! This module provides a lightweight helper for constructing URL query
//! pairs from optional values, including the appliance's `field:value`
//! filter convention for exact-match lookups.

use std::fmt::Display;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a key/value pair when the value is present.
    pub fn push_opt<T>(&mut self, key: &'static str, value: Option<T>)
    where
        T: ToString,
    {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
    }

    /// Append a required key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a `filter=field:value` exact-match expression.
    ///
    /// The appliance encodes all lookup filters through a single `filter`
    /// parameter, e.g. `filter=name:corp-net`.
    pub fn push_filter(&mut self, field: &str, value: &str) {
        self.pairs.push(("filter", format!("{field}:{value}")));
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }

    /// Returns true if no parameters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
