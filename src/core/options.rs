//! Declarative per-target build options.
//!
//! Build configuration declares a free-form option table per target; each
//! builder strategy documents the keys it recognizes and ignores the rest.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single build option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A string value
    Str(String),

    /// An ordered list of strings
    List(Vec<String>),
}

/// Build options for one target, as declared in build configuration.
///
/// Key order is not significant. Lookup is by option name; absent keys
/// fall back to builder-specific defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildOptions {
    options: HashMap<String, OptionValue>,
}

impl BuildOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        BuildOptions::default()
    }

    /// Set an option value.
    pub fn insert(&mut self, key: impl Into<String>, value: OptionValue) {
        self.options.insert(key.into(), value);
    }

    /// Set a string option (builder-style).
    pub fn with_str(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, OptionValue::Str(value.into()));
        self
    }

    /// Set a list option (builder-style).
    pub fn with_list(
        mut self,
        key: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.insert(
            key,
            OptionValue::List(values.into_iter().map(|v| v.into()).collect()),
        );
        self
    }

    /// Get a string option, falling back to a default when the key is
    /// absent or holds a non-string value.
    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.options.get(key) {
            Some(OptionValue::Str(s)) => s,
            _ => default,
        }
    }

    /// Get a list option, if present.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.options.get(key) {
            Some(OptionValue::List(values)) => Some(values),
            _ => None,
        }
    }

    /// Check if an option is set.
    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Check if no options are set.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
