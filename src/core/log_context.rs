//! Structured logging context for key-value fields
//!
//! This module provides:
//! - `Context`: flat string-to-string fields attached to a record or logger
//! - `ContextFn`: a provider evaluated freshly for every written record

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Flat mapping of string keys to string values.
///
/// Keys are unique and iterate in sorted order, so a rendered record does
/// not depend on how its fields were inserted.
///
/// # Example
///
/// ```
/// use rust_logops::Context;
///
/// let ctx = Context::new()
///     .with_field("service", "api-gateway")
///     .with_field("version", "1.2.3");
///
/// assert_eq!(ctx.get("service"), Some("api-gateway"));
/// assert_eq!(ctx.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Context {
    fields: BTreeMap<String, String>,
}

impl Context {
    /// Create a new empty context
    pub fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to the context
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the context (mutable version)
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.fields.iter()
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (k, v) in &self.fields {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}={}", k, v)?;
            first = false;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Context {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Context
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Context
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<HashMap<String, String>> for Context {
    fn from(fields: HashMap<String, String>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }
}

/// Context provider evaluated on every accepted record.
///
/// The provider runs synchronously on the logging thread, so it must be cheap
/// and must not block. Results are never cached.
///
/// # Example
///
/// ```
/// use rust_logops::{Context, ContextFn};
///
/// let provider = ContextFn::new(|| Context::from([("pid", std::process::id().to_string())]));
/// assert!(provider.call().contains_key("pid"));
/// ```
pub struct ContextFn {
    provider: Box<dyn Fn() -> Context + Send + Sync>,
}

impl ContextFn {
    pub fn new<F>(provider: F) -> Self
    where
        F: Fn() -> Context + Send + Sync + 'static,
    {
        Self {
            provider: Box::new(provider),
        }
    }

    #[inline]
    pub fn call(&self) -> Context {
        (self.provider)()
    }
}

impl fmt::Debug for ContextFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContextFn(..)")
    }
}
