//! Substitution maps.
//!
//! [`Values`] is the map handed to templates. Rendering only needs name
//! resolution, so templates accept anything implementing [`Lookup`]; plain
//! `HashMap<String, String>` and `BTreeMap<String, String>` work directly.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Resolves a placeholder name to its replacement text.
pub trait Lookup {
    /// `None` means the name is absent and the placeholder stays as written.
    fn lookup(&self, name: &str) -> Option<&str>;
}

impl Lookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Lookup for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<L: Lookup + ?Sized> Lookup for &L {
    fn lookup(&self, name: &str) -> Option<&str> {
        (**self).lookup(name)
    }
}

/// Placeholder name to replacement value.
///
/// Keys are unique; inserting an existing key replaces its value. Empty
/// values are legal and render as an empty span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Values {
    inner: HashMap<String, String>,
}

impl Values {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, consuming self and returning the updated map.
    ///
    /// ```
    /// use herald_core::domain::Values;
    ///
    /// let values = Values::new().with("name", "David").with("age", "95");
    /// assert_eq!(values.get("age"), Some("95"));
    /// ```
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous one for that key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.inner.remove(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Overlay `other` on top of `self`; keys in `other` win.
    pub fn merge(&mut self, other: Values) {
        self.inner.extend(other.inner);
    }

    /// Iterate entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sorted by key, for stable display.
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Lookup for Values {
    fn lookup(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

impl From<HashMap<String, String>> for Values {
    fn from(inner: HashMap<String, String>) -> Self {
        Self { inner }
    }
}

impl From<Values> for HashMap<String, String> {
    fn from(values: Values) -> Self {
        values.inner
    }
}

impl<K, V> FromIterator<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for Values
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.inner
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v.into())));
    }
}
