//! In-memory value source.

use std::sync::{Arc, RwLock};

use herald_core::{
    application::{ApplicationError, ports::ValueSource},
    domain::{DomainError, Values},
    error::HeraldResult,
};

/// Thread-safe in-memory value store.
///
/// Clones share the same map, so values inserted through one handle are
/// visible to a service holding another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryValueSource {
    inner: Arc<RwLock<Values>>,
}

impl InMemoryValueSource {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `values`.
    pub fn from_values(values: Values) -> Self {
        Self {
            inner: Arc::new(RwLock::new(values)),
        }
    }

    /// Build a store from `KEY=VALUE` strings, as given on the command line.
    ///
    /// The value is everything after the first `=`, so it may contain `=` or
    /// be empty. Later pairs override earlier ones.
    pub fn from_pairs<I, S>(pairs: I) -> HeraldResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = Values::new();
        for pair in pairs {
            let (key, value) = parse_pair(pair.as_ref())?;
            values.insert(key, value);
        }
        Ok(Self::from_values(values))
    }

    /// Insert or replace a value.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) -> HeraldResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert(key, value);
        Ok(())
    }

    /// Number of values held.
    pub fn len(&self) -> HeraldResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.len())
    }

    pub fn is_empty(&self) -> HeraldResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clear all values.
    pub fn clear(&self) -> HeraldResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        *inner = Values::new();
        Ok(())
    }
}

impl ValueSource for InMemoryValueSource {
    fn describe(&self) -> String {
        "command line".into()
    }

    fn load(&self) -> HeraldResult<Values> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;
        Ok(inner.clone())
    }
}

fn parse_pair(pair: &str) -> Result<(&str, &str), DomainError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(DomainError::InvalidValues {
            key: pair.to_owned(),
            reason: "expected KEY=VALUE".into(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::error::HeraldError;

    #[test]
    fn pairs_split_at_first_equals() {
        let source = InMemoryValueSource::from_pairs(["a=1", "eq=x=y", "empty="]).unwrap();
        let values = source.load().unwrap();
        assert_eq!(values.get("a"), Some("1"));
        assert_eq!(values.get("eq"), Some("x=y"));
        assert_eq!(values.get("empty"), Some(""));
    }

    #[test]
    fn later_pairs_win() {
        let source = InMemoryValueSource::from_pairs(["k=first", "k=second"]).unwrap();
        assert_eq!(source.load().unwrap().get("k"), Some("second"));
        assert_eq!(source.len().unwrap(), 1);
    }

    #[test]
    fn malformed_pairs_are_rejected() {
        for bad in ["novalue", "=value", ""] {
            assert!(matches!(
                InMemoryValueSource::from_pairs([bad]),
                Err(HeraldError::Domain(DomainError::InvalidValues { .. }))
            ));
        }
    }

    #[test]
    fn clones_share_state() {
        let source = InMemoryValueSource::new();
        let handle = source.clone();
        handle.insert("name", "David").unwrap();
        assert_eq!(source.load().unwrap().get("name"), Some("David"));

        source.clear().unwrap();
        assert!(handle.is_empty().unwrap());
    }

    #[test]
    fn poisoned_lock_is_reported_not_hidden() {
        let source = InMemoryValueSource::from_pairs(["a=1"]).unwrap();
        let writer = source.clone();
        let _ = std::thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        for result in [source.len().map(|_| ()), source.is_empty().map(|_| ())] {
            assert!(matches!(
                result,
                Err(HeraldError::Application(ApplicationError::StoreLockError))
            ));
        }
        assert!(source.load().is_err());
        assert!(source.insert("b", "2").is_err());
    }
}
