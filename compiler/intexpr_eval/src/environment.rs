//! Variable lookup for identifier resolution.
//!
//! The engine only ever reads an environment. Callers keep ownership of the
//! bindings and may share one environment across threads and evaluations.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxHashMap;

/// Read-only mapping from case-sensitive variable names to values.
///
/// A missing name is reported by the evaluator as an undefined variable;
/// it never defaults to zero.
pub trait Environment {
    /// Value bound to `name`, if any.
    fn lookup(&self, name: &str) -> Option<i64>;
}

impl<E: Environment + ?Sized> Environment for &E {
    #[inline]
    fn lookup(&self, name: &str) -> Option<i64> {
        (**self).lookup(name)
    }
}

impl<K, S> Environment for HashMap<K, i64, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    #[inline]
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name).copied()
    }
}

impl<K> Environment for BTreeMap<K, i64>
where
    K: Borrow<str> + Ord,
{
    #[inline]
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name).copied()
    }
}

/// Linear scan; the first pair with a matching name wins.
impl<K: AsRef<str>> Environment for [(K, i64)] {
    fn lookup(&self, name: &str) -> Option<i64> {
        self.iter()
            .find(|(key, _)| key.as_ref() == name)
            .map(|&(_, value)| value)
    }
}

impl<K: AsRef<str>, const N: usize> Environment for [(K, i64); N] {
    fn lookup(&self, name: &str) -> Option<i64> {
        self.as_slice().lookup(name)
    }
}

/// Owned variable bindings, backed by an `FxHashMap`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Values {
    bindings: FxHashMap<String, i64>,
}

impl Values {
    /// Create an empty set of bindings.
    pub fn new() -> Self {
        Values::default()
    }

    /// Builder form of [`Values::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: i64) -> Self {
        self.insert(name, value);
        self
    }

    /// Bind `name` to `value`, returning the previous value if it was bound.
    pub fn insert(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.bindings.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.bindings.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Environment for Values {
    #[inline]
    fn lookup(&self, name: &str) -> Option<i64> {
        self.get(name)
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for Values {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut values = Values::new();
        values.extend(iter);
        values
    }
}

impl<K: Into<String>> Extend<(K, i64)> for Values {
    fn extend<I: IntoIterator<Item = (K, i64)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}
