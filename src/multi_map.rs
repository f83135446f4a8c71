use std::{borrow::Borrow, collections::HashMap, hash::Hash};

use anyhow::bail;

/// A map that keeps every value inserted under a key, in insertion order.
#[derive(Debug, Clone)]
pub struct MultiMap<K, T>(HashMap<K, Vec<T>>);

impl<K, T> MultiMap<K, T>
where
    K: Eq + Hash,
{
    pub fn new_empty() -> Self {
        Self(HashMap::new())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends `value` to the values already stored under `key`.
    pub fn insert(&mut self, key: K, value: T) {
        self.0.entry(key).or_default().push(value);
    }

    /// Drops every value stored under `key` and stores `value` alone.
    pub fn replace(&mut self, key: K, value: T) {
        self.0.insert(key, vec![value]);
    }

    pub fn get_first<Q>(&self, key: &Q) -> Option<&T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.get(key).and_then(|values| values.first())
    }

    pub fn get_all<Q>(&self, key: &Q) -> &[T]
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.0.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Fails when more than one value is stored under `key`.
    pub fn get_scalar<Q>(&self, key: &Q) -> anyhow::Result<Option<&T>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.0.get(key).map(Vec::as_slice) {
            Some([scalar]) => Ok(Some(scalar)),
            Some([]) | None => Ok(None),
            Some(_) => bail!("not scalar"),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.keys()
    }
}

impl<K, T> Default for MultiMap<K, T>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new_empty()
    }
}

impl<K, T> FromIterator<(K, T)> for MultiMap<K, T>
where
    K: Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut mm = Self::new_empty();
        for (k, v) in iter {
            mm.insert(k, v);
        }
        mm
    }
}
