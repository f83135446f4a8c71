use url::form_urlencoded;

use crate::multi_map::MultiMap;

/// Decoded `application/x-www-form-urlencoded` query parameters.
#[derive(Debug, Default)]
pub struct Query(MultiMap<String, String>);

impl Query {
    pub fn parse(raw: &str) -> Self {
        Self(
            form_urlencoded::parse(raw.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get_first(key).map(|s| s.as_str())
    }

    pub fn get_all(&self, key: &str) -> impl Iterator<Item = &str> + '_ {
        self.0.get_all(key).iter().map(|s| s.as_str())
    }

    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Replaces every value of `key` with `value`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.replace(key.into(), value.into());
    }

    /// Encodes the parameters sorted by key, values of one key in the order
    /// they were added.
    pub fn encode(&self) -> String {
        let mut keys: Vec<_> = self.0.keys().collect();
        keys.sort();

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for key in keys {
            for value in self.0.get_all(key) {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}
