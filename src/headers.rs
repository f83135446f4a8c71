use crate::multi_map::MultiMap;

/// Request headers. Names are case-insensitive; a header may repeat.
#[derive(Debug, Default)]
pub struct Headers(MultiMap<String, String>);

impl Headers {
    pub fn new_empty() -> Self {
        Self(MultiMap::new_empty())
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_lowercase(), value.trim().to_owned());
    }

    pub fn get_scalar(&self, key: &str) -> anyhow::Result<Option<&str>> {
        Ok(self
            .0
            .get_scalar(key.to_lowercase().as_str())?
            .map(|s| s.as_str()))
    }

    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.0
            .get_first(key.to_lowercase().as_str())
            .map(|s| s.as_str())
    }

    /// Every value of `key`, with comma separated lists split apart.
    pub fn get_iter(&self, key: &str) -> impl Iterator<Item = &str> + '_ {
        self.0
            .get_all(key.to_lowercase().as_str())
            .iter()
            .flat_map(|value| value.split(','))
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }

    pub fn has_connection_close(&self) -> bool {
        self.get_iter("connection")
            .any(|token| token.eq_ignore_ascii_case("close"))
    }

    pub fn get_content_length(&self) -> anyhow::Result<Option<usize>> {
        match self.get_scalar("content-length")? {
            Some(length) => Ok(Some(length.parse()?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Headers;

    #[test]
    fn test_case_insensitive() {
        let mut headers = Headers::new_empty();
        headers.insert("Accept", " */* ");
        assert_eq!(headers.get_first("accept"), Some("*/*"));
        assert_eq!(headers.get_first("ACCEPT"), Some("*/*"));
        assert_eq!(headers.get_first("user-agent"), None);
    }

    #[test]
    fn test_connection_close() {
        let tests = [
            (vec![], false),
            (vec!["keep-alive"], false),
            (vec!["close"], true),
            (vec!["Close"], true),
            (vec!["keep-alive, close"], true),
            (vec!["upgrade", "close"], true),
        ];

        for (values, want) in tests {
            let mut headers = Headers::new_empty();
            for value in &values {
                headers.insert("Connection", value);
            }
            assert_eq!(headers.has_connection_close(), want, "{:?}", values);
        }
    }

    #[test]
    fn test_content_length() {
        let mut headers = Headers::new_empty();
        assert_eq!(headers.get_content_length().unwrap(), None);

        headers.insert("Content-Length", "12");
        assert_eq!(headers.get_content_length().unwrap(), Some(12));

        headers.insert("Content-Length", "12");
        assert!(headers.get_content_length().is_err());

        let mut headers = Headers::new_empty();
        headers.insert("Content-Length", "twelve");
        assert!(headers.get_content_length().is_err());
    }
}
