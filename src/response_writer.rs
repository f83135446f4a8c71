use crate::status_code_registry::StatusCode;

/// Collects a response and serialises it once the handler is done.
///
/// A handler that never sets a status produces `200 OK`.
#[derive(Debug)]
pub struct ResponseWriter {
    status_code: Option<u16>,
    reason_phrase: Option<String>,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl ResponseWriter {
    pub fn new_empty() -> Self {
        Self {
            status_code: None,
            reason_phrase: None,
            headers: vec![],
            body: vec![],
        }
    }

    pub fn get_status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status_code = Some(status.code());
        self.reason_phrase = Some(status.reason_phrase().to_owned());
    }

    /// Sets a raw status code; the reason phrase is filled in when the code is
    /// a known one.
    pub fn set_status_code(&mut self, status_code: u16) {
        self.status_code = Some(status_code);
        self.reason_phrase =
            StatusCode::from_code(status_code).map(|s| s.reason_phrase().to_owned());
    }

    /// Sets `key` to `value`, replacing a header of the same name.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        if let Some(entry) = self
            .headers
            .iter_mut()
            .find(|entry| entry.0.eq_ignore_ascii_case(&key))
        {
            entry.1 = value;
        } else {
            self.headers.push((key, value));
        }
    }

    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|entry| entry.0.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn get_body(&self) -> &[u8] {
        &self.body
    }

    pub fn set_body(&mut self, body: Vec<u8>, content_type: &str) {
        self.body = body;
        self.set_header("Content-Type", content_type);
    }

    pub fn set_body_str(&mut self, body: &str) {
        self.set_body(body.as_bytes().to_vec(), "text/plain");
    }

    pub fn write(mut self) -> Vec<u8> {
        let status_code = match self.status_code {
            Some(status_code) => status_code,
            None => {
                self.set_status(StatusCode::OK);
                StatusCode::OK.code()
            }
        };
        let mut status_line = format!("HTTP/1.1 {}", status_code);
        if let Some(reason_phrase) = &self.reason_phrase {
            status_line = format!("{} {}", status_line, reason_phrase);
        }
        status_line.push_str("\r\n");

        self.set_header("Content-Length", self.body.len().to_string());
        let mut headers = self
            .headers
            .into_iter()
            .map(|(k, v)| format!("{}: {}\r\n", k, v))
            .collect::<Vec<_>>()
            .join("");
        headers.push_str("\r\n");

        let mut resp = vec![];
        resp.extend(status_line.bytes());
        resp.extend(headers.bytes());
        resp.extend(self.body);
        resp
    }
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new_empty()
    }
}
