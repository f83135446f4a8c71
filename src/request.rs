use std::io::{ErrorKind, Read};

use percent_encoding::percent_decode_str;
use thiserror::Error;
use tracing::debug;

pub use crate::stream_reader::EndOfFile;
use crate::{headers::Headers, query::Query, stream_reader::StreamReader};

const MAX_REQUEST_LINE_BYTES: u64 = 1024;
const MAX_HEADER_BYTES: u64 = 8 * 1024;

#[derive(Error, Debug)]
#[error("invalid request")]
pub struct InvalidRequest;

#[derive(Error, Debug)]
#[error("content too large")]
pub struct ContentTooLarge;

#[derive(Debug)]
pub struct Request {
    http_method: String,
    path: String,
    http_version: String,
    query: Query,
    headers: Headers,
    body: Option<Vec<u8>>,
}

impl Request {
    /// Builds a request from a request line such as `GET /items?page=2 HTTP/1.1`.
    ///
    /// The path is percent-decoded once. A path that does not decode to UTF-8
    /// is rejected.
    pub fn new(
        request_line: &str,
        headers: Headers,
        body: Option<Vec<u8>>,
    ) -> Result<Self, InvalidRequest> {
        let mut parts = request_line.split(' ');
        let (Some(http_method), Some(target), Some(http_version), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(InvalidRequest);
        };
        if http_method.is_empty() || target.is_empty() || http_version.is_empty() {
            return Err(InvalidRequest);
        }

        let (path, raw_query) = target.split_once('?').unwrap_or((target, ""));
        let path = percent_decode_str(path)
            .decode_utf8()
            .map_err(|_| InvalidRequest)?;
        Ok(Self {
            http_method: http_method.to_owned(),
            path: path.into_owned(),
            http_version: http_version.to_owned(),
            query: Query::parse(raw_query),
            headers,
            body,
        })
    }

    pub fn get_http_method(&self) -> &str {
        &self.http_method
    }

    /// The decoded request target without its query string.
    pub fn get_path(&self) -> &str {
        &self.path
    }

    pub fn get_http_version(&self) -> &str {
        &self.http_version
    }

    pub fn get_query(&self) -> &Query {
        &self.query
    }

    pub fn get_query_mut(&mut self) -> &mut Query {
        &mut self.query
    }

    pub fn get_query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key)
    }

    /// The query string as it currently stands, path arguments included.
    pub fn get_raw_query(&self) -> String {
        self.query.encode()
    }

    pub fn get_headers(&self) -> &Headers {
        &self.headers
    }

    pub fn get_header(&self, key: &str) -> Option<&str> {
        self.headers.get_first(key)
    }

    pub fn get_body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }
}

pub struct RequestReader<R> {
    stream_reader: StreamReader<R>,
    max_body_bytes: usize,
}

impl<R: Read> RequestReader<R> {
    pub fn new(r: R, max_body_bytes: usize) -> Self {
        Self {
            stream_reader: StreamReader::new(r),
            max_body_bytes,
        }
    }

    pub fn read(&mut self) -> anyhow::Result<Request> {
        self.stream_reader.set_limit(MAX_REQUEST_LINE_BYTES);
        let request_line = self.stream_reader.read_crlf_line()?;
        debug!(?request_line);
        let mut r = Request::new(&request_line, Headers::new_empty(), None)?;

        self.stream_reader.set_limit(MAX_HEADER_BYTES);
        loop {
            let line = match self.stream_reader.read_crlf_line() {
                Err(err) if err.is::<EndOfFile>() => Err(InvalidRequest)?,
                res => res?,
            };

            if line.is_empty() {
                break;
            }
            let (k, v) = line.split_once(':').ok_or(InvalidRequest)?;
            r.headers.insert(k, v);
        }

        let content_length = r
            .headers
            .get_content_length()
            .map_err(|_| InvalidRequest)?;
        if let Some(content_length) = content_length {
            if content_length > self.max_body_bytes {
                Err(ContentTooLarge)?
            }

            self.stream_reader.set_limit(content_length as u64);
            let mut buf = vec![0; content_length];
            if let Err(err) = self.stream_reader.read_exact(&mut buf) {
                if err.kind() == ErrorKind::UnexpectedEof {
                    Err(InvalidRequest)?
                } else {
                    Err(err)?
                }
            }
            r.body = Some(buf);
        }

        Ok(r)
    }
}
