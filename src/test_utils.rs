use std::{
    io::{self, ErrorKind, Read},
    iter::{self, Chain, Repeat},
};

use crate::{
    request::Request, response_writer::ResponseWriter, server::Handler,
    status_code_registry::StatusCode,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// handlers
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -

/// Responds `200 OK` with a fixed plain text body.
pub fn text_handler(body: &'static str) -> impl Handler {
    move |w: &mut ResponseWriter, _: &mut Request| {
        w.set_status(StatusCode::OK);
        w.set_body_str(body);
    }
}

/// Responds `200 OK` with the request's encoded query string.
pub fn query_echo_handler() -> impl Handler {
    |w: &mut ResponseWriter, r: &mut Request| {
        w.set_status(StatusCode::OK);
        w.set_body_str(&r.get_raw_query());
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// ErrReader
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -

pub struct ErrReader<I> {
    it: I,
}

impl<I> ErrReader<I> {
    pub fn new(prefix: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            it: prefix.into_iter(),
        }
    }
}

impl<'a, I: Iterator<Item = &'a u8>> Read for ErrReader<I> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(byte) = self.it.next() {
            buf[0] = *byte;
            return Ok(1);
        }
        Err(io::Error::new(ErrorKind::ConnectionReset, "error"))
    }
}

// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
// InfReader
// - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -

pub struct InfReader {
    it: Chain<Box<dyn Iterator<Item = u8>>, Repeat<u8>>,
}

impl InfReader {
    pub fn new<'a, I: Iterator<Item = &'a u8>>(
        prefix: impl IntoIterator<IntoIter = I>,
        repeat: u8,
    ) -> Self {
        let prefix: Box<dyn Iterator<Item = u8>> =
            Box::new(prefix.into_iter().cloned().collect::<Vec<_>>().into_iter());
        Self {
            it: prefix.chain(iter::repeat(repeat)),
        }
    }
}

impl Read for InfReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let data: Vec<_> = self.it.by_ref().take(buf.len()).collect();
        buf[..data.len()].copy_from_slice(&data);
        Ok(data.len())
    }
}
