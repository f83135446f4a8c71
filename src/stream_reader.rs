use std::io::{self, BufRead, BufReader, Read, Take};

use thiserror::Error;

#[derive(Error, Debug)]
#[error("end of file")]
pub struct EndOfFile;

#[derive(Error, Debug)]
#[error("line is not terminated by CRLF")]
pub struct UnterminatedLine;

pub struct StreamReader<R> {
    buf_reader: Take<BufReader<R>>,
}

impl<R: Read> StreamReader<R> {
    pub fn new(r: R) -> Self {
        Self {
            buf_reader: BufReader::new(r).take(u64::MAX),
        }
    }

    /// Caps how many bytes the following reads may consume in total.
    pub fn set_limit(&mut self, limit: u64) {
        self.buf_reader.set_limit(limit);
    }

    /// Reads one line and strips its CRLF.
    ///
    /// Fails with `EndOfFile` when nothing is left to read and with
    /// `UnterminatedLine` when the stream or the limit ends mid-line.
    pub fn read_crlf_line(&mut self) -> anyhow::Result<String> {
        let mut buf = String::new();
        let n = self.buf_reader.read_line(&mut buf)?;
        if n == 0 {
            Err(EndOfFile)?
        }
        match buf.strip_suffix("\r\n") {
            Some(line) => Ok(line.to_owned()),
            None => Err(UnterminatedLine.into()),
        }
    }

    pub fn read_exact(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.buf_reader.read_exact(buf)
    }
}
