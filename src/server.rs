use std::{
    io::{self, Write},
    net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs},
    thread,
    time::Duration,
};

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{error, info, span, Level, Span};

use crate::{
    request::{ContentTooLarge, EndOfFile, Request, RequestReader},
    response_writer::ResponseWriter,
    status_code_registry::StatusCode,
};

/// The verbs that get a shortcut on the router. Any other method string can
/// still be registered through `Router::add_route`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_BODY_BYTES: usize = 8 * 1024;

#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    read_timeout: Option<Duration>,
    max_body_bytes: usize,
}

impl Server {
    pub fn bind(addr: impl ToSocketAddrs) -> io::Result<Self> {
        Ok(Self {
            listener: TcpListener::bind(addr)?,
            read_timeout: Some(DEFAULT_READ_TIMEOUT),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        })
    }

    pub fn with_read_timeout(mut self, read_timeout: Option<Duration>) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serves every connection on its own scoped thread. `handler` is shared
    /// by reference, so it must not be mutated while serving.
    pub fn run(&self, handler: impl Handler + Sync) {
        thread::scope(|s| {
            for stream in self.listener.incoming() {
                let stream = match stream {
                    Ok(stream) => stream,
                    Err(err) => {
                        error!(?err);
                        continue;
                    }
                };

                let handler = &handler;
                s.spawn(move || {
                    let span = create_conn_span(&stream);
                    let _guard = span.enter();
                    info!("new conn");

                    if let Err(err) = handle_connection(
                        stream,
                        self.read_timeout,
                        self.max_body_bytes,
                        handler,
                    ) {
                        error!(?err);
                    }

                    info!("conn end");
                });
            }
        });
    }
}

#[derive(Debug)]
enum ConnCtrl {
    KeepAlive,
    Close,
}

fn handle_connection(
    stream: TcpStream,
    read_timeout: Option<Duration>,
    max_body_bytes: usize,
    handler: &impl Handler,
) -> anyhow::Result<()> {
    let (reader, writer) = (&stream, &stream);
    reader.set_read_timeout(read_timeout)?;
    let mut request_reader = RequestReader::new(reader, max_body_bytes);

    loop {
        match handle_request(&mut request_reader, writer, handler)? {
            ConnCtrl::KeepAlive => continue,
            ConnCtrl::Close => return Ok(()),
        }
    }
}

fn handle_request(
    request_reader: &mut RequestReader<&TcpStream>,
    mut writer: &TcpStream,
    handler: &impl Handler,
) -> anyhow::Result<ConnCtrl> {
    let mut r = match request_reader.read() {
        Ok(r) => r,
        Err(err) => {
            if err.downcast_ref::<EndOfFile>().is_some() {
                return Ok(ConnCtrl::Close);
            }

            error!(?err);
            let mut w = ResponseWriter::new_empty();
            if err.downcast_ref::<ContentTooLarge>().is_some() {
                w.set_status(StatusCode::ContentTooLarge);
            } else {
                w.set_status(StatusCode::BadRequest);
            }
            w.set_header("Connection", "close");
            writer.write_all(&w.write())?;
            return Ok(ConnCtrl::Close);
        }
    };

    let span = create_req_span(&r);
    let _guard = span.enter();
    info!(?r);

    let conn_ctrl = if r.get_headers().has_connection_close() {
        ConnCtrl::Close
    } else {
        ConnCtrl::KeepAlive
    };

    let mut w = ResponseWriter::new_empty();
    handler.handle(&mut w, &mut r);
    if let ConnCtrl::Close = conn_ctrl {
        w.set_header("Connection", "close");
    }
    writer.write_all(&w.write())?;
    Ok(conn_ctrl)
}

fn create_conn_span(stream: &TcpStream) -> Span {
    let peer_addr = match stream.peer_addr() {
        Ok(addr) => addr.to_string(),
        Err(err) => {
            error!(?err);
            "unknown".to_owned()
        }
    };

    span!(Level::INFO, "conn", peer_addr = %peer_addr)
}

fn create_req_span(r: &Request) -> Span {
    span!(
        Level::INFO,
        "req",
        method = r.get_http_method(),
        target = r.get_path()
    )
}

pub trait Handler {
    fn handle(&self, w: &mut ResponseWriter, r: &mut Request);
}

impl<T> Handler for T
where
    T: Fn(&mut ResponseWriter, &mut Request),
{
    fn handle(&self, w: &mut ResponseWriter, r: &mut Request) {
        self(w, r)
    }
}

#[cfg(test)]
pub fn noop_handler() -> impl Handler {
    |_: &mut ResponseWriter, _: &mut Request| {}
}
