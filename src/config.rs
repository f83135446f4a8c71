use std::time::Duration;

use clap::Parser;
use tracing::Level;

use crate::server::{DEFAULT_MAX_BODY_BYTES, DEFAULT_READ_TIMEOUT};

/// A really simple and fast HTTP router, served over HTTP/1.1.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "QUO_VADIS_ADDR", default_value = "127.0.0.1:4221")]
    pub addr: String,

    /// Seconds an idle connection may wait for the next request; 0 disables the timeout
    #[arg(long, env = "QUO_VADIS_READ_TIMEOUT_SECS", default_value_t = DEFAULT_READ_TIMEOUT.as_secs())]
    pub read_timeout_secs: u64,

    /// Largest request body accepted, in bytes
    #[arg(long, env = "QUO_VADIS_MAX_BODY_BYTES", default_value_t = DEFAULT_MAX_BODY_BYTES)]
    pub max_body_bytes: usize,

    /// Most verbose level logged (trace, debug, info, warn, error)
    #[arg(long, env = "QUO_VADIS_LOG_LEVEL", default_value_t = Level::INFO)]
    pub log_level: Level,
}

impl Config {
    pub fn read_timeout(&self) -> Option<Duration> {
        match self.read_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::parse_from(["quo-vadis"])
    }
}
