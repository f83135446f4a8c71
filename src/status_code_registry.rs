use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

// https://www.iana.org/assignments/http-status-codes/http-status-codes.xhtml

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, EnumIter)]
#[repr(u16)]
pub enum StatusCode {
    OK = 200,
    BadRequest = 400,
    NotFound = 404,
    ContentTooLarge = 413,
}

impl StatusCode {
    pub fn code(self) -> u16 {
        self as u16
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            Self::OK => "OK",
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::ContentTooLarge => "Content Too Large",
        }
    }

    /// Looks up a known status code.
    pub fn from_code(code: u16) -> Option<Self> {
        STATUS_CODE_REGISTRY.get(&code).copied()
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.reason_phrase())
    }
}

lazy_static! {
    static ref STATUS_CODE_REGISTRY: HashMap<u16, StatusCode> =
        StatusCode::iter().map(|status| (status.code(), status)).collect();
}
