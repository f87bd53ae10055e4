//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ondatra_gnmi::Path;
use tracing::warn;

//
// Type aliases.
//
pub type Result<T> = std::result::Result<T, Error>;

//
// Telemetry errors.
//
#[derive(Debug)]
pub enum Error {
    Gnmi(ondatra_gnmi::Error),
    NotPresent(String),
    AwaitFailed {
        path: String,
        want: String,
        last: String,
    },
    WatchAborted(String, String),
    EmptyBatch,
    ForeignDevice(String, String),
}

//
// Errors decoding a datapoint into a schema node. These are reported and the
// offending datapoint is skipped.
//
#[derive(Debug, Eq, PartialEq)]
pub enum UnmarshalError {
    UnknownElement(String, &'static str),
    MissingKey(&'static str),
    InvalidKey(&'static str, String),
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    OutOfRange(String, &'static str),
    UnknownIdentity(String, &'static str),
    UnsupportedDelete(&'static str),
}

// ===== impl Error =====

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Gnmi(error) => write!(f, "{error}"),
            Error::NotPresent(path) => {
                write!(f, "no value present at {path}")
            }
            Error::AwaitFailed { path, want, last } => {
                write!(
                    f,
                    "await at {path} failed: want {want}, last got {last}"
                )
            }
            Error::WatchAborted(path, reason) => {
                write!(f, "watch at {path} aborted: {reason}")
            }
            Error::EmptyBatch => {
                write!(f, "batch contains no paths")
            }
            Error::ForeignDevice(dut, batch_dut) => {
                write!(f, "path of device {dut} added to batch of {batch_dut}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Gnmi(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ondatra_gnmi::Error> for Error {
    fn from(error: ondatra_gnmi::Error) -> Error {
        Error::Gnmi(error)
    }
}

// ===== impl UnmarshalError =====

impl UnmarshalError {
    pub(crate) fn log(&self, path: &Path) {
        warn!(%path, error = %self, "skipping datapoint");
    }
}

impl std::fmt::Display for UnmarshalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnmarshalError::UnknownElement(elem, node) => {
                write!(f, "unknown element {elem:?} in {node}")
            }
            UnmarshalError::MissingKey(key) => {
                write!(f, "missing list key {key:?}")
            }
            UnmarshalError::InvalidKey(key, value) => {
                write!(f, "invalid value {value:?} for list key {key:?}")
            }
            UnmarshalError::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            UnmarshalError::OutOfRange(value, ty) => {
                write!(f, "value {value} out of range for {ty}")
            }
            UnmarshalError::UnknownIdentity(value, ty) => {
                write!(f, "unknown {ty} value {value:?}")
            }
            UnmarshalError::UnsupportedDelete(node) => {
                write!(f, "unsupported delete of a partial {node} subtree")
            }
        }
    }
}

impl std::error::Error for UnmarshalError {}
