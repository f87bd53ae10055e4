//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

//
// Type aliases.
//
pub type Result<T> = std::result::Result<T, Error>;

//
// IxNetwork config client errors.
//
#[derive(Debug)]
pub enum Error {
    Session(SessionError),
    Unmarshal(String, serde_json::Error),
    Marshal(serde_json::Error),
    NotImported(&'static str),
    NoId(String),
}

//
// Errors reported by the IxNetwork session.
//
#[derive(Debug)]
pub enum SessionError {
    Export(String),
    Import(String),
    QueryIds(String),
}

// ===== impl Error =====

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Session(error) => write!(f, "{error}"),
            Error::Unmarshal(config, error) => {
                write!(
                    f,
                    "failed to unmarshal config from {config:?}: {error}"
                )
            }
            Error::Marshal(error) => {
                write!(f, "failed to marshal config to JSON: {error}")
            }
            Error::NotImported(kind) => {
                write!(f, "node of type {kind} not yet imported")
            }
            Error::NoId(xpath) => {
                write!(f, "node at {xpath:?} has no updated ID")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Session(error) => Some(error),
            Error::Unmarshal(_, error) => Some(error),
            Error::Marshal(error) => Some(error),
            _ => None,
        }
    }
}

impl From<SessionError> for Error {
    fn from(error: SessionError) -> Error {
        Error::Session(error)
    }
}

// ===== impl SessionError =====

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Export(reason) => {
                write!(f, "failed to export config: {reason}")
            }
            SessionError::Import(reason) => {
                write!(f, "failed to import config: {reason}")
            }
            SessionError::QueryIds(reason) => {
                write!(f, "failed to query node IDs: {reason}")
            }
        }
    }
}

impl std::error::Error for SessionError {}
