//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use tracing::warn;

//
// Type aliases.
//
pub type Result<T> = std::result::Result<T, Error>;

//
// gNMI errors.
//
#[derive(Debug)]
pub enum Error {
    PathParse(String, &'static str),
    InvalidRequest(String),
    Transport(String),
    SubscriptionClosed,
}

// ===== impl Error =====

impl Error {
    pub fn log(&self) {
        match self {
            Error::PathParse(path, reason) => {
                warn!(%path, %reason, "{}", self);
            }
            Error::InvalidRequest(reason) | Error::Transport(reason) => {
                warn!(%reason, "{}", self);
            }
            Error::SubscriptionClosed => {
                warn!("{}", self);
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::PathParse(path, reason) => {
                write!(f, "failed to parse path {path:?}: {reason}")
            }
            Error::InvalidRequest(reason) => {
                write!(f, "invalid gNMI request: {reason}")
            }
            Error::Transport(reason) => {
                write!(f, "gNMI transport error: {reason}")
            }
            Error::SubscriptionClosed => {
                write!(f, "subscription closed unexpectedly")
            }
        }
    }
}

impl std::error::Error for Error {}
