//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use chrono::{DateTime, Utc};
use ondatra_gnmi::Path;

use crate::error::{Error, Result};

// Metadata describing where and when a telemetry value was observed.
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    // Path of the data, with the list keys of the matching elements.
    pub path: Path,
    // Latest device timestamp among the datapoints that built the value.
    pub timestamp: DateTime<Utc>,
    // Latest time any of these datapoints was received.
    pub recv_timestamp: DateTime<Utc>,
}

// A telemetry value, possibly absent, along with its metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct Qualified<T> {
    metadata: Metadata,
    value: Option<T>,
}

// ===== impl Metadata =====

impl Metadata {
    // Metadata of a value that was never received from the device.
    pub fn unset(path: Path) -> Metadata {
        Metadata {
            path,
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            recv_timestamp: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    // Accounts for one more datapoint contributing to the value.
    pub(crate) fn observe(
        &mut self,
        timestamp: DateTime<Utc>,
        recv_timestamp: DateTime<Utc>,
    ) {
        self.timestamp = self.timestamp.max(timestamp);
        self.recv_timestamp = self.recv_timestamp.max(recv_timestamp);
    }
}

// ===== impl Qualified =====

impl<T> Qualified<T> {
    pub fn new(metadata: Metadata) -> Qualified<T> {
        Qualified {
            metadata,
            value: None,
        }
    }

    pub fn with_value(metadata: Metadata, value: T) -> Qualified<T> {
        Qualified {
            metadata,
            value: Some(value),
        }
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    pub fn path(&self) -> &Path {
        &self.metadata.path
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    // Returns the value, failing when it isn't present.
    pub fn val(&self) -> Result<&T> {
        self.value
            .as_ref()
            .ok_or_else(|| Error::NotPresent(self.metadata.path.to_string()))
    }

    pub fn into_value(self) -> Option<T> {
        self.value
    }

    pub fn set_val(&mut self, value: T) -> &mut Qualified<T> {
        self.value = Some(value);
        self
    }
}

impl<T> std::fmt::Display for Qualified<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (timestamp {}, received {}): ",
            self.metadata.path,
            self.metadata.timestamp.to_rfc3339(),
            self.metadata.recv_timestamp.to_rfc3339()
        )?;
        match &self.value {
            Some(value) => write!(f, "{value:?}"),
            None => write!(f, "not present"),
        }
    }
}
