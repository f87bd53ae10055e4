//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::path::Path;
use crate::value::TypedValue;

// A single update (or deletion) received from the target.
#[derive(Clone, Debug, PartialEq)]
#[derive(Deserialize, Serialize)]
pub struct DataPoint {
    pub path: Path,
    // `None` means the path was deleted.
    pub value: Option<TypedValue>,
    pub timestamp: DateTime<Utc>,
    pub recv_timestamp: DateTime<Utc>,
    // Marks the end of the initial synchronization of a subscription.
    #[serde(default)]
    pub sync: bool,
}

// ===== impl DataPoint =====

impl DataPoint {
    pub fn update(
        path: Path,
        value: TypedValue,
        timestamp: DateTime<Utc>,
    ) -> DataPoint {
        DataPoint {
            path,
            value: Some(value),
            timestamp,
            recv_timestamp: Utc::now(),
            sync: false,
        }
    }

    pub fn delete(path: Path, timestamp: DateTime<Utc>) -> DataPoint {
        DataPoint {
            path,
            value: None,
            timestamp,
            recv_timestamp: Utc::now(),
            sync: false,
        }
    }

    pub fn sync_marker(path: Path) -> DataPoint {
        let now = Utc::now();
        DataPoint {
            path,
            value: None,
            timestamp: now,
            recv_timestamp: now,
            sync: true,
        }
    }

    pub fn is_delete(&self) -> bool {
        !self.sync && self.value.is_none()
    }
}

// ===== global functions =====

// Groups datapoints by their path prefix of length `prefix_len`.
//
// Groups are returned in sorted prefix order, and the datapoints within each
// group keep their relative order. Sync markers and datapoints whose path is
// shorter than the prefix length are dropped.
pub fn bundle_datapoints(
    datapoints: Vec<DataPoint>,
    prefix_len: usize,
) -> BTreeMap<Path, Vec<DataPoint>> {
    let mut groups: BTreeMap<Path, Vec<DataPoint>> = BTreeMap::new();
    for dp in datapoints.into_iter().filter(|dp| !dp.sync) {
        if dp.path.len() < prefix_len {
            warn!(
                path = %dp.path,
                %prefix_len,
                "datapoint path shorter than prefix length"
            );
            continue;
        }
        let prefix = dp.path.prefix(prefix_len);
        groups.entry(prefix).or_default().push(dp);
    }
    groups
}
