//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::sync::{Arc, Mutex};

use ondatra_utils::task::Task;

use crate::error::{Error, Result};
use crate::qualified::Qualified;

// Outcome of a watch: the last value received, and whether it satisfied the
// predicate before the timeout.
pub type WatchOutcome<T> = (Option<Qualified<T>>, bool);

// Handle to a running watch.
//
// The underlying subscription is canceled when the handle is dropped.
#[derive(Debug)]
pub struct Watcher<T> {
    path: String,
    task: Task<Result<WatchOutcome<T>>>,
}

// Handle to a running collection of telemetry values.
#[derive(Debug)]
pub struct Collection<T> {
    watcher: Watcher<T>,
    values: Arc<Mutex<Vec<Qualified<T>>>>,
}

// ===== impl Watcher =====

impl<T> Watcher<T> {
    pub(crate) fn new(
        path: String,
        task: Task<Result<WatchOutcome<T>>>,
    ) -> Watcher<T> {
        Watcher { path, task }
    }

    // Schema path being watched.
    pub fn path(&self) -> &str {
        &self.path
    }

    // Blocks until the predicate is satisfied or the timeout expires.
    pub async fn wait(self) -> Result<WatchOutcome<T>> {
        match self.task.await {
            Ok(result) => result,
            Err(error) => {
                Err(Error::WatchAborted(self.path, error.to_string()))
            }
        }
    }
}

// ===== impl Collection =====

impl<T> Collection<T> {
    pub(crate) fn new(
        watcher: Watcher<T>,
        values: Arc<Mutex<Vec<Qualified<T>>>>,
    ) -> Collection<T> {
        Collection { watcher, values }
    }

    // Blocks until the collection duration elapses, returning every value
    // received in arrival order.
    pub async fn wait(self) -> Result<Vec<Qualified<T>>> {
        self.watcher.wait().await?;
        let mut values = self.values.lock().unwrap();
        Ok(std::mem::take(&mut *values))
    }
}
