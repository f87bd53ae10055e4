//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use futures::channel::mpsc;
use tracing::{debug, trace};

use crate::datapoint::DataPoint;
use crate::error::{Error, Result};
use crate::path::Path;
use crate::target::{Subscription, Target};
use crate::value::TypedValue;

// In-memory device under test.
//
// Stores the latest value of every leaf, answers `ONCE` requests from that
// state, and streams every change to the matching `STREAM` subscribers
// (initial state first, then a sync marker, then live notifications).
#[derive(Debug)]
pub struct MemoryTarget {
    name: String,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    leaves: BTreeMap<Path, DataPoint>,
    subscribers: Vec<Subscriber>,
}

#[derive(Debug)]
struct Subscriber {
    paths: Vec<Path>,
    tx: mpsc::UnboundedSender<Result<Vec<DataPoint>>>,
}

// ===== impl MemoryTarget =====

impl MemoryTarget {
    pub fn new(name: impl Into<String>) -> MemoryTarget {
        MemoryTarget {
            name: name.into(),
            inner: Default::default(),
        }
    }

    // Sets the value of a leaf, timestamped with the current time.
    pub fn update(&self, path: Path, value: impl Into<TypedValue>) {
        self.update_at(path, value, Utc::now());
    }

    // Sets the value of a leaf with an explicit timestamp.
    pub fn update_at(
        &self,
        path: Path,
        value: impl Into<TypedValue>,
        timestamp: DateTime<Utc>,
    ) {
        let dp = DataPoint::update(path, value.into(), timestamp);
        self.apply(vec![dp]);
    }

    // Sets the values of several leaves in a single notification.
    pub fn update_many(&self, updates: Vec<(Path, TypedValue)>) {
        let now = Utc::now();
        let dps = updates
            .into_iter()
            .map(|(path, value)| DataPoint::update(path, value, now))
            .collect();
        self.apply(dps);
    }

    // Deletes all leaves at or below the given path in a single
    // notification.
    pub fn delete(&self, path: &Path) {
        let now = Utc::now();
        let mut inner = self.inner.lock().unwrap();
        let removed = inner
            .leaves
            .keys()
            .filter(|leaf| path.matches(leaf))
            .cloned()
            .collect::<Vec<_>>();
        let dps = removed
            .into_iter()
            .map(|leaf| {
                inner.leaves.remove(&leaf);
                DataPoint::delete(leaf, now)
            })
            .collect::<Vec<_>>();
        debug!(target = %self.name, %path, count = dps.len(), "delete");
        publish(&mut inner, dps);
    }

    // Terminates all active subscriptions with an error.
    pub fn close_subscriptions(&self) {
        let mut inner = self.inner.lock().unwrap();
        for sub in inner.subscribers.drain(..) {
            let _ = sub.tx.unbounded_send(Err(Error::SubscriptionClosed));
        }
    }

    // Returns the number of subscriptions still alive.
    pub fn subscriber_count(&self) -> usize {
        let mut inner = self.inner.lock().unwrap();
        inner.subscribers.retain(|sub| !sub.tx.is_closed());
        inner.subscribers.len()
    }

    fn apply(&self, dps: Vec<DataPoint>) {
        let mut inner = self.inner.lock().unwrap();
        for dp in &dps {
            trace!(target = %self.name, path = %dp.path, "update");
            inner.leaves.insert(dp.path.clone(), dp.clone());
        }
        publish(&mut inner, dps);
    }

    fn matching(&self, inner: &Inner, paths: &[Path]) -> Vec<DataPoint> {
        let now = Utc::now();
        inner
            .leaves
            .iter()
            .filter(|(leaf, _)| paths.iter().any(|path| path.matches(leaf)))
            .map(|(_, dp)| DataPoint {
                recv_timestamp: now,
                ..dp.clone()
            })
            .collect()
    }
}

#[async_trait]
impl Target for MemoryTarget {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, paths: &[Path]) -> Result<Vec<DataPoint>> {
        if paths.is_empty() {
            return Err(Error::InvalidRequest("no paths requested".to_owned()));
        }
        let inner = self.inner.lock().unwrap();
        Ok(self.matching(&inner, paths))
    }

    async fn subscribe(&self, paths: &[Path]) -> Result<Subscription> {
        if paths.is_empty() {
            return Err(Error::InvalidRequest("no paths requested".to_owned()));
        }
        let mut inner = self.inner.lock().unwrap();
        let (tx, rx) = mpsc::unbounded();

        // Send the initial state followed by the sync marker.
        let initial = self.matching(&inner, paths);
        if !initial.is_empty() {
            let _ = tx.unbounded_send(Ok(initial));
        }
        let _ = tx.unbounded_send(Ok(vec![DataPoint::sync_marker(
            paths[0].clone(),
        )]));

        inner.subscribers.push(Subscriber {
            paths: paths.to_vec(),
            tx,
        });
        Ok(Subscription::new(rx.boxed()))
    }
}

// ===== helper functions =====

// Relays the given datapoints to all subscribers interested in them, pruning
// subscribers that went away.
fn publish(inner: &mut Inner, dps: Vec<DataPoint>) {
    inner.subscribers.retain(|sub| {
        let matching = dps
            .iter()
            .filter(|dp| sub.paths.iter().any(|path| path.matches(&dp.path)))
            .cloned()
            .collect::<Vec<_>>();
        if matching.is_empty() {
            return !sub.tx.is_closed();
        }
        sub.tx.unbounded_send(Ok(matching)).is_ok()
    });
}
