//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::BoxStream;

use crate::datapoint::DataPoint;
use crate::error::Result;
use crate::path::Path;

/// Runtime used to query a device under test.
///
/// Implementations own the transport, subscription lifecycle and
/// cancellation. Dropping a [`Subscription`] must cancel it.
#[async_trait]
pub trait Target: std::fmt::Debug + Send + Sync {
    // Name of the device under test.
    fn name(&self) -> &str;

    // Fetches the current values at the given paths with a `ONCE`
    // subscription.
    async fn get(&self, paths: &[Path]) -> Result<Vec<DataPoint>>;

    // Starts a `STREAM` subscription to the given paths.
    async fn subscribe(&self, paths: &[Path]) -> Result<Subscription>;
}

// Stream of notifications of a `STREAM` subscription. Each item groups the
// datapoints of a single notification.
pub struct Subscription {
    stream: BoxStream<'static, Result<Vec<DataPoint>>>,
}

// ===== impl Subscription =====

impl Subscription {
    pub fn new(stream: BoxStream<'static, Result<Vec<DataPoint>>>) -> Self {
        Subscription { stream }
    }

    // Waits for the next notification. Returns `None` once the target closed
    // the subscription.
    pub async fn next(&mut self) -> Option<Result<Vec<DataPoint>>> {
        self.stream.next().await
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
