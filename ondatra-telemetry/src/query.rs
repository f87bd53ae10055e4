//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ondatra_gnmi::path::WILDCARD;
use ondatra_gnmi::{DataPoint, Path, PathElem, Subscription};
use ondatra_utils::task::Task;
use tracing::{Instrument, debug, debug_span, warn};

use crate::batch::Batch;
use crate::dut::Dut;
use crate::error::{Error, Result};
use crate::qualified::{Metadata, Qualified};
use crate::schema::{ListEntry, SchemaNode};
use crate::watcher::{Collection, WatchOutcome, Watcher};

// Value type returned by a telemetry query.
pub trait QueryValue: Clone + Debug + PartialEq + Send + Sync + 'static {}

// Telemetry accessor for a single path without wildcards.
//
// `S` is the schema node rebuilt from the received datapoints, and `T` the
// value extracted from it.
#[derive(Clone, Debug)]
pub struct Query<S, T> {
    inner: QueryInner<S, T>,
}

// Telemetry accessor for a path containing list key wildcards.
#[derive(Clone, Debug)]
pub struct QueryAny<S, T> {
    inner: QueryInner<S, T>,
}

#[derive(Clone, Debug)]
struct QueryInner<S, T> {
    dut: Dut,
    // YANG module the queried data belongs to.
    module: &'static str,
    path: Path,
    // Number of path elements above the schema node `S`.
    node_depth: usize,
    extract: fn(&S) -> Option<T>,
    // Value reported when the leaf was never received.
    default: Option<fn() -> T>,
}

// ===== impl QueryValue =====

impl<T> QueryValue for T where
    T: Clone + Debug + PartialEq + Send + Sync + 'static
{
}

// ===== impl Query =====

impl<S, T> Query<S, T>
where
    S: SchemaNode,
    T: QueryValue,
{
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    // Path of the queried node, prefixed by its YANG module and without list
    // keys.
    pub fn schema_path(&self) -> String {
        self.inner.schema_path()
    }

    // Fetches the current value, or `None` if the device has no data at this
    // path.
    pub async fn lookup(&self) -> Result<Option<Qualified<T>>> {
        let inner = &self.inner;
        let dps = inner.fetch(std::slice::from_ref(&inner.path)).await?;
        let mut node = S::default();
        match unmarshal_node(&mut node, &dps, inner.node_depth, &inner.path) {
            Some(md) => Ok(Some(inner.qualify(md, &node))),
            None => Ok(inner.default.map(|default| {
                let md = Metadata::unset(inner.path.clone());
                Qualified::with_value(md, default())
            })),
        }
    }

    // Fetches the current value, failing if it isn't present.
    pub async fn get(&self) -> Result<T> {
        self.lookup()
            .await?
            .and_then(Qualified::into_value)
            .ok_or_else(|| Error::NotPresent(self.schema_path()))
    }

    // Starts a subscription delivering every update to `predicate`, until it
    // returns `true` or the timeout expires.
    pub async fn watch<F>(
        &self,
        timeout: Duration,
        predicate: F,
    ) -> Result<Watcher<T>>
    where
        F: FnMut(&Qualified<T>) -> bool + Send + 'static,
    {
        let inner = &self.inner;
        let subscription = inner.subscribe(vec![inner.path.clone()]).await?;
        let task = spawn_watch(
            subscription,
            inner.path.clone(),
            inner.node_depth,
            inner.extract,
            timeout,
            predicate,
        );
        Ok(Watcher::new(inner.schema_path(), task))
    }

    // Waits until the value equals `value`, returning the matching update.
    pub async fn wait_for(
        &self,
        timeout: Duration,
        value: T,
    ) -> Result<Qualified<T>> {
        let want = value.clone();
        let watcher = self
            .watch(timeout, move |qv| qv.value() == Some(&want))
            .await?;
        match watcher.wait().await? {
            (Some(qv), true) => Ok(qv),
            (last, _) => Err(Error::AwaitFailed {
                path: self.schema_path(),
                want: format!("{value:?}"),
                last: match last.as_ref().and_then(Qualified::value) {
                    Some(last) => format!("{last:?}"),
                    None => "no value".to_owned(),
                },
            }),
        }
    }

    // Collects every update received until `duration` elapses.
    pub async fn collect(&self, duration: Duration) -> Result<Collection<T>> {
        let values = Arc::new(Mutex::new(vec![]));
        let values_child = values.clone();
        let watcher = self
            .watch(duration, move |qv| {
                values_child.lock().unwrap().push(qv.clone());
                false
            })
            .await?;
        Ok(Collection::new(watcher, values))
    }

    // Adds this path to a batch.
    pub fn batch(&self, batch: &mut Batch) -> Result<()> {
        batch.add(&self.inner.dut, self.inner.path.clone())
    }
}

// Builders of the accessors below a schema node.
impl<S> Query<S, S>
where
    S: SchemaNode,
{
    pub(crate) fn root(dut: Dut) -> Query<S, S> {
        Query {
            inner: QueryInner::container(dut, "", Path::root()),
        }
    }

    #[must_use]
    pub(crate) fn in_module(mut self, module: &'static str) -> Query<S, S> {
        self.inner.module = module;
        self
    }

    pub(crate) fn leaf<T: QueryValue>(
        &self,
        path: &str,
        extract: fn(&S) -> Option<T>,
        default: Option<fn() -> T>,
    ) -> Query<S, T> {
        Query {
            inner: self.inner.leaf(path, extract, default),
        }
    }

    pub(crate) fn container<C: SchemaNode>(&self, path: &str) -> Query<C, C> {
        Query {
            inner: self.inner.container_child(path),
        }
    }

    pub(crate) fn entry<C: ListEntry>(
        &self,
        path: &str,
        list: &str,
        key: String,
    ) -> Query<C, C> {
        Query {
            inner: self.inner.entry::<C>(path, list, key),
        }
    }

    pub(crate) fn entry_any<C: ListEntry>(
        &self,
        path: &str,
        list: &str,
    ) -> QueryAny<C, C> {
        QueryAny {
            inner: self.inner.entry::<C>(path, list, WILDCARD.to_owned()),
        }
    }
}

// ===== impl QueryAny =====

impl<S, T> QueryAny<S, T>
where
    S: SchemaNode,
    T: QueryValue,
{
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    pub fn schema_path(&self) -> String {
        self.inner.schema_path()
    }

    // Fetches the current values of all matching paths, one per concrete
    // instance of the queried node.
    pub async fn lookup(&self) -> Result<Vec<Qualified<T>>> {
        let inner = &self.inner;
        let dps = inner.fetch(std::slice::from_ref(&inner.path)).await?;
        let groups = ondatra_gnmi::bundle_datapoints(dps, inner.path.len());
        let values = groups
            .into_iter()
            .filter_map(|(prefix, dps)| {
                let mut node = S::default();
                unmarshal_node(&mut node, &dps, inner.node_depth, &prefix)
                    .map(|md| inner.qualify(md, &node))
            })
            .collect();
        Ok(values)
    }

    // Fetches the values present at all matching paths.
    pub async fn get(&self) -> Result<Vec<T>> {
        let values = self
            .lookup()
            .await?
            .into_iter()
            .filter_map(Qualified::into_value)
            .collect();
        Ok(values)
    }

    // Starts a subscription delivering every update of every matching path
    // to `predicate`, until it returns `true` or the timeout expires.
    pub async fn watch<F>(
        &self,
        timeout: Duration,
        predicate: F,
    ) -> Result<Watcher<T>>
    where
        F: FnMut(&Qualified<T>) -> bool + Send + 'static,
    {
        let inner = &self.inner;
        let subscription = inner.subscribe(vec![inner.path.clone()]).await?;
        let task = spawn_watch_any(
            subscription,
            inner.path.clone(),
            inner.node_depth,
            inner.extract,
            timeout,
            predicate,
        );
        Ok(Watcher::new(inner.schema_path(), task))
    }

    pub async fn collect(&self, duration: Duration) -> Result<Collection<T>> {
        let values = Arc::new(Mutex::new(vec![]));
        let values_child = values.clone();
        let watcher = self
            .watch(duration, move |qv| {
                values_child.lock().unwrap().push(qv.clone());
                false
            })
            .await?;
        Ok(Collection::new(watcher, values))
    }

    pub fn batch(&self, batch: &mut Batch) -> Result<()> {
        batch.add(&self.inner.dut, self.inner.path.clone())
    }
}

impl<S> QueryAny<S, S>
where
    S: SchemaNode,
{
    #[must_use]
    pub(crate) fn in_module(mut self, module: &'static str) -> QueryAny<S, S> {
        self.inner.module = module;
        self
    }

    pub(crate) fn leaf<T: QueryValue>(
        &self,
        path: &str,
        extract: fn(&S) -> Option<T>,
        default: Option<fn() -> T>,
    ) -> QueryAny<S, T> {
        QueryAny {
            inner: self.inner.leaf(path, extract, default),
        }
    }

    pub(crate) fn container<C: SchemaNode>(
        &self,
        path: &str,
    ) -> QueryAny<C, C> {
        QueryAny {
            inner: self.inner.container_child(path),
        }
    }

    pub(crate) fn entry<C: ListEntry>(
        &self,
        path: &str,
        list: &str,
        key: String,
    ) -> QueryAny<C, C> {
        QueryAny {
            inner: self.inner.entry::<C>(path, list, key),
        }
    }

    pub(crate) fn entry_any<C: ListEntry>(
        &self,
        path: &str,
        list: &str,
    ) -> QueryAny<C, C> {
        self.entry(path, list, WILDCARD.to_owned())
    }
}

// ===== impl QueryInner =====

impl<S> QueryInner<S, S>
where
    S: SchemaNode,
{
    fn container(dut: Dut, module: &'static str, path: Path) -> Self {
        QueryInner {
            dut,
            module,
            node_depth: path.len(),
            path,
            extract: |node| Some(node.clone()),
            default: None,
        }
    }

    fn leaf<T: QueryValue>(
        &self,
        path: &str,
        extract: fn(&S) -> Option<T>,
        default: Option<fn() -> T>,
    ) -> QueryInner<S, T> {
        QueryInner {
            dut: self.dut.clone(),
            module: self.module,
            path: self.path.extend(&split_path(path)),
            node_depth: self.node_depth,
            extract,
            default,
        }
    }

    fn container_child<C: SchemaNode>(&self, path: &str) -> QueryInner<C, C> {
        let path = self.path.extend(&split_path(path));
        QueryInner::container(self.dut.clone(), self.module, path)
    }

    fn entry<C: ListEntry>(
        &self,
        path: &str,
        list: &str,
        key: String,
    ) -> QueryInner<C, C> {
        let path = self
            .path
            .extend(&split_path(path))
            .child(PathElem::new(list).with_key(C::KEY, key));
        QueryInner::container(self.dut.clone(), self.module, path)
    }
}

impl<S, T> QueryInner<S, T>
where
    S: SchemaNode,
    T: QueryValue,
{
    fn schema_path(&self) -> String {
        let path = self.path.schema_path();
        match self.module {
            "" => path,
            module => format!("/{module}{path}"),
        }
    }

    fn qualify(&self, md: Metadata, node: &S) -> Qualified<T> {
        qualify(md, (self.extract)(node))
    }

    async fn fetch(&self, paths: &[Path]) -> Result<Vec<DataPoint>> {
        let target = self.dut.target();
        debug!(dut = %target.name(), path = %self.path, "lookup");
        let dps = target.get(paths).await?;
        Ok(dps)
    }

    async fn subscribe(&self, paths: Vec<Path>) -> Result<Subscription> {
        let target = self.dut.target();
        debug!(dut = %target.name(), path = %self.path, "subscribe");
        let subscription = target.subscribe(&paths).await?;
        Ok(subscription)
    }
}

// ===== helper functions =====

fn split_path(path: &str) -> Vec<&str> {
    path.split('/').filter(|elem| !elem.is_empty()).collect()
}

fn qualify<T>(md: Metadata, value: Option<T>) -> Qualified<T> {
    match value {
        Some(value) => Qualified::with_value(md, value),
        None => Qualified::new(md),
    }
}

// Applies the given datapoints to a schema node rooted `node_depth` elements
// below the root.
//
// Returns the metadata of the update, or `None` if no datapoint could be
// applied. Datapoints that fail to decode are logged and skipped.
pub(crate) fn unmarshal_node<S: SchemaNode>(
    node: &mut S,
    dps: &[DataPoint],
    node_depth: usize,
    path: &Path,
) -> Option<Metadata> {
    let mut md: Option<Metadata> = None;
    for dp in dps.iter().filter(|dp| !dp.sync) {
        let Some(rel_path) = dp.path.elem.get(node_depth..) else {
            warn!(path = %dp.path, %node_depth, "datapoint above schema node");
            continue;
        };
        if let Err(error) = node.unmarshal(rel_path, dp.value.as_ref()) {
            error.log(&dp.path);
            continue;
        }
        md.get_or_insert_with(|| Metadata::unset(path.clone()))
            .observe(dp.timestamp, dp.recv_timestamp);
    }
    md
}

// Runs a watch over a single concrete path.
pub(crate) fn spawn_watch<S, T, F>(
    subscription: Subscription,
    path: Path,
    node_depth: usize,
    extract: fn(&S) -> Option<T>,
    timeout: Duration,
    predicate: F,
) -> Task<Result<WatchOutcome<T>>>
where
    S: SchemaNode,
    T: QueryValue,
    F: FnMut(&Qualified<T>) -> bool + Send + 'static,
{
    let span = debug_span!("watch", %path);
    Task::spawn(
        watch_loop(subscription, path, node_depth, extract, timeout, predicate)
            .instrument(span),
    )
}

async fn watch_loop<S, T, F>(
    mut subscription: Subscription,
    path: Path,
    node_depth: usize,
    extract: fn(&S) -> Option<T>,
    timeout: Duration,
    mut predicate: F,
) -> Result<WatchOutcome<T>>
where
    S: SchemaNode,
    T: QueryValue,
    F: FnMut(&Qualified<T>) -> bool + Send + 'static,
{
    let mut node = S::default();
    let mut last = None;
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => {
                debug!("timeout expired");
                return Ok((last, false));
            }
            notif = subscription.next() => {
                let dps = next_notification(notif)?;
                let Some(md) =
                    unmarshal_node(&mut node, &dps, node_depth, &path)
                else {
                    continue;
                };
                let qv = qualify(md, extract(&node));
                let done = predicate(&qv);
                last = Some(qv);
                if done {
                    return Ok((last, true));
                }
            }
        }
    }
}

// Runs a watch over a wildcard path, keeping a separate schema node for each
// concrete instance.
fn spawn_watch_any<S, T, F>(
    subscription: Subscription,
    path: Path,
    node_depth: usize,
    extract: fn(&S) -> Option<T>,
    timeout: Duration,
    predicate: F,
) -> Task<Result<WatchOutcome<T>>>
where
    S: SchemaNode,
    T: QueryValue,
    F: FnMut(&Qualified<T>) -> bool + Send + 'static,
{
    let span = debug_span!("watch", %path);
    Task::spawn(
        watch_any_loop(
            subscription,
            path.len(),
            node_depth,
            extract,
            timeout,
            predicate,
        )
        .instrument(span),
    )
}

async fn watch_any_loop<S, T, F>(
    mut subscription: Subscription,
    prefix_len: usize,
    node_depth: usize,
    extract: fn(&S) -> Option<T>,
    timeout: Duration,
    mut predicate: F,
) -> Result<WatchOutcome<T>>
where
    S: SchemaNode,
    T: QueryValue,
    F: FnMut(&Qualified<T>) -> bool + Send + 'static,
{
    let mut nodes: BTreeMap<Path, S> = BTreeMap::new();
    let mut last = None;
    let deadline = tokio::time::sleep(timeout);
    tokio::pin!(deadline);
    loop {
        tokio::select! {
            _ = &mut deadline => {
                debug!("timeout expired");
                return Ok((last, false));
            }
            notif = subscription.next() => {
                let dps = next_notification(notif)?;
                let groups = ondatra_gnmi::bundle_datapoints(dps, prefix_len);
                for (prefix, dps) in groups {
                    let node = nodes.entry(prefix.clone()).or_default();
                    let Some(md) =
                        unmarshal_node(node, &dps, node_depth, &prefix)
                    else {
                        continue;
                    };
                    let qv = qualify(md, extract(node));
                    let done = predicate(&qv);
                    last = Some(qv);
                    if done {
                        return Ok((last, true));
                    }
                }
            }
        }
    }
}

fn next_notification(
    notif: Option<ondatra_gnmi::Result<Vec<DataPoint>>>,
) -> Result<Vec<DataPoint>> {
    match notif {
        Some(Ok(dps)) => Ok(dps),
        Some(Err(error)) => {
            error.log();
            Err(Error::Gnmi(error))
        }
        None => Err(Error::Gnmi(ondatra_gnmi::Error::SubscriptionClosed)),
    }
}
