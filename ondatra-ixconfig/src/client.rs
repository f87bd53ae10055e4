//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::HashMap;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{Instrument, debug, debug_span};

use crate::config::{IxiaCfgNode, Ixnetwork};
use crate::error::{Error, Result, SessionError};

// Config API of an IxNetwork session.
#[async_trait]
pub trait ConfigSession: Send + Sync {
    // Exports the full session config as a JSON string.
    async fn export(&self) -> std::result::Result<String, SessionError>;

    // Imports a JSON config. When `overwrite` is set the existing config is
    // replaced, otherwise the given nodes are updated in place.
    async fn import(
        &self,
        cfg: String,
        overwrite: bool,
    ) -> std::result::Result<(), SessionError>;

    // Resolves the REST IDs of the nodes at the given XPaths.
    async fn query_ids(
        &self,
        xpaths: Vec<String>,
    ) -> std::result::Result<HashMap<String, String>, SessionError>;
}

// JSON config client of an IxNetwork session.
#[derive(Debug)]
pub struct Client<S> {
    session: S,
    last_imported: Option<Ixnetwork>,
    xpath_to_id: HashMap<String, String>,
}

// ===== impl Client =====

impl<S> Client<S>
where
    S: ConfigSession,
{
    pub fn new(session: S) -> Client<S> {
        Client {
            session,
            last_imported: None,
            xpath_to_id: Default::default(),
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    // Returns the REST ID recorded for the given node.
    pub fn node_id(&self, node: &dyn IxiaCfgNode) -> Result<&str> {
        let xpath = node.xpath().ok_or(Error::NotImported(node.kind()))?;
        self.xpath_to_id
            .get(xpath.as_str())
            .map(String::as_str)
            .ok_or_else(|| Error::NoId(xpath.to_string()))
    }

    // Exports the current full config of the session.
    pub async fn export_config(&self) -> Result<Ixnetwork> {
        debug!("exporting config");
        let cfg = self.session.export().await?;
        serde_json::from_str(&cfg).map_err(|error| Error::Unmarshal(cfg, error))
    }

    // Imports the node chosen by `select` from the given config.
    //
    // Every XPath in `cfg` is updated first. With `overwrite` the session
    // config is replaced by the selected node; otherwise only the values at
    // and below it are updated, so list elements can't be removed this way.
    pub async fn import_config<N, F>(
        &mut self,
        cfg: &mut Ixnetwork,
        select: F,
        overwrite: bool,
    ) -> Result<()>
    where
        N: IxiaCfgNode + Serialize + ?Sized,
        F: for<'a> FnOnce(&'a Ixnetwork) -> &'a N,
    {
        self.xpath_to_id.clear();
        cfg.update_all_xpaths();

        let node = select(&*cfg);
        let span = debug_span!("import", kind = node.kind(), overwrite);
        let json = serde_json::to_string(node).map_err(Error::Marshal)?;
        span.in_scope(|| debug!(len = json.len(), "importing config"));
        self.session.import(json, overwrite).instrument(span).await?;

        // Record the config that was pushed.
        self.last_imported = Some(cfg.copy());
        Ok(())
    }

    // Returns a copy of the last config pushed by this client, with its
    // XPaths cleared.
    pub fn last_imported_config(&self) -> Option<Ixnetwork> {
        self.last_imported.as_ref().map(Ixnetwork::copy)
    }

    // Records the REST IDs of the nodes chosen by `select`. Nodes whose ID is
    // already known are not queried again.
    pub async fn update_ids<F>(
        &mut self,
        cfg: &mut Ixnetwork,
        select: F,
    ) -> Result<()>
    where
        F: for<'a> FnOnce(&'a Ixnetwork) -> Vec<&'a dyn IxiaCfgNode>,
    {
        // XPaths are lost when configs are copied around.
        cfg.update_all_xpaths();

        let missing = select(&*cfg)
            .into_iter()
            .filter_map(|node| node.xpath())
            .filter(|xpath| !self.xpath_to_id.contains_key(xpath.as_str()))
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        if missing.is_empty() {
            return Ok(());
        }

        debug!(count = missing.len(), "querying node IDs");
        let ids = self.session.query_ids(missing).await?;
        self.xpath_to_id.extend(ids);
        Ok(())
    }
}
