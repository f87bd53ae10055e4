//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use maplit::hashmap;
use ondatra_ixconfig::{
    Client, ConfigSession, Error, IxiaCfgNode, Ixnetwork, SessionError,
};

use super::{
    EXPORTED_CONF, FILLED_XPATH_CONF, MISSING_XPATH_CONF, has_xpaths, parse,
};

// Session recording every request it gets.
#[derive(Debug, Default)]
struct FakeSession {
    config: String,
    ids: HashMap<String, String>,
    fail_import: bool,
    imported: Mutex<Vec<(String, bool)>>,
    queried: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl ConfigSession for FakeSession {
    async fn export(&self) -> Result<String, SessionError> {
        Ok(self.config.clone())
    }

    async fn import(
        &self,
        cfg: String,
        overwrite: bool,
    ) -> Result<(), SessionError> {
        if self.fail_import {
            return Err(SessionError::Import("rejected".to_owned()));
        }
        self.imported.lock().unwrap().push((cfg, overwrite));
        Ok(())
    }

    async fn query_ids(
        &self,
        xpaths: Vec<String>,
    ) -> Result<HashMap<String, String>, SessionError> {
        self.queried.lock().unwrap().push(xpaths.clone());
        Ok(xpaths
            .into_iter()
            .filter_map(|xpath| {
                self.ids.get(&xpath).map(|id| (xpath, id.clone()))
            })
            .collect())
    }
}

fn session_ids() -> HashMap<String, String> {
    hashmap! {
        "/topology[1]".to_owned() => "/api/v1/topology/1".to_owned(),
        "/topology[1]/deviceGroup[1]".to_owned() =>
            "/api/v1/topology/1/deviceGroup/1".to_owned(),
    }
}

#[tokio::test]
async fn test_export_config() {
    let session = FakeSession {
        config: FILLED_XPATH_CONF.to_owned(),
        ..Default::default()
    };
    let client = Client::new(session);
    let cfg = client.export_config().await.unwrap();
    assert_eq!(cfg, parse(FILLED_XPATH_CONF));
}

#[tokio::test]
async fn test_export_config_invalid() {
    let session = FakeSession {
        config: "{\"vport\": 1}".to_owned(),
        ..Default::default()
    };
    let client = Client::new(session);
    let error = client.export_config().await.unwrap_err();
    assert!(matches!(
        &error,
        Error::Unmarshal(cfg, _) if cfg == "{\"vport\": 1}"
    ));
    assert!(error.to_string().contains("{\\\"vport\\\": 1}"));
}

#[tokio::test]
async fn test_import_config() {
    let mut client = Client::new(FakeSession::default());
    assert!(client.last_imported_config().is_none());

    let mut cfg = parse(MISSING_XPATH_CONF);
    client
        .import_config(&mut cfg, |cfg| &cfg.topology[0], false)
        .await
        .unwrap();

    // XPaths were updated in place before marshaling the selected node.
    assert_eq!(cfg, parse(FILLED_XPATH_CONF));
    let imported = client.session().imported.lock().unwrap().clone();
    assert_eq!(imported.len(), 1);
    let (json, overwrite) = &imported[0];
    assert!(!*overwrite);
    let json: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(json["xpath"], "/topology[1]");
    assert_eq!(json["name"], "Topology 1");

    // The last imported config is a fresh copy without XPaths.
    let last = client.last_imported_config().unwrap();
    assert!(!has_xpaths(&serde_json::to_value(&last).unwrap()));
    let mut last = last;
    last.update_all_xpaths();
    assert_eq!(last, cfg);
}

#[tokio::test]
async fn test_import_config_whole() {
    let mut client = Client::new(FakeSession::default());
    let mut cfg = parse(FILLED_XPATH_CONF);
    client
        .import_config(&mut cfg, |cfg| cfg, true)
        .await
        .unwrap();
    let imported = client.session().imported.lock().unwrap().clone();
    let (json, overwrite) = &imported[0];
    assert!(*overwrite);
    assert_eq!(parse(json), cfg);
}

#[tokio::test]
async fn test_reimport_exported_config() {
    let session = FakeSession {
        config: EXPORTED_CONF.to_owned(),
        ..Default::default()
    };
    let mut client = Client::new(session);
    let mut cfg = client.export_config().await.unwrap();
    client
        .import_config(&mut cfg, |cfg| cfg, true)
        .await
        .unwrap();

    // Everything exported is pushed back, including what isn't modelled.
    let imported = client.session().imported.lock().unwrap().clone();
    let (json, _) = &imported[0];
    let json: serde_json::Value = serde_json::from_str(json).unwrap();
    let want: serde_json::Value = serde_json::from_str(EXPORTED_CONF).unwrap();
    assert_eq!(json, want);
}

#[tokio::test]
async fn test_import_config_failure() {
    let session = FakeSession {
        fail_import: true,
        ..Default::default()
    };
    let mut client = Client::new(session);
    let mut cfg = parse(FILLED_XPATH_CONF);
    let error = client
        .import_config(&mut cfg, |cfg| cfg, true)
        .await
        .unwrap_err();
    assert!(matches!(error, Error::Session(SessionError::Import(_))));
    assert!(client.last_imported_config().is_none());
}

#[tokio::test]
async fn test_node_ids() {
    let session = FakeSession {
        ids: session_ids(),
        ..Default::default()
    };
    let mut client = Client::new(session);

    // Nodes without XPaths were never imported.
    let cfg = Ixnetwork {
        topology: vec![Default::default()],
        ..Default::default()
    };
    let error = client.node_id(&cfg.topology[0]).unwrap_err();
    assert!(matches!(error, Error::NotImported("Topology")));

    let mut cfg = parse(FILLED_XPATH_CONF);
    client
        .import_config(&mut cfg, |cfg| cfg, true)
        .await
        .unwrap();
    let error = client.node_id(&cfg.topology[0]).unwrap_err();
    assert!(matches!(
        error,
        Error::NoId(ref xpath) if xpath == "/topology[1]"
    ));

    // Work on a copy, as returned by the client.
    let mut cfg = client.last_imported_config().unwrap();
    client
        .update_ids(&mut cfg, |cfg| {
            vec![
                &cfg.topology[0] as &dyn IxiaCfgNode,
                &cfg.topology[0].device_group[0],
                &cfg.vport[0],
            ]
        })
        .await
        .unwrap();
    assert_eq!(
        client.node_id(&cfg.topology[0]).unwrap(),
        "/api/v1/topology/1"
    );
    assert_eq!(
        client.node_id(&cfg.topology[0].device_group[0]).unwrap(),
        "/api/v1/topology/1/deviceGroup/1"
    );
    assert!(matches!(
        client.node_id(&cfg.vport[0]),
        Err(Error::NoId(_))
    ));

    // Known IDs are not queried again.
    client
        .update_ids(&mut cfg, |cfg| {
            vec![
                &cfg.topology[0] as &dyn IxiaCfgNode,
                &cfg.vport[0],
            ]
        })
        .await
        .unwrap();
    client
        .update_ids(&mut cfg, |cfg| vec![&cfg.topology[0] as &dyn IxiaCfgNode])
        .await
        .unwrap();
    let queried = client.session().queried.lock().unwrap().clone();
    assert_eq!(
        queried,
        vec![
            vec![
                "/topology[1]".to_owned(),
                "/topology[1]/deviceGroup[1]".to_owned(),
                "/vport[1]".to_owned(),
            ],
            vec!["/vport[1]".to_owned()],
        ]
    );

    // A new import resets the recorded IDs.
    let mut cfg = client.last_imported_config().unwrap();
    client
        .import_config(&mut cfg, |cfg| cfg, true)
        .await
        .unwrap();
    assert!(matches!(
        client.node_id(&cfg.topology[0]),
        Err(Error::NoId(_))
    ));
}
