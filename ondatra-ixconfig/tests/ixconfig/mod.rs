//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

mod client;
mod config;
mod multivalue;

use ondatra_ixconfig::Ixnetwork;

const EXPORTED_CONF: &str = include_str!("testdata/exported_conf.json");
const FILLED_XPATH_CONF: &str = include_str!("testdata/filled_xpath_conf.json");
const MISSING_XPATH_CONF: &str =
    include_str!("testdata/missing_xpath_conf.json");

fn parse(cfg: &str) -> Ixnetwork {
    serde_json::from_str(cfg).unwrap()
}

fn to_value(cfg: &Ixnetwork) -> serde_json::Value {
    serde_json::to_value(cfg).unwrap()
}

// Returns whether any object in the JSON tree has an "xpath" member.
fn has_xpaths(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Object(map) => {
            map.contains_key("xpath") || map.values().any(has_xpaths)
        }
        serde_json::Value::Array(values) => values.iter().any(has_xpaths),
        _ => false,
    }
}
