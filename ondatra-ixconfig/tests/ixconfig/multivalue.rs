//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ondatra_ixconfig::{
    XPath, multivalue_false, multivalue_str_inc_counter, multivalue_str_list,
    multivalue_u32,
};
use serde_json::json;

#[test]
fn test_single_values() {
    assert_eq!(multivalue_u32(1500).unwrap().single(), Some("1500"));
    assert_eq!(multivalue_false().unwrap().single(), Some("false"));
    assert_eq!(
        serde_json::to_value(multivalue_u32(64)).unwrap(),
        json!({"singleValue": {"value": "64"}})
    );
}

#[test]
fn test_counter() {
    let multivalue =
        multivalue_str_inc_counter("10.0.0.1", "0.0.0.1").unwrap();
    assert_eq!(multivalue.single(), None);
    assert_eq!(
        serde_json::to_value(&multivalue).unwrap(),
        json!({
            "counter": {
                "start": "10.0.0.1",
                "step": "0.0.0.1",
                "direction": "increment"
            }
        })
    );
}

#[test]
fn test_value_list() {
    let multivalue = multivalue_str_list(["1", "2"]).unwrap();
    assert_eq!(
        serde_json::to_value(&multivalue).unwrap(),
        json!({"valueList": {"values": ["1", "2"]}})
    );
}

#[test]
fn test_xpath() {
    let root = XPath::root();
    let topology = root.list_elem("topology", 0);
    assert_eq!(topology.as_str(), "/topology[1]");
    assert_eq!(
        topology.list_elem("deviceGroup", 2).as_str(),
        "/topology[1]/deviceGroup[3]"
    );
    assert_eq!(
        topology.multivalue("name").as_str(),
        "/multivalue[@source = '/topology[1] name']"
    );
    assert_eq!(
        serde_json::to_value(&topology).unwrap(),
        json!("/topology[1]")
    );
}
