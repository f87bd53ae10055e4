//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ondatra_ixconfig::{
    IxiaCfgNode, Ixnetwork, Topology, TopologyDeviceGroup, TopologyEthernet,
    XPath, multivalue_str,
};

use super::{
    EXPORTED_CONF, FILLED_XPATH_CONF, MISSING_XPATH_CONF, has_xpaths, parse,
    to_value,
};

#[test]
fn test_round_trip() {
    let cfg = parse(FILLED_XPATH_CONF);
    let want: serde_json::Value =
        serde_json::from_str(FILLED_XPATH_CONF).unwrap();
    assert_eq!(to_value(&cfg), want);
}

#[test]
fn test_update_xpaths_idempotent() {
    let mut cfg = parse(FILLED_XPATH_CONF);
    cfg.update_all_xpaths();
    let want: serde_json::Value =
        serde_json::from_str(FILLED_XPATH_CONF).unwrap();
    assert_eq!(to_value(&cfg), want);
}

#[test]
fn test_fill_missing_xpaths() {
    let mut cfg = parse(MISSING_XPATH_CONF);
    assert_ne!(cfg, parse(FILLED_XPATH_CONF));
    cfg.update_all_xpaths();
    let want: serde_json::Value =
        serde_json::from_str(FILLED_XPATH_CONF).unwrap();
    assert_eq!(to_value(&cfg), want);
}

#[test]
fn test_xpaths_of_new_nodes() {
    let mut cfg = Ixnetwork {
        topology: vec![
            Topology::default(),
            Topology {
                device_group: vec![
                    TopologyDeviceGroup::default(),
                    TopologyDeviceGroup {
                        ethernet: vec![TopologyEthernet {
                            mac: multivalue_str("02:00:00:00:00:01"),
                            ..Default::default()
                        }],
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
        ],
        ..Default::default()
    };
    cfg.update_all_xpaths();

    assert_eq!(cfg.xpath(), Some(&XPath::root()));
    let topology = &cfg.topology[1];
    assert_eq!(topology.xpath().unwrap().as_str(), "/topology[2]");
    let ethernet = &topology.device_group[1].ethernet[0];
    assert_eq!(
        ethernet.xpath().unwrap().as_str(),
        "/topology[2]/deviceGroup[2]/ethernet[1]"
    );
    let mac = ethernet.mac.as_ref().unwrap();
    assert_eq!(
        mac.xpath.as_ref().unwrap().as_str(),
        "/multivalue[@source = '/topology[2]/deviceGroup[2]/ethernet[1] mac']"
    );
    assert_eq!(
        mac.single_value.as_ref().unwrap().xpath.as_ref().unwrap().as_str(),
        "/multivalue[@source = '/topology[2]/deviceGroup[2]/ethernet[1] mac']\
         /singleValue"
    );
    assert_eq!(mac.single(), Some("02:00:00:00:00:01"));
}

#[test]
fn test_copy_clears_xpaths() {
    let cfg = parse(FILLED_XPATH_CONF);
    let copy = cfg.copy();
    assert!(has_xpaths(&to_value(&cfg)));
    assert!(!has_xpaths(&to_value(&copy)));

    // The copy is otherwise identical.
    let mut copy = copy;
    copy.update_all_xpaths();
    assert_eq!(copy, cfg);
}

#[test]
fn test_flattened_route_attrs() {
    let cfg = parse(FILLED_XPATH_CONF);
    let pool = &cfg.topology[0].device_group[0].network_group[0]
        .ipv4_prefix_pools[0];
    let route = &pool.bgp_ip_route_property[0];
    assert_eq!(route.kind(), "TopologyBgpIpRouteProperty");
    assert_eq!(route.attrs.no_of_communities, Some(1));
    assert_eq!(route.attrs.no_of_large_communities, Some(0));
    assert_eq!(route.attrs.origin.as_ref().unwrap().single(), Some("igp"));
    let segment = &route.attrs.bgp_as_path_segment_list[0];
    assert_eq!(
        segment.xpath().unwrap().as_str(),
        "/topology[1]/deviceGroup[1]/networkGroup[1]/ipv4PrefixPools[1]\
         /bgpIPRouteProperty[1]/bgpAsPathSegmentList[1]"
    );
}

#[test]
fn test_unmodelled_round_trip() {
    let want: serde_json::Value = serde_json::from_str(EXPORTED_CONF).unwrap();
    let mut cfg = parse(EXPORTED_CONF);
    assert_eq!(to_value(&cfg), want);

    cfg.update_all_xpaths();
    assert_eq!(to_value(&cfg), want);

    let vport = &cfg.vport[0];
    assert_eq!(vport.name.as_deref(), Some("port1"));
    assert_eq!(vport.extra["rxMode"], "capture");
    assert!(cfg.extra.contains_key("globals"));

    // Unmodelled route attributes stay with the route property.
    let route = &cfg.topology[0].device_group[0].network_group[0]
        .ipv4_prefix_pools[0]
        .bgp_ip_route_property[0];
    assert_eq!(route.attrs.no_of_communities, Some(1));
    assert_eq!(route.attrs.bgp_communities_list.len(), 1);
    assert!(route.extra.contains_key("enableAggregatorId"));
    assert!(!route.extra.contains_key("noOfCommunities"));
}

#[test]
fn test_copy_clears_unmodelled_xpaths() {
    let cfg = parse(EXPORTED_CONF);
    let copy = cfg.copy();
    let value = to_value(&copy);
    assert!(!has_xpaths(&value));
    let preferences = &value["globals"]["preferences"];
    assert_eq!(preferences["connectPortsOnLoadConfig"], true);
    let l1_config = &value["vport"][0]["l1Config"];
    assert_eq!(l1_config["currentType"], "novusHundredGigLan");
    let enabled = &value["topology"][0]["deviceGroup"][0]["enabled"];
    assert_eq!(enabled["pattern"], "singleValue");
    assert_eq!(enabled["singleValue"]["value"], "true");
}
