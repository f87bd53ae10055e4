//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ondatra_ate::topology::{
    AsPathSegment, AsPathSegmentType, AsnSetMode, BgpAttributes, BgpCommunities,
    BgpOrigin, ColorCoBits, ColorCommunity, EthAttributes, ExtendedCommunity,
    ImportedBgpRoutes, IpRange, IpReachability, Network, RouteOrigin,
    RouteTableFormat, StringIncRange,
};
use ondatra_ate::{Error, IxAte};
use ondatra_ixconfig::{Multivalue, TopologyNetworkGroup};
use ondatra_utils::ip::AddressFamily;

use super::interface;

fn single(multivalue: &Option<Multivalue>) -> Option<&str> {
    multivalue.as_ref()?.single()
}

fn bgp_attributes() -> BgpAttributes {
    BgpAttributes {
        active: true,
        origin: BgpOrigin::Egp,
        local_preference: 150,
        asn_set_mode: AsnSetMode::DoNotIncludeLocalAs,
        ..Default::default()
    }
}

fn ipv4_range(cidr: &str) -> Option<IpRange> {
    Some(IpRange {
        address_cidr: cidr.to_owned(),
        count: 4,
    })
}

fn ipv6_range(cidr: &str) -> Option<IpRange> {
    Some(IpRange {
        address_cidr: cidr.to_owned(),
        count: 8,
    })
}

fn add_networks(networks: Vec<Network>) -> Result<IxAte, Error> {
    let mut ate = IxAte::new();
    let ifc = interface(networks);
    ate.add_interface(&ifc)?;
    ate.add_networks(&ifc)?;
    Ok(ate)
}

fn network_group<'a>(ate: &'a IxAte, name: &str) -> &'a TopologyNetworkGroup {
    ate.network_group("ifc1", name).unwrap()
}

#[test]
fn test_mac_pool() {
    let ate = add_networks(vec![Network {
        name: "net1".to_owned(),
        eth: Some(EthAttributes {
            mac_address: "02:00:00:00:00:10".to_owned(),
            count: 5,
            vlan_id: 0,
        }),
        ..Default::default()
    }])
    .unwrap();
    let ng = network_group(&ate, "net1");
    assert_eq!(ng.name.as_deref(), Some("net1"));
    let pool = &ng.mac_pools[0];
    assert_eq!(single(&pool.mac), Some("02:00:00:00:00:10"));
    assert_eq!(single(&pool.number_of_addresses_asy), Some("5"));
    assert_eq!(single(&pool.enable_vlans), Some("false"));
    assert_eq!(single(&pool.vlan[0].vlan_id), Some("0"));
    assert!(ng.ipv4_prefix_pools.is_empty());
    assert!(ng.ipv6_prefix_pools.is_empty());
}

#[test]
fn test_isis_route_property() {
    let ate = add_networks(vec![Network {
        name: "net1".to_owned(),
        ipv4: ipv4_range("198.51.100.1/24"),
        isis: Some(IpReachability {
            route_origin: RouteOrigin::External,
            metric: 20,
            algorithm: 128,
            enable_sid_index_label: true,
            sid_index_label: 7,
            flag_no_php: true,
            ..Default::default()
        }),
        ..Default::default()
    }])
    .unwrap();
    let pool = &network_group(&ate, "net1").ipv4_prefix_pools[0];
    // Host bits are kept.
    assert_eq!(single(&pool.network_address), Some("198.51.100.1"));
    assert_eq!(single(&pool.prefix_length), Some("24"));
    assert_eq!(single(&pool.number_of_addresses_asy), Some("4"));
    assert!(pool.bgp_ip_route_property.is_empty());

    let irp = &pool.isis_l3_route_property[0];
    assert_eq!(single(&irp.route_origin), Some("external"));
    assert_eq!(single(&irp.metric), Some("20"));
    assert_eq!(single(&irp.algorithm), Some("128"));
    assert_eq!(single(&irp.configure_sid_index_label), Some("true"));
    assert_eq!(single(&irp.sid_index_label), Some("7"));
    assert_eq!(single(&irp.p_flag), Some("true"));
    assert_eq!(single(&irp.n_flag), Some("false"));
}

#[test]
fn test_bgp_v4_route_property() {
    let ate = add_networks(vec![Network {
        name: "net1".to_owned(),
        ipv4: ipv4_range("198.51.100.0/24"),
        bgp_attributes: Some(BgpAttributes {
            next_hop_address: Some("192.0.2.5".to_owned()),
            communities: Some(BgpCommunities {
                no_advertise: true,
                llgr_stale: true,
                private_communities: vec!["65000:1".to_owned()],
                ..Default::default()
            }),
            extended_communities: vec![ExtendedCommunity::Color(
                ColorCommunity {
                    co_bits: ColorCoBits::Bits10,
                    reserved_bits: 0,
                    value: 42,
                },
            )],
            as_path_segments: vec![AsPathSegment {
                r#type: AsPathSegmentType::AsSetConfederation,
                asns: vec![65100],
            }],
            originator_id: Some(StringIncRange {
                start: "10.0.0.1".to_owned(),
                step: "0.0.0.1".to_owned(),
            }),
            cluster_ids: vec!["10.1.1.1".to_owned(), "10.1.1.2".to_owned()],
            ..bgp_attributes()
        }),
        ..Default::default()
    }])
    .unwrap();
    let brp = &network_group(&ate, "net1").ipv4_prefix_pools[0]
        .bgp_ip_route_property[0];
    assert_eq!(single(&brp.active), Some("true"));
    assert_eq!(single(&brp.attrs.next_hop_type), Some("manual"));
    assert_eq!(single(&brp.ipv4_next_hop), Some("192.0.2.5"));
    assert_eq!(single(&brp.attrs.origin), Some("egp"));
    assert_eq!(single(&brp.attrs.local_preference), Some("150"));
    assert_eq!(single(&brp.attrs.as_set_mode), Some("dontincludelocalas"));
    assert_eq!(brp.attrs.no_of_large_communities, Some(0));

    assert_eq!(single(&brp.attrs.enable_community), Some("true"));
    assert_eq!(brp.attrs.no_of_communities, Some(3));
    let comms = &brp.attrs.bgp_communities_list;
    assert_eq!(single(&comms[0].r#type), Some("noadvertised"));
    assert_eq!(single(&comms[1].r#type), Some("llgr_stale"));
    assert_eq!(single(&comms[2].r#type), Some("manual"));
    assert_eq!(single(&comms[2].as_number), Some("65000"));
    assert_eq!(single(&comms[2].last_two_octets), Some("1"));

    assert_eq!(brp.attrs.no_of_external_communities, Some(1));
    let ext = &brp.attrs.bgp_extended_communities_list[0];
    assert_eq!(single(&ext.r#type), Some("opaque"));
    assert_eq!(single(&ext.sub_type), Some("color"));
    assert_eq!(single(&ext.color_co_bits), Some("10"));
    assert_eq!(single(&ext.color_value), Some("42"));

    assert_eq!(brp.attrs.no_of_as_path_segments_per_route_range, Some(1));
    let segment = &brp.attrs.bgp_as_path_segment_list[0];
    assert_eq!(single(&segment.segment_type), Some("assetconfederation"));
    assert_eq!(single(&segment.bgp_as_number_list[0].as_number), Some("65100"));

    assert_eq!(single(&brp.attrs.enable_originator_id), Some("true"));
    let counter = brp
        .attrs
        .originator_id
        .as_ref()
        .unwrap()
        .counter
        .as_ref()
        .unwrap();
    assert_eq!(counter.start.as_deref(), Some("10.0.0.1"));
    assert_eq!(counter.step.as_deref(), Some("0.0.0.1"));
    assert_eq!(counter.direction.as_deref(), Some("increment"));

    assert_eq!(brp.attrs.no_of_clusters, Some(2));
    assert_eq!(
        single(&brp.attrs.bgp_cluster_id_list[1].cluster_id),
        Some("10.1.1.2")
    );
}

#[test]
fn test_bgp_defaults() {
    let ate = add_networks(vec![Network {
        name: "net1".to_owned(),
        ipv4: ipv4_range("198.51.100.0/24"),
        bgp_attributes: Some(bgp_attributes()),
        ..Default::default()
    }])
    .unwrap();
    let brp = &network_group(&ate, "net1").ipv4_prefix_pools[0]
        .bgp_ip_route_property[0];
    assert_eq!(single(&brp.attrs.next_hop_type), Some("sameaslocalip"));
    assert!(brp.ipv4_next_hop.is_none());
    assert_eq!(single(&brp.attrs.enable_community), Some("false"));
    assert_eq!(brp.attrs.no_of_communities, Some(0));
    assert_eq!(single(&brp.attrs.enable_as_path_segments), Some("false"));
    assert!(brp.attrs.enable_originator_id.is_none());
    assert!(brp.attrs.enable_cluster.is_none());
}

#[test]
fn test_bgp_v6_next_hop_type() {
    let ate = add_networks(vec![
        Network {
            name: "net1".to_owned(),
            ipv6: ipv6_range("2001:db8:1::/64"),
            bgp_attributes: Some(BgpAttributes {
                next_hop_address: Some("2001:db8::1".to_owned()),
                ..bgp_attributes()
            }),
            ..Default::default()
        },
        Network {
            name: "net2".to_owned(),
            ipv6: ipv6_range("2001:db8:2::/64"),
            bgp_attributes: Some(BgpAttributes {
                next_hop_address: Some("192.0.2.1".to_owned()),
                ..bgp_attributes()
            }),
            ..Default::default()
        },
    ])
    .unwrap();
    let pool = &network_group(&ate, "net1").ipv6_prefix_pools[0];
    assert_eq!(single(&pool.prefix_length), Some("64"));
    assert_eq!(single(&pool.number_of_addresses_asy), Some("8"));
    let brp = &pool.bgp_v6_ip_route_property[0];
    assert_eq!(single(&brp.ipv6_next_hop), Some("2001:db8::1"));
    assert_eq!(single(&brp.advertise_nexthop_as_v4), Some("false"));
    assert_eq!(single(&brp.next_hop_ip_type), Some("ipv6"));

    let brp = &network_group(&ate, "net2").ipv6_prefix_pools[0]
        .bgp_v6_ip_route_property[0];
    assert_eq!(single(&brp.ipv6_next_hop), Some("192.0.2.1"));
    assert_eq!(single(&brp.advertise_nexthop_as_v4), Some("true"));
    assert_eq!(single(&brp.next_hop_ip_type), Some("ipv4"));
}

#[test]
fn test_inactive_placeholders() {
    let ate = add_networks(vec![
        Network {
            name: "isis".to_owned(),
            ipv6: ipv6_range("2001:db8:1::/64"),
            isis: Some(IpReachability {
                route_origin: RouteOrigin::Internal,
                ..Default::default()
            }),
            ..Default::default()
        },
        Network {
            name: "bgp".to_owned(),
            ipv6: ipv6_range("2001:db8:2::/64"),
            bgp_attributes: Some(bgp_attributes()),
            ..Default::default()
        },
    ])
    .unwrap();
    let pool = &network_group(&ate, "isis").ipv6_prefix_pools[0];
    let brp = &pool.bgp_v6_ip_route_property[0];
    assert_eq!(brp.name.as_deref(), Some("isis BGP V6 Inactive"));
    assert_eq!(single(&brp.active), Some("false"));

    let pool = &network_group(&ate, "bgp").ipv6_prefix_pools[0];
    let irp = &pool.isis_l3_route_property[0];
    assert_eq!(irp.name.as_deref(), Some("bgp IS-IS Inactive"));
    assert_eq!(single(&irp.active), Some("false"));
    assert!(irp.route_origin.is_none());
}

#[test]
fn test_imported_routes() {
    let ate = add_networks(vec![Network {
        name: "imported".to_owned(),
        imported_bgp_routes: Some(ImportedBgpRoutes {
            route_table_format: RouteTableFormat::Cisco,
            ipv4_routes_path: Some("/tmp/v4.txt".to_owned()),
            ipv6_routes_path: Some("/tmp/v6.txt".to_owned()),
        }),
        ..Default::default()
    }])
    .unwrap();
    let ng = network_group(&ate, "imported");
    // The interface only has an IPv4 BGP peer.
    let v4_pool = &ng.ipv4_prefix_pools[0];
    assert!(v4_pool.network_address.is_none());
    assert!(v4_pool.bgp_v6_ip_route_property.is_empty());
    let brp = &v4_pool.bgp_ip_route_property[0];
    assert_eq!(brp.name.as_deref(), Some("Imported IPv4 BGP Routes"));
    assert_eq!(single(&brp.active), Some("true"));
    let v6_pool = &ng.ipv6_prefix_pools[0];
    assert_eq!(
        v6_pool.bgp_ip_route_property[0].name.as_deref(),
        Some("Imported IPv6 BGP Routes")
    );

    let route_tables = ate.route_tables("ifc1", "imported").unwrap();
    assert_eq!(route_tables.format, RouteTableFormat::Cisco);
    assert_eq!(route_tables.ipv4.as_deref(), Some("/tmp/v4.txt"));
}

#[test]
fn test_network_errors() {
    let net = |name: &str| Network {
        name: name.to_owned(),
        ipv4: ipv4_range("198.51.100.0/24"),
        ..Default::default()
    };

    let error = add_networks(vec![Network {
        ipv4: ipv4_range(""),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(
        error,
        Error::MissingNetworkAddress("net1".to_owned(), AddressFamily::Ipv4)
    );

    let error = add_networks(vec![Network {
        ipv4: ipv4_range("198.51.100.0"),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(error, Error::InvalidAddress("198.51.100.0".to_owned()));

    let error = add_networks(vec![Network {
        isis: Some(IpReachability::default()),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(error, Error::UnspecifiedRouteOrigin);

    let error = add_networks(vec![Network {
        bgp_attributes: Some(BgpAttributes {
            origin: BgpOrigin::Unspecified,
            ..bgp_attributes()
        }),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(error, Error::UnspecifiedBgpOrigin);

    let error = add_networks(vec![Network {
        bgp_attributes: Some(BgpAttributes {
            asn_set_mode: AsnSetMode::Unspecified,
            ..bgp_attributes()
        }),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(error, Error::UnspecifiedAsnSetMode);

    let error = add_networks(vec![Network {
        bgp_attributes: Some(BgpAttributes {
            communities: Some(BgpCommunities {
                private_communities: vec!["65000".to_owned()],
                ..Default::default()
            }),
            ..bgp_attributes()
        }),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(error, Error::InvalidCommunity("65000".to_owned()));
    assert!(error.is_user_error());

    let error = add_networks(vec![Network {
        bgp_attributes: Some(BgpAttributes {
            extended_communities: vec![ExtendedCommunity::Color(
                ColorCommunity::default(),
            )],
            ..bgp_attributes()
        }),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(error, Error::UnspecifiedCoBits);

    let error = add_networks(vec![Network {
        bgp_attributes: Some(BgpAttributes {
            as_path_segments: vec![AsPathSegment::default()],
            ..bgp_attributes()
        }),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(error, Error::UnspecifiedAsPathSegmentType);

    let error = add_networks(vec![Network {
        bgp_attributes: Some(BgpAttributes {
            originator_id: Some(StringIncRange {
                start: "2001:db8::1".to_owned(),
                step: "::1".to_owned(),
            }),
            ..bgp_attributes()
        }),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(
        error,
        Error::InvalidOriginatorId("start", "2001:db8::1".to_owned())
    );
    assert!(!error.is_user_error());

    let error = add_networks(vec![Network {
        bgp_attributes: Some(BgpAttributes {
            cluster_ids: vec!["1.1.1.1".to_owned(), "cluster".to_owned()],
            ..bgp_attributes()
        }),
        ..net("net1")
    }])
    .unwrap_err();
    assert_eq!(error, Error::InvalidClusterId("cluster".to_owned()));
    assert!(!error.is_user_error());
}

#[test]
fn test_imported_routes_errors() {
    let imported = || {
        Some(ImportedBgpRoutes {
            route_table_format: RouteTableFormat::Juniper,
            ipv4_routes_path: Some("/tmp/v4.txt".to_owned()),
            ipv6_routes_path: None,
        })
    };

    let error = add_networks(vec![Network {
        name: "net1".to_owned(),
        ipv4: ipv4_range("198.51.100.0/24"),
        imported_bgp_routes: imported(),
        ..Default::default()
    }])
    .unwrap_err();
    assert_eq!(error, Error::ImportedRoutesConflict("net1".to_owned()));

    let error = add_networks(vec![Network {
        name: "net1".to_owned(),
        imported_bgp_routes: Some(ImportedBgpRoutes {
            route_table_format: RouteTableFormat::Unspecified,
            ..imported().unwrap()
        }),
        ..Default::default()
    }])
    .unwrap_err();
    assert_eq!(error, Error::UnspecifiedRouteTableFormat);

    // Interface without BGP peers.
    let mut ate = IxAte::new();
    let mut ifc = interface(vec![Network {
        name: "net1".to_owned(),
        imported_bgp_routes: imported(),
        ..Default::default()
    }]);
    ifc.bgp_peers.clear();
    ate.add_interface(&ifc).unwrap();
    let error = ate.add_networks(&ifc).unwrap_err();
    assert_eq!(error, Error::ImportedRoutesWithoutPeer("net1".to_owned()));
    assert!(ate.network_group("ifc1", "net1").is_none());
    assert!(ate.config().topology[0].device_group[0].network_group.is_empty());
}

#[test]
fn test_unknown_interface() {
    let mut ate = IxAte::new();
    let error = ate.add_networks(&interface(vec![])).unwrap_err();
    assert_eq!(error, Error::UnknownInterface("ifc1".to_owned()));
}
