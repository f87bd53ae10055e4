//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;

use ondatra_ixconfig::{
    BgpRouteAttrs, TopologyBgpAsNumberList, TopologyBgpAsPathSegmentList,
    TopologyBgpClusterIdList, TopologyBgpCommunitiesList,
    TopologyBgpExtendedCommunitiesList, TopologyBgpIpRouteProperty,
    TopologyBgpV6IpRouteProperty, TopologyDeviceGroup,
    TopologyIpv4PrefixPools, TopologyIpv6PrefixPools,
    TopologyIsisL3RouteProperty, TopologyMacPools, TopologyNetworkGroup,
    TopologyVlan, multivalue_bool, multivalue_false, multivalue_str,
    multivalue_str_inc_counter, multivalue_true, multivalue_u32,
};
use ondatra_utils::ip::{AddressFamily, parse_cidr, parse_ip};
use tracing::debug;

use crate::error::{Error, Result};
use crate::ixate::{IxAte, RouteTables};
use crate::topology::{
    AsPathSegment, BgpAttributes, BgpCommunities, EthAttributes,
    ExtendedCommunity, ImportedBgpRoutes, InterfaceConfig, IpRange,
    IpReachability, Network, RouteTableFormat, StringIncRange,
};

// Route properties some network of the interface configures. When a
// protocol is configured for any network, every other network needs an
// inactive route property for it, or IxNetwork creates an active one.
#[derive(Clone, Copy, Debug, Default)]
struct Protocols {
    isis: bool,
    bgp: bool,
}

// BGP peers of the interface, per address family.
#[derive(Clone, Copy, Debug, Default)]
struct BgpPeers {
    ipv4: bool,
    ipv6: bool,
}

// ===== impl IxAte =====

impl IxAte {
    // Adds one network group per network of a previously added interface.
    //
    // Network groups are replaced as a whole, and left untouched on error.
    pub fn add_networks(&mut self, ifc: &InterfaceConfig) -> Result<()> {
        let intf = self.interface(&ifc.name)?;
        let peers = BgpPeers::of(self.device_group(intf));
        let protocols = Protocols {
            isis: ifc.networks.iter().any(|net| net.isis.is_some()),
            bgp: ifc.networks.iter().any(|net| net.bgp_attributes.is_some()),
        };

        let mut network_groups = vec![];
        let mut net_to_network_group = BTreeMap::new();
        let mut net_to_route_tables = BTreeMap::new();
        for net in &ifc.networks {
            debug!(
                interface = %ifc.name, network = %net.name,
                "adding network"
            );
            let mut ng = TopologyNetworkGroup {
                name: Some(net.name.clone()),
                mac_pools: net.eth.iter().map(mac_pool).collect(),
                ..Default::default()
            };
            if let Some(imported) = &net.imported_bgp_routes {
                let (route_tables, v4_pools, v6_pools) =
                    imported_bgp_route_pools(net, imported, peers)?;
                net_to_route_tables.insert(net.name.clone(), route_tables);
                ng.ipv4_prefix_pools = v4_pools;
                ng.ipv6_prefix_pools = v6_pools;
            } else {
                ng.ipv4_prefix_pools = ipv4_pools(net, protocols)?;
                ng.ipv6_prefix_pools = ipv6_pools(net, protocols)?;
            }
            net_to_network_group.insert(net.name.clone(), network_groups.len());
            network_groups.push(ng);
        }

        let (intf, dg) = self.interface_mut(&ifc.name)?;
        intf.net_to_network_group = net_to_network_group;
        intf.net_to_route_tables = net_to_route_tables;
        dg.network_group = network_groups;
        Ok(())
    }
}

// ===== impl BgpPeers =====

impl BgpPeers {
    fn of(dg: &TopologyDeviceGroup) -> BgpPeers {
        let ipv4 = dg
            .ethernet
            .iter()
            .flat_map(|eth| eth.ipv4.iter())
            .any(|ipv4| !ipv4.bgp_ipv4_peer.is_empty())
            || dg
                .ipv4_loopback
                .iter()
                .any(|lo| !lo.bgp_ipv4_peer.is_empty());
        let ipv6 = dg
            .ethernet
            .iter()
            .flat_map(|eth| eth.ipv6.iter())
            .any(|ipv6| !ipv6.bgp_ipv6_peer.is_empty())
            || dg
                .ipv6_loopback
                .iter()
                .any(|lo| !lo.bgp_ipv6_peer.is_empty());
        BgpPeers { ipv4, ipv6 }
    }
}

// ===== helper functions =====

fn mac_pool(eth: &EthAttributes) -> TopologyMacPools {
    TopologyMacPools {
        mac: multivalue_str(eth.mac_address.as_str()),
        number_of_addresses_asy: multivalue_u32(eth.count),
        enable_vlans: multivalue_bool(eth.vlan_id != 0),
        vlan: vec![TopologyVlan {
            vlan_id: multivalue_u32(eth.vlan_id),
            ..Default::default()
        }],
        ..Default::default()
    }
}

// Parses the address and prefix length of a network, which must be given in
// CIDR notation.
fn network_address(
    net: &Network,
    range: &IpRange,
    af: AddressFamily,
) -> Result<(String, u8)> {
    if range.address_cidr.is_empty() {
        return Err(Error::MissingNetworkAddress(net.name.clone(), af));
    }
    let (addr, prefix) = parse_cidr(&range.address_cidr)
        .map_err(|_| Error::InvalidAddress(range.address_cidr.clone()))?;
    Ok((addr.to_string(), prefix))
}

fn isis_route_props(
    net: &Network,
    protocols: Protocols,
) -> Result<Vec<TopologyIsisL3RouteProperty>> {
    match &net.isis {
        Some(isis) => Ok(vec![isis_route_prop(isis)?]),
        None if protocols.isis => Ok(vec![TopologyIsisL3RouteProperty {
            name: Some(format!("{} IS-IS Inactive", net.name)),
            active: multivalue_false(),
            ..Default::default()
        }]),
        None => Ok(vec![]),
    }
}

fn isis_route_prop(
    ipr: &IpReachability,
) -> Result<TopologyIsisL3RouteProperty> {
    let origin = ipr
        .route_origin
        .to_ixia()
        .ok_or(Error::UnspecifiedRouteOrigin)?;
    Ok(TopologyIsisL3RouteProperty {
        metric: multivalue_u32(ipr.metric),
        algorithm: multivalue_u32(ipr.algorithm),
        route_origin: multivalue_str(origin),
        configure_sid_index_label: multivalue_bool(ipr.enable_sid_index_label),
        sid_index_label: multivalue_u32(ipr.sid_index_label),
        r_flag: multivalue_bool(ipr.flag_readvertise),
        n_flag: multivalue_bool(ipr.flag_node_sid),
        p_flag: multivalue_bool(ipr.flag_no_php),
        e_flag: multivalue_bool(ipr.flag_explicit_null),
        v_flag: multivalue_bool(ipr.flag_value),
        l_flag: multivalue_bool(ipr.flag_local),
        ..Default::default()
    })
}

fn ipv4_pools(
    net: &Network,
    protocols: Protocols,
) -> Result<Vec<TopologyIpv4PrefixPools>> {
    let Some(ipv4) = &net.ipv4 else {
        return Ok(vec![]);
    };
    let (addr, prefix) = network_address(net, ipv4, AddressFamily::Ipv4)?;

    let bgp_ip_route_property = match &net.bgp_attributes {
        Some(bgp) => vec![bgp_v4_route_prop(bgp)?],
        None if protocols.bgp => vec![TopologyBgpIpRouteProperty {
            name: Some(format!("{} BGP Inactive", net.name)),
            active: multivalue_false(),
            ..Default::default()
        }],
        None => vec![],
    };

    Ok(vec![TopologyIpv4PrefixPools {
        network_address: multivalue_str(addr),
        prefix_length: multivalue_u32(prefix.into()),
        number_of_addresses_asy: multivalue_u32(ipv4.count),
        isis_l3_route_property: isis_route_props(net, protocols)?,
        bgp_ip_route_property,
        ..Default::default()
    }])
}

fn ipv6_pools(
    net: &Network,
    protocols: Protocols,
) -> Result<Vec<TopologyIpv6PrefixPools>> {
    let Some(ipv6) = &net.ipv6 else {
        return Ok(vec![]);
    };
    let (addr, prefix) = network_address(net, ipv6, AddressFamily::Ipv6)?;

    let bgp_v6_ip_route_property = match &net.bgp_attributes {
        Some(bgp) => vec![bgp_v6_route_prop(bgp)?],
        None if protocols.bgp => vec![TopologyBgpV6IpRouteProperty {
            name: Some(format!("{} BGP V6 Inactive", net.name)),
            active: multivalue_false(),
            ..Default::default()
        }],
        None => vec![],
    };

    Ok(vec![TopologyIpv6PrefixPools {
        network_address: multivalue_str(addr),
        prefix_length: multivalue_u32(prefix.into()),
        number_of_addresses_asy: multivalue_u32(ipv6.count),
        isis_l3_route_property: isis_route_props(net, protocols)?,
        bgp_v6_ip_route_property,
        ..Default::default()
    }])
}

fn imported_bgp_route_pools(
    net: &Network,
    imported: &ImportedBgpRoutes,
    peers: BgpPeers,
) -> Result<(
    RouteTables,
    Vec<TopologyIpv4PrefixPools>,
    Vec<TopologyIpv6PrefixPools>,
)> {
    if net.isis.is_some()
        || net.bgp_attributes.is_some()
        || net.ipv4.is_some()
        || net.ipv6.is_some()
    {
        return Err(Error::ImportedRoutesConflict(net.name.clone()));
    }
    if !peers.ipv4 && !peers.ipv6 {
        return Err(Error::ImportedRoutesWithoutPeer(net.name.clone()));
    }
    if imported.route_table_format == RouteTableFormat::Unspecified {
        return Err(Error::UnspecifiedRouteTableFormat);
    }

    let route_tables = RouteTables::new(
        imported.route_table_format,
        imported.ipv4_routes_path.clone().filter(|p| !p.is_empty()),
        imported.ipv6_routes_path.clone().filter(|p| !p.is_empty()),
    );
    let imported_v4_prop = |name: &str| TopologyBgpIpRouteProperty {
        name: Some(name.to_owned()),
        active: multivalue_true(),
        ..Default::default()
    };
    let imported_v6_prop = |name: &str| TopologyBgpV6IpRouteProperty {
        name: Some(name.to_owned()),
        active: multivalue_true(),
        ..Default::default()
    };

    let mut v4_pools = vec![];
    if route_tables.ipv4.is_some() {
        let mut pool = TopologyIpv4PrefixPools::default();
        if peers.ipv4 {
            pool.bgp_ip_route_property =
                vec![imported_v4_prop("Imported IPv4 BGP Routes")];
        }
        if peers.ipv6 {
            pool.bgp_v6_ip_route_property =
                vec![imported_v6_prop("Imported IPv4 BGP V6 Routes")];
        }
        v4_pools.push(pool);
    }
    let mut v6_pools = vec![];
    if route_tables.ipv6.is_some() {
        let mut pool = TopologyIpv6PrefixPools::default();
        if peers.ipv4 {
            pool.bgp_ip_route_property =
                vec![imported_v4_prop("Imported IPv6 BGP Routes")];
        }
        if peers.ipv6 {
            pool.bgp_v6_ip_route_property =
                vec![imported_v6_prop("Imported IPv6 BGP V6 Routes")];
        }
        v6_pools.push(pool);
    }
    Ok((route_tables, v4_pools, v6_pools))
}

fn bgp_v4_route_prop(
    bgp: &BgpAttributes,
) -> Result<TopologyBgpIpRouteProperty> {
    let mut brp = TopologyBgpIpRouteProperty {
        active: multivalue_bool(bgp.active),
        attrs: bgp_route_attrs(bgp)?,
        ..Default::default()
    };
    match bgp.next_hop_address.as_deref().filter(|nh| !nh.is_empty()) {
        Some(nh) => {
            brp.attrs.next_hop_type = multivalue_str("manual");
            brp.ipv4_next_hop = multivalue_str(nh);
        }
        None => {
            brp.attrs.next_hop_type = multivalue_str("sameaslocalip");
        }
    }
    Ok(brp)
}

fn bgp_v6_route_prop(
    bgp: &BgpAttributes,
) -> Result<TopologyBgpV6IpRouteProperty> {
    let mut brp = TopologyBgpV6IpRouteProperty {
        active: multivalue_bool(bgp.active),
        attrs: bgp_route_attrs(bgp)?,
        ..Default::default()
    };
    match bgp.next_hop_address.as_deref().filter(|nh| !nh.is_empty()) {
        Some(nh) => {
            brp.attrs.next_hop_type = multivalue_str("manual");
            brp.ipv6_next_hop = multivalue_str(nh);
            let is_ipv6 =
                matches!(parse_ip(nh), Some((_, AddressFamily::Ipv6)));
            brp.advertise_nexthop_as_v4 = multivalue_bool(!is_ipv6);
            brp.next_hop_ip_type =
                multivalue_str(if is_ipv6 { "ipv6" } else { "ipv4" });
        }
        None => {
            brp.attrs.next_hop_type = multivalue_str("sameaslocalip");
        }
    }
    Ok(brp)
}

// Translates the route attributes common to IPv4 and IPv6 routes.
fn bgp_route_attrs(bgp: &BgpAttributes) -> Result<BgpRouteAttrs> {
    let mut attrs = BgpRouteAttrs {
        enable_next_hop: multivalue_true(),
        enable_origin: multivalue_true(),
        enable_local_preference: multivalue_true(),
        local_preference: multivalue_u32(bgp.local_preference),
        no_of_large_communities: Some(0),
        ..Default::default()
    };

    let origin = bgp.origin.to_ixia().ok_or(Error::UnspecifiedBgpOrigin)?;
    attrs.origin = multivalue_str(origin);

    let comms = match &bgp.communities {
        Some(communities) => bgp_communities(communities)?,
        None => vec![],
    };
    attrs.enable_community = multivalue_bool(!comms.is_empty());
    attrs.no_of_communities = Some(count(&comms));
    attrs.bgp_communities_list = comms;

    let ext_comms = bgp_extended_communities(&bgp.extended_communities)?;
    attrs.enable_extended_community = multivalue_bool(!ext_comms.is_empty());
    attrs.no_of_external_communities = Some(count(&ext_comms));
    attrs.bgp_extended_communities_list = ext_comms;

    let asn_set_mode = bgp
        .asn_set_mode
        .to_ixia()
        .ok_or(Error::UnspecifiedAsnSetMode)?;
    attrs.as_set_mode = multivalue_str(asn_set_mode);

    let segments = bgp_as_path_segments(&bgp.as_path_segments)?;
    attrs.enable_as_path_segments = multivalue_bool(!segments.is_empty());
    attrs.no_of_as_path_segments_per_route_range = Some(count(&segments));
    attrs.bgp_as_path_segment_list = segments;

    if let Some(originator_id) = &bgp.originator_id {
        let (start, step) = originator_id_range(originator_id)?;
        attrs.enable_originator_id = multivalue_true();
        attrs.originator_id = multivalue_str_inc_counter(start, step);
    }

    if !bgp.cluster_ids.is_empty() {
        attrs.enable_cluster = multivalue_true();
        attrs.no_of_clusters = Some(count(&bgp.cluster_ids));
        attrs.bgp_cluster_id_list = bgp
            .cluster_ids
            .iter()
            .map(|cluster_id| {
                if !is_ipv4(cluster_id) {
                    return Err(Error::InvalidClusterId(cluster_id.clone()));
                }
                Ok(TopologyBgpClusterIdList {
                    cluster_id: multivalue_str(cluster_id.as_str()),
                    ..Default::default()
                })
            })
            .collect::<Result<_>>()?;
    }
    Ok(attrs)
}

fn bgp_communities(
    communities: &BgpCommunities,
) -> Result<Vec<TopologyBgpCommunitiesList>> {
    let well_known = [
        (communities.no_export, "noexport"),
        (communities.no_advertise, "noadvertised"),
        (communities.no_export_subconfed, "noexport_subconfed"),
        (communities.llgr_stale, "llgr_stale"),
        (communities.no_llgr, "no_llgr"),
    ];
    let mut comms = well_known
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .map(|(_, community)| TopologyBgpCommunitiesList {
            r#type: multivalue_str(community),
            ..Default::default()
        })
        .collect::<Vec<_>>();

    for community in &communities.private_communities {
        let (asn, value) = community
            .split_once(':')
            .ok_or_else(|| Error::InvalidCommunity(community.clone()))?;
        comms.push(TopologyBgpCommunitiesList {
            as_number: multivalue_str(asn),
            last_two_octets: multivalue_str(value),
            r#type: multivalue_str("manual"),
            ..Default::default()
        });
    }
    Ok(comms)
}

fn bgp_extended_communities(
    communities: &[ExtendedCommunity],
) -> Result<Vec<TopologyBgpExtendedCommunitiesList>> {
    communities
        .iter()
        .map(|community| match community {
            ExtendedCommunity::Color(color) => {
                let co_bits = color
                    .co_bits
                    .to_ixia()
                    .ok_or(Error::UnspecifiedCoBits)?;
                Ok(TopologyBgpExtendedCommunitiesList {
                    r#type: multivalue_str("opaque"),
                    sub_type: multivalue_str("color"),
                    color_co_bits: multivalue_str(co_bits),
                    color_reserved_bits: multivalue_u32(color.reserved_bits),
                    color_value: multivalue_u32(color.value),
                    ..Default::default()
                })
            }
        })
        .collect()
}

fn bgp_as_path_segments(
    segments: &[AsPathSegment],
) -> Result<Vec<TopologyBgpAsPathSegmentList>> {
    segments
        .iter()
        .map(|segment| {
            let segment_type = segment
                .r#type
                .to_ixia()
                .ok_or(Error::UnspecifiedAsPathSegmentType)?;
            Ok(TopologyBgpAsPathSegmentList {
                enable_as_path_segment: multivalue_true(),
                segment_type: multivalue_str(segment_type),
                bgp_as_number_list: segment
                    .asns
                    .iter()
                    .map(|asn| TopologyBgpAsNumberList {
                        enable_as_number: multivalue_true(),
                        as_number: multivalue_u32(*asn),
                        ..Default::default()
                    })
                    .collect(),
                ..Default::default()
            })
        })
        .collect()
}

// Checks the originator ID range is made of IPv4 addresses.
fn originator_id_range(range: &StringIncRange) -> Result<(&str, &str)> {
    if !is_ipv4(&range.start) {
        return Err(Error::InvalidOriginatorId("start", range.start.clone()));
    }
    if !is_ipv4(&range.step) {
        return Err(Error::InvalidOriginatorId("step", range.step.clone()));
    }
    Ok((&range.start, &range.step))
}

fn is_ipv4(addr: &str) -> bool {
    matches!(parse_ip(addr), Some((_, AddressFamily::Ipv4)))
}

fn count<T>(list: &[T]) -> u32 {
    list.len().try_into().unwrap_or(u32::MAX)
}
