//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};

use crate::multivalue::{Multivalue, set_multivalue_xpaths};
use crate::xpath::{
    XPath, XPathNode, clear_unmodelled_xpaths, set_list_xpaths,
};

// Attributes and child objects of a node that its struct doesn't model. They
// are kept as exported so that a config can be imported back unchanged.
pub type Unmodelled = serde_json::Map<String, serde_json::Value>;

// Node of an IxNetwork config tree.
pub trait IxiaCfgNode {
    // XPath of the node, if computed.
    fn xpath(&self) -> Option<&XPath>;

    // Name of the node type, for error reporting.
    fn kind(&self) -> &'static str;
}

// Implements the XPath bookkeeping of a config node.
//
// Multivalue attributes get XPaths derived from the owner's XPath, list
// children get 1-based indexed XPaths, and flattened attribute groups share
// the XPath of the node.
macro_rules! config_node {
    (
        $ty:ident {
            $(multivalue $mv:ident = $mv_attr:literal;)*
            $(list $list:ident = $list_name:literal;)*
            $(flatten $flat:ident;)*
        }
    ) => {
        impl IxiaCfgNode for $ty {
            fn xpath(&self) -> Option<&XPath> {
                self.xpath.as_ref()
            }

            fn kind(&self) -> &'static str {
                stringify!($ty)
            }
        }

        impl XPathNode for $ty {
            fn set_xpaths(&mut self, xpath: Option<XPath>) {
                $(
                    set_multivalue_xpaths(
                        &mut self.$mv,
                        xpath.as_ref(),
                        $mv_attr,
                    );
                )*
                $(set_list_xpaths(&mut self.$list, xpath.as_ref(), $list_name);)*
                $(self.$flat.set_xpaths(xpath.as_ref());)*
                if xpath.is_none() {
                    clear_unmodelled_xpaths(&mut self.extra);
                }
                self.xpath = xpath;
            }
        }
    };
}

// Root of the IxNetwork config.
#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ixnetwork {
    pub xpath: Option<XPath>,
    pub vport: Vec<Vport>,
    pub topology: Vec<Topology>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vport {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub r#type: Option<String>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Topology {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    // XPaths of the ports of the topology.
    pub vports: Vec<String>,
    pub device_group: Vec<TopologyDeviceGroup>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyDeviceGroup {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub multiplier: Option<u32>,
    pub enabled: Option<Multivalue>,
    pub ethernet: Vec<TopologyEthernet>,
    pub ipv4_loopback: Vec<TopologyIpv4Loopback>,
    pub ipv6_loopback: Vec<TopologyIpv6Loopback>,
    pub network_group: Vec<TopologyNetworkGroup>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyEthernet {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub mac: Option<Multivalue>,
    pub mtu: Option<Multivalue>,
    pub enable_vlans: Option<Multivalue>,
    pub vlan_count: Option<u32>,
    pub vlan: Vec<TopologyVlan>,
    pub ipv4: Vec<TopologyIpv4>,
    pub ipv6: Vec<TopologyIpv6>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyVlan {
    pub xpath: Option<XPath>,
    pub vlan_id: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyIpv4 {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub address: Option<Multivalue>,
    pub gateway_ip: Option<Multivalue>,
    pub prefix: Option<Multivalue>,
    pub resolve_gateway: Option<Multivalue>,
    pub bgp_ipv4_peer: Vec<TopologyBgpIpv4Peer>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyIpv6 {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub address: Option<Multivalue>,
    pub gateway_ip: Option<Multivalue>,
    pub prefix: Option<Multivalue>,
    pub resolve_gateway: Option<Multivalue>,
    pub bgp_ipv6_peer: Vec<TopologyBgpIpv6Peer>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyIpv4Loopback {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub address: Option<Multivalue>,
    pub prefix: Option<Multivalue>,
    pub bgp_ipv4_peer: Vec<TopologyBgpIpv4Peer>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyIpv6Loopback {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub address: Option<Multivalue>,
    pub prefix: Option<Multivalue>,
    pub bgp_ipv6_peer: Vec<TopologyBgpIpv6Peer>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpIpv4Peer {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub active: Option<Multivalue>,
    pub dut_ip: Option<Multivalue>,
    pub r#type: Option<Multivalue>,
    pub local_as2_bytes: Option<Multivalue>,
    pub hold_timer: Option<Multivalue>,
    pub keepalive_timer: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpIpv6Peer {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub active: Option<Multivalue>,
    pub dut_ip: Option<Multivalue>,
    pub r#type: Option<Multivalue>,
    pub local_as2_bytes: Option<Multivalue>,
    pub hold_timer: Option<Multivalue>,
    pub keepalive_timer: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyNetworkGroup {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub multiplier: Option<u32>,
    pub mac_pools: Vec<TopologyMacPools>,
    pub ipv4_prefix_pools: Vec<TopologyIpv4PrefixPools>,
    pub ipv6_prefix_pools: Vec<TopologyIpv6PrefixPools>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyMacPools {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub mac: Option<Multivalue>,
    pub number_of_addresses_asy: Option<Multivalue>,
    pub enable_vlans: Option<Multivalue>,
    pub vlan: Vec<TopologyVlan>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyIpv4PrefixPools {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub network_address: Option<Multivalue>,
    pub prefix_length: Option<Multivalue>,
    pub number_of_addresses_asy: Option<Multivalue>,
    pub isis_l3_route_property: Vec<TopologyIsisL3RouteProperty>,
    #[serde(rename = "bgpIPRouteProperty")]
    pub bgp_ip_route_property: Vec<TopologyBgpIpRouteProperty>,
    #[serde(rename = "bgpV6IPRouteProperty")]
    pub bgp_v6_ip_route_property: Vec<TopologyBgpV6IpRouteProperty>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyIpv6PrefixPools {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub network_address: Option<Multivalue>,
    pub prefix_length: Option<Multivalue>,
    pub number_of_addresses_asy: Option<Multivalue>,
    pub isis_l3_route_property: Vec<TopologyIsisL3RouteProperty>,
    #[serde(rename = "bgpIPRouteProperty")]
    pub bgp_ip_route_property: Vec<TopologyBgpIpRouteProperty>,
    #[serde(rename = "bgpV6IPRouteProperty")]
    pub bgp_v6_ip_route_property: Vec<TopologyBgpV6IpRouteProperty>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyIsisL3RouteProperty {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub active: Option<Multivalue>,
    pub metric: Option<Multivalue>,
    pub algorithm: Option<Multivalue>,
    pub route_origin: Option<Multivalue>,
    #[serde(rename = "configureSIDIndexLabel")]
    pub configure_sid_index_label: Option<Multivalue>,
    #[serde(rename = "sIDIndexLabel")]
    pub sid_index_label: Option<Multivalue>,
    pub r_flag: Option<Multivalue>,
    pub n_flag: Option<Multivalue>,
    pub p_flag: Option<Multivalue>,
    pub e_flag: Option<Multivalue>,
    pub v_flag: Option<Multivalue>,
    pub l_flag: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

// Route attributes shared by the IPv4 and IPv6 BGP route properties.
#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BgpRouteAttrs {
    pub enable_next_hop: Option<Multivalue>,
    pub next_hop_type: Option<Multivalue>,
    pub enable_origin: Option<Multivalue>,
    pub origin: Option<Multivalue>,
    pub enable_local_preference: Option<Multivalue>,
    pub local_preference: Option<Multivalue>,
    pub enable_community: Option<Multivalue>,
    pub no_of_communities: Option<u32>,
    pub bgp_communities_list: Vec<TopologyBgpCommunitiesList>,
    pub enable_extended_community: Option<Multivalue>,
    pub no_of_external_communities: Option<u32>,
    pub bgp_extended_communities_list: Vec<TopologyBgpExtendedCommunitiesList>,
    pub as_set_mode: Option<Multivalue>,
    pub enable_as_path_segments: Option<Multivalue>,
    #[serde(rename = "noOfASPathSegmentsPerRouteRange")]
    pub no_of_as_path_segments_per_route_range: Option<u32>,
    pub bgp_as_path_segment_list: Vec<TopologyBgpAsPathSegmentList>,
    pub enable_originator_id: Option<Multivalue>,
    pub originator_id: Option<Multivalue>,
    pub enable_cluster: Option<Multivalue>,
    pub no_of_clusters: Option<u32>,
    pub bgp_cluster_id_list: Vec<TopologyBgpClusterIdList>,
    pub no_of_large_communities: Option<u32>,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpIpRouteProperty {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub active: Option<Multivalue>,
    #[serde(flatten)]
    pub attrs: BgpRouteAttrs,
    pub ipv4_next_hop: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpV6IpRouteProperty {
    pub xpath: Option<XPath>,
    pub name: Option<String>,
    pub active: Option<Multivalue>,
    #[serde(flatten)]
    pub attrs: BgpRouteAttrs,
    pub ipv4_next_hop: Option<Multivalue>,
    pub ipv6_next_hop: Option<Multivalue>,
    pub advertise_nexthop_as_v4: Option<Multivalue>,
    #[serde(rename = "nextHopIPType")]
    pub next_hop_ip_type: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpCommunitiesList {
    pub xpath: Option<XPath>,
    pub as_number: Option<Multivalue>,
    pub last_two_octets: Option<Multivalue>,
    pub r#type: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpExtendedCommunitiesList {
    pub xpath: Option<XPath>,
    pub r#type: Option<Multivalue>,
    pub sub_type: Option<Multivalue>,
    #[serde(rename = "colorCOBits")]
    pub color_co_bits: Option<Multivalue>,
    pub color_reserved_bits: Option<Multivalue>,
    pub color_value: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
    Vec => #[serde(default, skip_serializing_if = "Vec::is_empty")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpAsPathSegmentList {
    pub xpath: Option<XPath>,
    #[serde(rename = "enableASPathSegment")]
    pub enable_as_path_segment: Option<Multivalue>,
    pub segment_type: Option<Multivalue>,
    pub bgp_as_number_list: Vec<TopologyBgpAsNumberList>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpAsNumberList {
    pub xpath: Option<XPath>,
    #[serde(rename = "enableASNumber")]
    pub enable_as_number: Option<Multivalue>,
    pub as_number: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

#[serde_with::apply(
    Option => #[serde(default, skip_serializing_if = "Option::is_none")],
)]
#[derive(Clone, Debug, Default, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyBgpClusterIdList {
    pub xpath: Option<XPath>,
    pub cluster_id: Option<Multivalue>,
    #[serde(flatten)]
    pub extra: Unmodelled,
}

// ===== impl Ixnetwork =====

impl Ixnetwork {
    // Recomputes the XPath of every node in the config.
    pub fn update_all_xpaths(&mut self) {
        self.set_xpaths(Some(XPath::root()));
    }

    // Returns a deep copy of the config with every XPath cleared.
    pub fn copy(&self) -> Ixnetwork {
        let mut copy = self.clone();
        copy.set_xpaths(None);
        copy
    }
}

config_node!(Ixnetwork {
    list vport = "vport";
    list topology = "topology";
});

config_node!(Vport {});

config_node!(Topology {
    list device_group = "deviceGroup";
});

config_node!(TopologyDeviceGroup {
    multivalue enabled = "enabled";
    list ethernet = "ethernet";
    list ipv4_loopback = "ipv4Loopback";
    list ipv6_loopback = "ipv6Loopback";
    list network_group = "networkGroup";
});

config_node!(TopologyEthernet {
    multivalue mac = "mac";
    multivalue mtu = "mtu";
    multivalue enable_vlans = "enableVlans";
    list vlan = "vlan";
    list ipv4 = "ipv4";
    list ipv6 = "ipv6";
});

config_node!(TopologyVlan {
    multivalue vlan_id = "vlanId";
});

config_node!(TopologyIpv4 {
    multivalue address = "address";
    multivalue gateway_ip = "gatewayIp";
    multivalue prefix = "prefix";
    multivalue resolve_gateway = "resolveGateway";
    list bgp_ipv4_peer = "bgpIpv4Peer";
});

config_node!(TopologyIpv6 {
    multivalue address = "address";
    multivalue gateway_ip = "gatewayIp";
    multivalue prefix = "prefix";
    multivalue resolve_gateway = "resolveGateway";
    list bgp_ipv6_peer = "bgpIpv6Peer";
});

config_node!(TopologyIpv4Loopback {
    multivalue address = "address";
    multivalue prefix = "prefix";
    list bgp_ipv4_peer = "bgpIpv4Peer";
});

config_node!(TopologyIpv6Loopback {
    multivalue address = "address";
    multivalue prefix = "prefix";
    list bgp_ipv6_peer = "bgpIpv6Peer";
});

config_node!(TopologyBgpIpv4Peer {
    multivalue active = "active";
    multivalue dut_ip = "dutIp";
    multivalue r#type = "type";
    multivalue local_as2_bytes = "localAs2Bytes";
    multivalue hold_timer = "holdTimer";
    multivalue keepalive_timer = "keepaliveTimer";
});

config_node!(TopologyBgpIpv6Peer {
    multivalue active = "active";
    multivalue dut_ip = "dutIp";
    multivalue r#type = "type";
    multivalue local_as2_bytes = "localAs2Bytes";
    multivalue hold_timer = "holdTimer";
    multivalue keepalive_timer = "keepaliveTimer";
});

config_node!(TopologyNetworkGroup {
    list mac_pools = "macPools";
    list ipv4_prefix_pools = "ipv4PrefixPools";
    list ipv6_prefix_pools = "ipv6PrefixPools";
});

config_node!(TopologyMacPools {
    multivalue mac = "mac";
    multivalue number_of_addresses_asy = "numberOfAddressesAsy";
    multivalue enable_vlans = "enableVlans";
    list vlan = "vlan";
});

config_node!(TopologyIpv4PrefixPools {
    multivalue network_address = "networkAddress";
    multivalue prefix_length = "prefixLength";
    multivalue number_of_addresses_asy = "numberOfAddressesAsy";
    list isis_l3_route_property = "isisL3RouteProperty";
    list bgp_ip_route_property = "bgpIPRouteProperty";
    list bgp_v6_ip_route_property = "bgpV6IPRouteProperty";
});

config_node!(TopologyIpv6PrefixPools {
    multivalue network_address = "networkAddress";
    multivalue prefix_length = "prefixLength";
    multivalue number_of_addresses_asy = "numberOfAddressesAsy";
    list isis_l3_route_property = "isisL3RouteProperty";
    list bgp_ip_route_property = "bgpIPRouteProperty";
    list bgp_v6_ip_route_property = "bgpV6IPRouteProperty";
});

config_node!(TopologyIsisL3RouteProperty {
    multivalue active = "active";
    multivalue metric = "metric";
    multivalue algorithm = "algorithm";
    multivalue route_origin = "routeOrigin";
    multivalue configure_sid_index_label = "configureSIDIndexLabel";
    multivalue sid_index_label = "sIDIndexLabel";
    multivalue r_flag = "rFlag";
    multivalue n_flag = "nFlag";
    multivalue p_flag = "pFlag";
    multivalue e_flag = "eFlag";
    multivalue v_flag = "vFlag";
    multivalue l_flag = "lFlag";
});

config_node!(TopologyBgpIpRouteProperty {
    multivalue active = "active";
    multivalue ipv4_next_hop = "ipv4NextHop";
    flatten attrs;
});

config_node!(TopologyBgpV6IpRouteProperty {
    multivalue active = "active";
    multivalue ipv4_next_hop = "ipv4NextHop";
    multivalue ipv6_next_hop = "ipv6NextHop";
    multivalue advertise_nexthop_as_v4 = "advertiseNexthopAsV4";
    multivalue next_hop_ip_type = "nextHopIPType";
    flatten attrs;
});

config_node!(TopologyBgpCommunitiesList {
    multivalue as_number = "asNumber";
    multivalue last_two_octets = "lastTwoOctets";
    multivalue r#type = "type";
});

config_node!(TopologyBgpExtendedCommunitiesList {
    multivalue r#type = "type";
    multivalue sub_type = "subType";
    multivalue color_co_bits = "colorCOBits";
    multivalue color_reserved_bits = "colorReservedBits";
    multivalue color_value = "colorValue";
});

config_node!(TopologyBgpAsPathSegmentList {
    multivalue enable_as_path_segment = "enableASPathSegment";
    multivalue segment_type = "segmentType";
    list bgp_as_number_list = "bgpAsNumberList";
});

config_node!(TopologyBgpAsNumberList {
    multivalue enable_as_number = "enableASNumber";
    multivalue as_number = "asNumber";
});

config_node!(TopologyBgpClusterIdList {
    multivalue cluster_id = "clusterId";
});

// ===== impl BgpRouteAttrs =====

impl BgpRouteAttrs {
    // Recomputes the XPaths of the attributes owned by the route property at
    // `owner`.
    fn set_xpaths(&mut self, owner: Option<&XPath>) {
        for (multivalue, attr) in [
            (&mut self.enable_next_hop, "enableNextHop"),
            (&mut self.next_hop_type, "nextHopType"),
            (&mut self.enable_origin, "enableOrigin"),
            (&mut self.origin, "origin"),
            (&mut self.enable_local_preference, "enableLocalPreference"),
            (&mut self.local_preference, "localPreference"),
            (&mut self.enable_community, "enableCommunity"),
            (&mut self.enable_extended_community, "enableExtendedCommunity"),
            (&mut self.as_set_mode, "asSetMode"),
            (&mut self.enable_as_path_segments, "enableAsPathSegments"),
            (&mut self.enable_originator_id, "enableOriginatorId"),
            (&mut self.originator_id, "originatorId"),
            (&mut self.enable_cluster, "enableCluster"),
        ] {
            set_multivalue_xpaths(multivalue, owner, attr);
        }
        set_list_xpaths(
            &mut self.bgp_communities_list,
            owner,
            "bgpCommunitiesList",
        );
        set_list_xpaths(
            &mut self.bgp_extended_communities_list,
            owner,
            "bgpExtendedCommunitiesList",
        );
        set_list_xpaths(
            &mut self.bgp_as_path_segment_list,
            owner,
            "bgpAsPathSegmentList",
        );
        set_list_xpaths(
            &mut self.bgp_cluster_id_list,
            owner,
            "bgpClusterIdList",
        );
    }
}
