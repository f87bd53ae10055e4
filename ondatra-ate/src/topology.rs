//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use serde::{Deserialize, Serialize};

// Topology of an ATE: its interfaces, along with their protocols and
// networks.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AteTopology {
    pub interfaces: Vec<InterfaceConfig>,
}

// ATE interface and everything configured on top of it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct InterfaceConfig {
    pub name: String,
    // Name of the ATE port the interface is attached to.
    pub port: String,
    pub ethernet: Option<EthernetConfig>,
    pub ipv4: Option<IpConfig>,
    pub ipv6: Option<IpConfig>,
    pub ipv4_loopback_cidr: Option<String>,
    pub ipv6_loopback_cidr: Option<String>,
    pub bgp_peers: Vec<BgpPeer>,
    pub networks: Vec<Network>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EthernetConfig {
    pub mac_address: Option<String>,
    pub mtu: Option<u32>,
    pub vlan_id: Option<u16>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IpConfig {
    pub address_cidr: String,
    pub default_gateway: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BgpPeer {
    pub name: Option<String>,
    pub active: bool,
    pub local_asn: u32,
    // DUT address; its family selects the IPv4 or IPv6 stack.
    pub peer_address: String,
    pub r#type: BgpPeerType,
    pub hold_timer_sec: Option<u32>,
    pub keepalive_timer_sec: Option<u32>,
    // Peer from the loopback address instead of the interface address.
    pub on_loopback: bool,
}

// Network advertised or emulated behind an interface.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Network {
    pub name: String,
    pub eth: Option<EthAttributes>,
    pub ipv4: Option<IpRange>,
    pub ipv6: Option<IpRange>,
    pub isis: Option<IpReachability>,
    pub bgp_attributes: Option<BgpAttributes>,
    pub imported_bgp_routes: Option<ImportedBgpRoutes>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct EthAttributes {
    pub mac_address: String,
    pub count: u32,
    pub vlan_id: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IpRange {
    pub address_cidr: String,
    pub count: u32,
}

// IS-IS reachability of a network.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IpReachability {
    pub route_origin: RouteOrigin,
    pub metric: u32,
    pub algorithm: u32,
    pub enable_sid_index_label: bool,
    pub sid_index_label: u32,
    pub flag_readvertise: bool,
    pub flag_node_sid: bool,
    pub flag_no_php: bool,
    pub flag_explicit_null: bool,
    pub flag_value: bool,
    pub flag_local: bool,
}

// BGP attributes of the routes of a network.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BgpAttributes {
    pub active: bool,
    pub next_hop_address: Option<String>,
    pub origin: BgpOrigin,
    pub local_preference: u32,
    pub communities: Option<BgpCommunities>,
    pub extended_communities: Vec<ExtendedCommunity>,
    pub asn_set_mode: AsnSetMode,
    pub as_path_segments: Vec<AsPathSegment>,
    pub originator_id: Option<StringIncRange>,
    pub cluster_ids: Vec<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BgpCommunities {
    pub no_export: bool,
    pub no_advertise: bool,
    pub no_export_subconfed: bool,
    pub llgr_stale: bool,
    pub no_llgr: bool,
    // Communities in the "asn:value" format.
    pub private_communities: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtendedCommunity {
    Color(ColorCommunity),
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorCommunity {
    pub co_bits: ColorCoBits,
    pub reserved_bits: u32,
    pub value: u32,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AsPathSegment {
    pub r#type: AsPathSegmentType,
    pub asns: Vec<u32>,
}

// Range of values starting at `start`, incremented by `step`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StringIncRange {
    pub start: String,
    pub step: String,
}

// Routes imported from route table dump files.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportedBgpRoutes {
    pub route_table_format: RouteTableFormat,
    pub ipv4_routes_path: Option<String>,
    pub ipv6_routes_path: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BgpPeerType {
    #[default]
    Unspecified,
    Internal,
    External,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteOrigin {
    #[default]
    Unspecified,
    Internal,
    External,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BgpOrigin {
    #[default]
    Unspecified,
    Igp,
    Egp,
    Incomplete,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
pub enum ColorCoBits {
    #[default]
    #[serde(rename = "unspecified")]
    Unspecified,
    #[serde(rename = "00")]
    Bits00,
    #[serde(rename = "01")]
    Bits01,
    #[serde(rename = "10")]
    Bits10,
    #[serde(rename = "11")]
    Bits11,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AsPathSegmentType {
    #[default]
    Unspecified,
    AsSet,
    AsSeq,
    AsSeqConfederation,
    AsSetConfederation,
}

// How the local AS is added to the AS path of advertised routes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AsnSetMode {
    #[default]
    Unspecified,
    DoNotIncludeLocalAs,
    AsSeq,
    AsSet,
    AsSeqConfederation,
    AsSetConfederation,
    PrependToFirstSegment,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[derive(Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteTableFormat {
    #[default]
    Unspecified,
    Cisco,
    Juniper,
}

// ===== impl BgpPeerType =====

impl BgpPeerType {
    pub(crate) fn to_ixia(self) -> Option<&'static str> {
        match self {
            BgpPeerType::Unspecified => None,
            BgpPeerType::Internal => Some("internal"),
            BgpPeerType::External => Some("external"),
        }
    }
}

// ===== impl RouteOrigin =====

impl RouteOrigin {
    pub(crate) fn to_ixia(self) -> Option<&'static str> {
        match self {
            RouteOrigin::Unspecified => None,
            RouteOrigin::Internal => Some("internal"),
            RouteOrigin::External => Some("external"),
        }
    }
}

// ===== impl BgpOrigin =====

impl BgpOrigin {
    pub(crate) fn to_ixia(self) -> Option<&'static str> {
        match self {
            BgpOrigin::Unspecified => None,
            BgpOrigin::Igp => Some("igp"),
            BgpOrigin::Egp => Some("egp"),
            BgpOrigin::Incomplete => Some("incomplete"),
        }
    }
}

// ===== impl ColorCoBits =====

impl ColorCoBits {
    pub(crate) fn to_ixia(self) -> Option<&'static str> {
        match self {
            ColorCoBits::Unspecified => None,
            ColorCoBits::Bits00 => Some("00"),
            ColorCoBits::Bits01 => Some("01"),
            ColorCoBits::Bits10 => Some("10"),
            ColorCoBits::Bits11 => Some("11"),
        }
    }
}

// ===== impl AsPathSegmentType =====

impl AsPathSegmentType {
    pub(crate) fn to_ixia(self) -> Option<&'static str> {
        match self {
            AsPathSegmentType::Unspecified => None,
            AsPathSegmentType::AsSet => Some("asset"),
            AsPathSegmentType::AsSeq => Some("asseq"),
            AsPathSegmentType::AsSeqConfederation => Some("asseqconfederation"),
            AsPathSegmentType::AsSetConfederation => Some("assetconfederation"),
        }
    }
}

// ===== impl AsnSetMode =====

impl AsnSetMode {
    pub(crate) fn to_ixia(self) -> Option<&'static str> {
        match self {
            AsnSetMode::Unspecified => None,
            AsnSetMode::DoNotIncludeLocalAs => Some("dontincludelocalas"),
            AsnSetMode::AsSeq => Some("includelocalasasasseq"),
            AsnSetMode::AsSet => Some("includelocalasasasset"),
            AsnSetMode::AsSeqConfederation => {
                Some("includelocalasasasseqconfederation")
            }
            AsnSetMode::AsSetConfederation => {
                Some("includelocalasasassetconfederation")
            }
            AsnSetMode::PrependToFirstSegment => {
                Some("prependlocalastofirstsegment")
            }
        }
    }
}
