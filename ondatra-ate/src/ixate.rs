//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::collections::BTreeMap;
use std::net::IpAddr;

use derive_new::new;
use ondatra_ixconfig::{
    Ixnetwork, Topology, TopologyBgpIpv4Peer, TopologyBgpIpv6Peer,
    TopologyDeviceGroup, TopologyEthernet, TopologyIpv4, TopologyIpv4Loopback,
    TopologyIpv6, TopologyIpv6Loopback, TopologyNetworkGroup, TopologyVlan,
    Vport, XPath, multivalue_bool, multivalue_str, multivalue_true,
    multivalue_u32,
};
use ondatra_utils::ip::{AddressFamily, IpAddrExt, parse_cidr, parse_ip};
use tracing::debug;

use crate::error::{Error, Result};
use crate::topology::{
    AteTopology, BgpPeer, InterfaceConfig, IpConfig, RouteTableFormat,
};

// Builder of the IxNetwork config of an ATE.
#[derive(Debug, Default)]
pub struct IxAte {
    cfg: Ixnetwork,
    intfs: BTreeMap<String, Interface>,
}

// IxNetwork nodes created for an interface.
#[derive(Debug, Default)]
pub(crate) struct Interface {
    // Index of the interface topology. Each topology holds a single device
    // group.
    pub(crate) topology: usize,
    pub(crate) net_to_network_group: BTreeMap<String, usize>,
    pub(crate) net_to_route_tables: BTreeMap<String, RouteTables>,
}

// Route table files to import into the BGP route properties of a network.
#[derive(Clone, Debug, Eq, new, PartialEq)]
pub struct RouteTables {
    pub format: RouteTableFormat,
    pub ipv4: Option<String>,
    pub ipv6: Option<String>,
}

// ===== impl IxAte =====

impl IxAte {
    pub fn new() -> IxAte {
        Default::default()
    }

    // Builds the config of a whole topology. Networks are added once every
    // interface is in place.
    pub fn from_topology(topology: &AteTopology) -> Result<IxAte> {
        let mut ate = IxAte::new();
        for ifc in &topology.interfaces {
            ate.add_interface(ifc)?;
        }
        for ifc in &topology.interfaces {
            ate.add_networks(ifc)?;
        }
        Ok(ate)
    }

    pub fn config(&self) -> &Ixnetwork {
        &self.cfg
    }

    pub fn into_config(self) -> Ixnetwork {
        self.cfg
    }

    // Adds the topology, device group and protocol stacks of an interface.
    pub fn add_interface(&mut self, ifc: &InterfaceConfig) -> Result<()> {
        if self.intfs.contains_key(&ifc.name) {
            return Err(Error::DuplicateInterface(ifc.name.clone()));
        }
        debug!(interface = %ifc.name, port = %ifc.port, "adding interface");

        let mut eth = ethernet(ifc)?;
        let mut ipv4_loopback = ifc
            .ipv4_loopback_cidr
            .as_deref()
            .map(|cidr| ipv4_loopback(&ifc.name, cidr))
            .transpose()?;
        let mut ipv6_loopback = ifc
            .ipv6_loopback_cidr
            .as_deref()
            .map(|cidr| ipv6_loopback(&ifc.name, cidr))
            .transpose()?;

        for peer in &ifc.bgp_peers {
            let (addr, af) = parse_ip(&peer.peer_address).ok_or_else(|| {
                Error::InvalidAddress(peer.peer_address.clone())
            })?;
            let name = peer.name.clone().unwrap_or_else(|| {
                format!("{} BGP Peer {}", ifc.name, peer.peer_address)
            });
            let missing_stack = || Error::MissingIpStack(name.clone(), af);
            match (af, peer.on_loopback) {
                (AddressFamily::Ipv4, false) => eth
                    .ipv4
                    .first_mut()
                    .ok_or_else(missing_stack)?
                    .bgp_ipv4_peer
                    .push(bgp_ipv4_peer(&name, peer, addr)?),
                (AddressFamily::Ipv4, true) => ipv4_loopback
                    .as_mut()
                    .ok_or_else(missing_stack)?
                    .bgp_ipv4_peer
                    .push(bgp_ipv4_peer(&name, peer, addr)?),
                (AddressFamily::Ipv6, false) => eth
                    .ipv6
                    .first_mut()
                    .ok_or_else(missing_stack)?
                    .bgp_ipv6_peer
                    .push(bgp_ipv6_peer(&name, peer, addr)?),
                (AddressFamily::Ipv6, true) => ipv6_loopback
                    .as_mut()
                    .ok_or_else(missing_stack)?
                    .bgp_ipv6_peer
                    .push(bgp_ipv6_peer(&name, peer, addr)?),
            }
        }

        let vport = self.vport(&ifc.port);
        let topology = Topology {
            name: Some(format!("{} Topology", ifc.name)),
            vports: vec![XPath::root().list_elem("vport", vport).to_string()],
            device_group: vec![TopologyDeviceGroup {
                name: Some(ifc.name.clone()),
                multiplier: Some(1),
                enabled: multivalue_true(),
                ethernet: vec![eth],
                ipv4_loopback: ipv4_loopback.into_iter().collect(),
                ipv6_loopback: ipv6_loopback.into_iter().collect(),
                ..Default::default()
            }],
            ..Default::default()
        };
        self.cfg.topology.push(topology);
        self.intfs.insert(
            ifc.name.clone(),
            Interface {
                topology: self.cfg.topology.len() - 1,
                ..Default::default()
            },
        );
        Ok(())
    }

    // Returns the network group created for the given network.
    pub fn network_group(
        &self,
        ifc_name: &str,
        net_name: &str,
    ) -> Option<&TopologyNetworkGroup> {
        let intf = self.intfs.get(ifc_name)?;
        let index = *intf.net_to_network_group.get(net_name)?;
        self.device_group(intf).network_group.get(index)
    }

    // Returns the route tables imported by the given network.
    pub fn route_tables(
        &self,
        ifc_name: &str,
        net_name: &str,
    ) -> Option<&RouteTables> {
        self.intfs.get(ifc_name)?.net_to_route_tables.get(net_name)
    }

    pub(crate) fn interface(&self, ifc_name: &str) -> Result<&Interface> {
        self.intfs
            .get(ifc_name)
            .ok_or_else(|| Error::UnknownInterface(ifc_name.to_owned()))
    }

    pub(crate) fn interface_mut(
        &mut self,
        ifc_name: &str,
    ) -> Result<(&mut Interface, &mut TopologyDeviceGroup)> {
        let intf = self
            .intfs
            .get_mut(ifc_name)
            .ok_or_else(|| Error::UnknownInterface(ifc_name.to_owned()))?;
        let dg = &mut self.cfg.topology[intf.topology].device_group[0];
        Ok((intf, dg))
    }

    pub(crate) fn device_group(
        &self,
        intf: &Interface,
    ) -> &TopologyDeviceGroup {
        &self.cfg.topology[intf.topology].device_group[0]
    }

    // Returns the index of the vport of the given port, creating it if needed.
    fn vport(&mut self, port: &str) -> usize {
        if let Some(index) = self
            .cfg
            .vport
            .iter()
            .position(|vport| vport.name.as_deref() == Some(port))
        {
            return index;
        }
        self.cfg.vport.push(Vport {
            name: Some(port.to_owned()),
            ..Default::default()
        });
        self.cfg.vport.len() - 1
    }
}

// ===== helper functions =====

fn ethernet(ifc: &InterfaceConfig) -> Result<TopologyEthernet> {
    let mut eth = TopologyEthernet {
        name: Some(format!("{} Ethernet", ifc.name)),
        ..Default::default()
    };
    if let Some(config) = &ifc.ethernet {
        eth.mac = config.mac_address.as_deref().and_then(multivalue_str);
        eth.mtu = config.mtu.and_then(multivalue_u32);
        if let Some(vlan_id) = config.vlan_id {
            eth.enable_vlans = multivalue_true();
            eth.vlan_count = Some(1);
            eth.vlan = vec![TopologyVlan {
                vlan_id: multivalue_u32(vlan_id.into()),
                ..Default::default()
            }];
        }
    }
    if let Some(config) = &ifc.ipv4 {
        let (addr, prefix, gateway) = ip_stack(config, AddressFamily::Ipv4)?;
        eth.ipv4 = vec![TopologyIpv4 {
            name: Some(format!("{} IPv4", ifc.name)),
            address: multivalue_str(addr.to_string()),
            prefix: multivalue_u32(prefix.into()),
            gateway_ip: gateway.and_then(|gw| multivalue_str(gw.to_string())),
            resolve_gateway: multivalue_true(),
            ..Default::default()
        }];
    }
    if let Some(config) = &ifc.ipv6 {
        let (addr, prefix, gateway) = ip_stack(config, AddressFamily::Ipv6)?;
        eth.ipv6 = vec![TopologyIpv6 {
            name: Some(format!("{} IPv6", ifc.name)),
            address: multivalue_str(addr.to_string()),
            prefix: multivalue_u32(prefix.into()),
            gateway_ip: gateway.and_then(|gw| multivalue_str(gw.to_string())),
            resolve_gateway: multivalue_true(),
            ..Default::default()
        }];
    }
    Ok(eth)
}

// Parses the address, prefix length and gateway of an IP stack, checking
// they belong to the expected address family.
fn ip_stack(
    config: &IpConfig,
    af: AddressFamily,
) -> Result<(IpAddr, u8, Option<IpAddr>)> {
    let (addr, prefix) = parse_cidr_af(&config.address_cidr, af)?;
    let gateway = config
        .default_gateway
        .as_deref()
        .map(|gateway| match parse_ip(gateway) {
            Some((gateway, gateway_af)) if gateway_af == af => Ok(gateway),
            _ => Err(Error::InvalidAddress(gateway.to_owned())),
        })
        .transpose()?;
    Ok((addr, prefix, gateway))
}

fn ipv4_loopback(ifc_name: &str, cidr: &str) -> Result<TopologyIpv4Loopback> {
    let (addr, prefix) = parse_cidr_af(cidr, AddressFamily::Ipv4)?;
    Ok(TopologyIpv4Loopback {
        name: Some(format!("{ifc_name} IPv4 Loopback")),
        address: multivalue_str(addr.to_string()),
        prefix: multivalue_u32(prefix.into()),
        ..Default::default()
    })
}

fn ipv6_loopback(ifc_name: &str, cidr: &str) -> Result<TopologyIpv6Loopback> {
    let (addr, prefix) = parse_cidr_af(cidr, AddressFamily::Ipv6)?;
    Ok(TopologyIpv6Loopback {
        name: Some(format!("{ifc_name} IPv6 Loopback")),
        address: multivalue_str(addr.to_string()),
        prefix: multivalue_u32(prefix.into()),
        ..Default::default()
    })
}

fn parse_cidr_af(cidr: &str, af: AddressFamily) -> Result<(IpAddr, u8)> {
    match parse_cidr(cidr) {
        Ok((addr, prefix)) if addr.address_family() == af => Ok((addr, prefix)),
        _ => Err(Error::InvalidAddress(cidr.to_owned())),
    }
}

fn bgp_ipv4_peer(
    name: &str,
    peer: &BgpPeer,
    addr: IpAddr,
) -> Result<TopologyBgpIpv4Peer> {
    let peer_type = peer
        .r#type
        .to_ixia()
        .ok_or_else(|| Error::UnspecifiedPeerType(name.to_owned()))?;
    Ok(TopologyBgpIpv4Peer {
        name: Some(name.to_owned()),
        active: multivalue_bool(peer.active),
        dut_ip: multivalue_str(addr.to_string()),
        r#type: multivalue_str(peer_type),
        local_as2_bytes: multivalue_u32(peer.local_asn),
        hold_timer: peer.hold_timer_sec.and_then(multivalue_u32),
        keepalive_timer: peer.keepalive_timer_sec.and_then(multivalue_u32),
        ..Default::default()
    })
}

fn bgp_ipv6_peer(
    name: &str,
    peer: &BgpPeer,
    addr: IpAddr,
) -> Result<TopologyBgpIpv6Peer> {
    let peer_type = peer
        .r#type
        .to_ixia()
        .ok_or_else(|| Error::UnspecifiedPeerType(name.to_owned()))?;
    Ok(TopologyBgpIpv6Peer {
        name: Some(name.to_owned()),
        active: multivalue_bool(peer.active),
        dut_ip: multivalue_str(addr.to_string()),
        r#type: multivalue_str(peer_type),
        local_as2_bytes: multivalue_u32(peer.local_asn),
        hold_timer: peer.hold_timer_sec.and_then(multivalue_u32),
        keepalive_timer: peer.keepalive_timer_sec.and_then(multivalue_u32),
        ..Default::default()
    })
}
