//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use ipnetwork::{IpNetwork, IpNetworkError};
use serde::{Deserialize, Serialize};

// Length of the `::ffff:0:0/96` prefix of IPv4-mapped IPv6 addresses.
const IPV4_MAPPED_PREFIX_LEN: u8 = 96;

// Address Family identifier.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Deserialize, Serialize)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

// Extension methods for IpAddr.
pub trait IpAddrExt {
    // Returns the address family of this address. IPv4-mapped IPv6 addresses
    // are considered IPv4 addresses.
    fn address_family(&self) -> AddressFamily;

    // Returns the IPv4 address embedded in this address, if any.
    fn to_ipv4_like(&self) -> Option<Ipv4Addr>;
}

// ===== impl AddressFamily =====

impl std::fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AddressFamily::Ipv4 => write!(f, "IPv4"),
            AddressFamily::Ipv6 => write!(f, "IPv6"),
        }
    }
}

// ===== impl IpAddr =====

impl IpAddrExt for IpAddr {
    fn address_family(&self) -> AddressFamily {
        match self.to_ipv4_like() {
            Some(_) => AddressFamily::Ipv4,
            None => AddressFamily::Ipv6,
        }
    }

    fn to_ipv4_like(&self) -> Option<Ipv4Addr> {
        match self {
            IpAddr::V4(addr) => Some(*addr),
            IpAddr::V6(addr) => addr.to_ipv4_mapped(),
        }
    }
}

// ===== global functions =====

// Parses a textual IP address, returning it along with its address family.
// IPv4-mapped IPv6 addresses are returned as IPv4 addresses.
pub fn parse_ip(addr: &str) -> Option<(IpAddr, AddressFamily)> {
    let addr = IpAddr::from_str(addr).ok()?.to_canonical();
    Some((addr, addr.address_family()))
}

// Parses an address in CIDR notation, returning the address exactly as given
// (host bits are preserved) and the prefix length.
//
// IPv4-mapped IPv6 addresses are returned as IPv4 addresses, with the prefix
// length counted from the start of the embedded IPv4 address.
pub fn parse_cidr(cidr: &str) -> Result<(IpAddr, u8), IpNetworkError> {
    let network = IpNetwork::from_str(cidr)?;
    if !cidr.contains('/') {
        return Err(IpNetworkError::InvalidCidrFormat(format!(
            "missing prefix length in {cidr}"
        )));
    }
    match (network.ip(), network.ip().to_canonical()) {
        (IpAddr::V6(_), addr @ IpAddr::V4(_)) => {
            let prefix = network
                .prefix()
                .checked_sub(IPV4_MAPPED_PREFIX_LEN)
                .ok_or(IpNetworkError::InvalidPrefix)?;
            Ok((addr, prefix))
        }
        (addr, _) => Ok((addr, network.prefix())),
    }
}
