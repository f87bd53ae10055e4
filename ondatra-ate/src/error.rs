//
// Copyright (c) The Holo Core Contributors
//
// SPDX-License-Identifier: MIT
//

use ondatra_utils::ip::AddressFamily;

//
// Type aliases.
//
pub type Result<T> = std::result::Result<T, Error>;

//
// ATE configuration errors.
//
// Most errors stem from an invalid topology description and are flagged as
// user errors by `is_user_error`.
//
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateInterface(String),
    UnknownInterface(String),
    InvalidAddress(String),
    MissingIpStack(String, AddressFamily),
    UnspecifiedPeerType(String),
    MissingNetworkAddress(String, AddressFamily),
    UnspecifiedRouteOrigin,
    UnspecifiedBgpOrigin,
    UnspecifiedAsnSetMode,
    UnspecifiedCoBits,
    UnspecifiedAsPathSegmentType,
    InvalidCommunity(String),
    ImportedRoutesConflict(String),
    ImportedRoutesWithoutPeer(String),
    UnspecifiedRouteTableFormat,
    // Internal errors.
    InvalidOriginatorId(&'static str, String),
    InvalidClusterId(String),
}

// ===== impl Error =====

impl Error {
    // Returns whether the error was caused by the topology description rather
    // than by the translation itself.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Error::InvalidOriginatorId(..) | Error::InvalidClusterId(_)
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::DuplicateInterface(name) => {
                write!(f, "interface {name:?} already added")
            }
            Error::UnknownInterface(name) => {
                write!(f, "interface {name:?} not found")
            }
            Error::InvalidAddress(addr) => {
                write!(f, "could not parse {addr:?} as an IP address")
            }
            Error::MissingIpStack(peer, af) => {
                write!(f, "BGP peer {peer:?} requires an {af} address")
            }
            Error::UnspecifiedPeerType(peer) => {
                write!(f, "BGP peer {peer:?} type not specified")
            }
            Error::MissingNetworkAddress(network, af) => {
                write!(
                    f,
                    "need address defined for {af} network group {network:?}"
                )
            }
            Error::UnspecifiedRouteOrigin => {
                write!(f, "route origin not specified")
            }
            Error::UnspecifiedBgpOrigin => {
                write!(f, "BGP route origin not specified")
            }
            Error::UnspecifiedAsnSetMode => {
                write!(f, "BGP ASN set mode not specified")
            }
            Error::UnspecifiedCoBits => {
                write!(f, "extended community color bits not specified")
            }
            Error::UnspecifiedAsPathSegmentType => {
                write!(f, "AS path segment type not specified")
            }
            Error::InvalidCommunity(community) => {
                write!(f, "invalid format for BGP community {community:?}")
            }
            Error::ImportedRoutesConflict(network) => {
                write!(
                    f,
                    "cannot import routes for network group {network:?} with \
                     any other routes/attributes configured"
                )
            }
            Error::ImportedRoutesWithoutPeer(network) => {
                write!(
                    f,
                    "cannot import routes for network group {network:?} \
                     without associated BGP peer"
                )
            }
            Error::UnspecifiedRouteTableFormat => {
                write!(f, "route table format not specified")
            }
            Error::InvalidOriginatorId(field, addr) => {
                write!(
                    f,
                    "originator ID {field} {addr:?} is not a valid IPv4 address"
                )
            }
            Error::InvalidClusterId(addr) => {
                write!(f, "cluster ID {addr:?} is not a valid IPv4 address")
            }
        }
    }
}

impl std::error::Error for Error {}
