// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::JsonDisplay;
use crate::nmstate::ip::{IPV4_ADDR_LEN, IPV6_ADDR_LEN};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonDisplay,
)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolVersion {
    Ipv4,
    Ipv6,
}

impl ProtocolVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ipv4 => "ipv4",
            Self::Ipv6 => "ipv6",
        }
    }

    pub fn max_prefix_length(&self) -> u8 {
        match self {
            Self::Ipv4 => IPV4_ADDR_LEN,
            Self::Ipv6 => IPV6_ADDR_LEN,
        }
    }

    /// Destination of the default route for this family.
    pub fn default_route_destination(&self) -> &'static str {
        match self {
            Self::Ipv4 => "0.0.0.0/0",
            Self::Ipv6 => "::/0",
        }
    }

    /// Whether `ip` belongs to this address family.
    pub fn matches(&self, ip: &IpAddr) -> bool {
        match self {
            Self::Ipv4 => ip.is_ipv4(),
            Self::Ipv6 => ip.is_ipv6(),
        }
    }

    /// Human readable label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ipv4 => "IPv4",
            Self::Ipv6 => "IPv6",
        }
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonDisplay,
)]
#[serde(rename_all = "camelCase")]
pub enum StaticProtocolType {
    #[default]
    Ipv4,
    DualStack,
}

const IPV4_ONLY: [ProtocolVersion; 1] = [ProtocolVersion::Ipv4];
const DUAL_STACK: [ProtocolVersion; 2] =
    [ProtocolVersion::Ipv4, ProtocolVersion::Ipv6];

/// Protocol versions the form shows for the stack type, IPv4 always first.
pub fn shown_protocol_versions(
    protocol_type: StaticProtocolType,
) -> &'static [ProtocolVersion] {
    match protocol_type {
        StaticProtocolType::Ipv4 => &IPV4_ONLY,
        StaticProtocolType::DualStack => &DUAL_STACK,
    }
}

pub fn show_protocol_version(
    protocol_type: StaticProtocolType,
    version: ProtocolVersion,
) -> bool {
    shown_protocol_versions(protocol_type).contains(&version)
}
