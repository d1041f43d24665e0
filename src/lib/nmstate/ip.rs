// SPDX-License-Identifier: Apache-2.0

use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{JsonDisplay, StaticNetError};

pub(crate) const IPV4_ADDR_LEN: u8 = 32;
pub(crate) const IPV6_ADDR_LEN: u8 = 128;

/// IPv4 configuration of interface.
/// Example YAML output of interface holding static IPv4:
/// ```yaml
/// ---
/// interfaces:
/// - name: eth0
///   type: ethernet
///   state: up
///   ipv4:
///     enabled: true
///     dhcp: false
///     address:
///     - ip: 192.0.2.252
///       prefix-length: 24
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "kebab-case")]
pub struct InterfaceIpv4 {
    /// Whether IPv4 stack is enabled.
    /// Undefined means true.
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_bool_or_string"
    )]
    pub enabled: Option<bool>,
    /// Whether DHCPv4 is enabled.
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_bool_or_string"
    )]
    pub dhcp: Option<bool>,
    /// IPv4 addresses.
    #[serde(skip_serializing_if = "Option::is_none", rename = "address")]
    pub addresses: Option<Vec<InterfaceIpAddr>>,
}

impl Default for InterfaceIpv4 {
    /// Create [InterfaceIpv4] with IP disabled.
    fn default() -> Self {
        Self {
            enabled: Some(false),
            dhcp: None,
            addresses: None,
        }
    }
}

impl InterfaceIpv4 {
    /// Static only configuration holding single address.
    pub fn new_static(addr: InterfaceIpAddr) -> Self {
        Self {
            enabled: Some(true),
            dhcp: Some(false),
            addresses: Some(vec![addr]),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }
}

/// IPv6 configurations of interface.
/// Example output of interface holding static IPv6:
/// ```yaml
/// ---
/// interfaces:
/// - name: eth0
///   type: ethernet
///   state: up
///   ipv6:
///     enabled: true
///     dhcp: false
///     autoconf: false
///     address:
///     - ip: 2001:db8:1::1
///       prefix-length: 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "kebab-case")]
pub struct InterfaceIpv6 {
    /// Whether IPv6 stack is enable.
    /// Undefined means true.
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_bool_or_string"
    )]
    pub enabled: Option<bool>,
    /// Whether DHCPv6 enabled.
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_bool_or_string"
    )]
    pub dhcp: Option<bool>,
    /// Whether autoconf via IPv6 router announcement enabled.
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_bool_or_string"
    )]
    pub autoconf: Option<bool>,
    /// IPv6 addresses.
    #[serde(skip_serializing_if = "Option::is_none", rename = "address")]
    pub addresses: Option<Vec<InterfaceIpAddr>>,
}

impl Default for InterfaceIpv6 {
    /// Create [InterfaceIpv6] with IP disabled.
    fn default() -> Self {
        Self {
            enabled: Some(false),
            dhcp: None,
            autoconf: None,
            addresses: None,
        }
    }
}

impl InterfaceIpv6 {
    /// Static only configuration holding single address.
    pub fn new_static(addr: InterfaceIpAddr) -> Self {
        Self {
            enabled: Some(true),
            dhcp: Some(false),
            autoconf: Some(false),
            addresses: Some(vec![addr]),
        }
    }
}

/// IP Address
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct InterfaceIpAddr {
    /// IP address, kept in the notation it was written in.
    #[serde(deserialize_with = "crate::deserializer::ip_addr_string")]
    pub ip: String,
    #[serde(deserialize_with = "crate::deserializer::u8_or_string")]
    /// Prefix length.
    /// Serialize and deserialize to/from `prefix-length`.
    pub prefix_length: u8,
}

impl InterfaceIpAddr {
    pub fn new(ip: impl Into<String>, prefix_length: u8) -> Self {
        Self {
            ip: ip.into(),
            prefix_length,
        }
    }
}

impl std::convert::TryFrom<&str> for InterfaceIpAddr {
    type Error = StaticNetError;

    /// Parse `ip/prefix` or bare `ip` (host prefix assumed).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (ip_str, prefix_str) = match value.split_once('/') {
            Some((ip, prefix)) => (ip, Some(prefix)),
            None => (value, None),
        };
        let ip = IpAddr::from_str(ip_str).map_err(|e| {
            let e = StaticNetError::invalid(format!(
                "Invalid IP address {ip_str}: {e}"
            ));
            log::error!("{e}");
            e
        })?;
        let max_len = if ip.is_ipv6() {
            IPV6_ADDR_LEN
        } else {
            IPV4_ADDR_LEN
        };
        let prefix_length = match prefix_str {
            None => max_len,
            Some(p) => p.parse::<u8>().map_err(|parse_error| {
                let e = StaticNetError::invalid(format!(
                    "Invalid IP address {value}: {parse_error}"
                ));
                log::error!("{e}");
                e
            })?,
        };
        if prefix_length > max_len {
            return Err(StaticNetError::invalid(format!(
                "Invalid network prefix length '{prefix_length}' in \
                 '{value}', should be in the range of 0 to {max_len}"
            )));
        }
        Ok(Self::new(ip_str, prefix_length))
    }
}

/// Network address of `ip` under `prefix_length`.
pub(crate) fn apply_ip_prefix_len(ip: IpAddr, prefix_length: u8) -> IpAddr {
    if prefix_length == 0 {
        return if ip.is_ipv6() {
            IpAddr::V6(0.into())
        } else {
            IpAddr::V4(0.into())
        };
    }

    if (ip.is_ipv6() && prefix_length >= IPV6_ADDR_LEN)
        || (ip.is_ipv4() && prefix_length >= IPV4_ADDR_LEN)
    {
        return ip;
    }

    match ip {
        IpAddr::V6(i) => Ipv6Addr::from(
            u128::from(i) & (u128::MAX << (IPV6_ADDR_LEN - prefix_length)),
        )
        .into(),
        IpAddr::V4(i) => Ipv4Addr::from(
            u32::from(i) & (u32::MAX << (IPV4_ADDR_LEN - prefix_length)),
        )
        .into(),
    }
}

/// Last address of the network `ip/prefix_length`.
pub(crate) fn last_ip_of_network(ip: IpAddr, prefix_length: u8) -> IpAddr {
    match ip {
        IpAddr::V6(i) => {
            if prefix_length >= IPV6_ADDR_LEN {
                return ip;
            }
            let host_mask = u128::MAX
                .checked_shr(u32::from(prefix_length))
                .unwrap_or(0);
            Ipv6Addr::from(u128::from(i) | host_mask).into()
        }
        IpAddr::V4(i) => {
            if prefix_length >= IPV4_ADDR_LEN {
                return ip;
            }
            let host_mask =
                u32::MAX.checked_shr(u32::from(prefix_length)).unwrap_or(0);
            Ipv4Addr::from(u32::from(i) | host_mask).into()
        }
    }
}

/// Whether `ip` belongs to the network `net/prefix_length`.
pub(crate) fn is_ip_in_network(
    ip: IpAddr,
    net: IpAddr,
    prefix_length: u8,
) -> bool {
    ip.is_ipv4() == net.is_ipv4()
        && apply_ip_prefix_len(ip, prefix_length)
            == apply_ip_prefix_len(net, prefix_length)
}
