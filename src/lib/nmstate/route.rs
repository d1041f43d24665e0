// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::JsonDisplay;

#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonDisplay,
)]
#[non_exhaustive]
/// IP routing configuration
pub struct Routes {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Static routes. The form view stores one default route per shown
    /// protocol version, IPv4 first.
    pub config: Option<Vec<RouteEntry>>,
}

impl Routes {
    pub fn new(config: Vec<RouteEntry>) -> Self {
        Self {
            config: Some(config),
        }
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// Route entry
pub struct RouteEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Route destination address or network
    pub destination: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "next-hop-address"
    )]
    /// Route next hop IP address.
    /// Serialize and deserialize to/from `next-hop-address`.
    pub next_hop_addr: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "next-hop-interface"
    )]
    /// Route next hop interface name.
    /// Serialize and deserialize to/from `next-hop-interface`.
    pub next_hop_iface: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_u32_or_string"
    )]
    /// Route table id. [RouteEntry::MAIN_ROUTE_TABLE] for main route table.
    pub table_id: Option<u32>,
}

impl RouteEntry {
    pub const MAIN_ROUTE_TABLE: u32 = 254;

    /// Default route through `next_hop_addr` on `next_hop_iface` in the
    /// main route table.
    pub fn new_default_gateway(
        destination: &str,
        next_hop_addr: &str,
        next_hop_iface: &str,
    ) -> Self {
        Self {
            destination: Some(destination.to_string()),
            next_hop_addr: Some(next_hop_addr.to_string()),
            next_hop_iface: Some(next_hop_iface.to_string()),
            table_id: Some(Self::MAIN_ROUTE_TABLE),
        }
    }
}
