// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    InterfaceIpv4, InterfaceIpv6, InterfaceState, InterfaceType, JsonDisplay,
    ProtocolVersion,
};

#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// Information shared among all interface types
pub struct BaseInterface {
    pub name: String,
    #[serde(default, rename = "type")]
    pub iface_type: InterfaceType,
    #[serde(default)]
    pub state: InterfaceState,
    /// IPv4 information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<InterfaceIpv4>,
    /// IPv6 information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<InterfaceIpv6>,
}

impl BaseInterface {
    pub fn new(name: String, iface_type: InterfaceType) -> Self {
        Self {
            name,
            iface_type,
            state: InterfaceState::Up,
            ..Default::default()
        }
    }

    /// First static address of the specified protocol version.
    ///
    /// `None` when the interface holds no section for this protocol,
    /// `Some(None)` when the section exists but has no address in it.
    pub(crate) fn first_ip_of(
        &self,
        version: ProtocolVersion,
    ) -> Option<Option<String>> {
        let addrs = match version {
            ProtocolVersion::Ipv4 => {
                self.ipv4.as_ref().map(|i| i.addresses.as_deref())
            }
            ProtocolVersion::Ipv6 => {
                self.ipv6.as_ref().map(|i| i.addresses.as_deref())
            }
        }?;
        Some(
            addrs
                .and_then(|a| a.first())
                .map(|addr| addr.ip.clone()),
        )
    }
}
