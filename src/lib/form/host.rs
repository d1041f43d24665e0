// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{BondMode, ProtocolVersion, StaticProtocolType};

/// Host IP per protocol version. Empty string means not configured yet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct HostIps {
    #[serde(default)]
    pub ipv4: String,
    #[serde(default)]
    pub ipv6: String,
}

impl HostIps {
    pub fn get(&self, version: ProtocolVersion) -> &str {
        match version {
            ProtocolVersion::Ipv4 => self.ipv4.as_str(),
            ProtocolVersion::Ipv6 => self.ipv6.as_str(),
        }
    }

    pub fn set(&mut self, version: ProtocolVersion, ip: String) {
        match version {
            ProtocolVersion::Ipv4 => self.ipv4 = ip,
            ProtocolVersion::Ipv6 => self.ipv6 = ip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FormViewHost {
    /// MAC address of the host NIC, unused when bonded.
    #[serde(default)]
    pub mac_address: String,
    #[serde(default)]
    pub ips: HostIps,
    #[serde(default)]
    pub use_bond: bool,
    #[serde(default)]
    pub bond_type: BondMode,
    /// MAC address of first bond port
    #[serde(default)]
    pub bond_primary_interface: String,
    /// MAC address of second bond port
    #[serde(default)]
    pub bond_secondary_interface: String,
}

impl FormViewHost {
    pub fn new(mac_address: &str) -> Self {
        Self {
            mac_address: mac_address.to_string(),
            ..Default::default()
        }
    }

    pub fn new_bonded(
        bond_type: BondMode,
        primary_mac: &str,
        secondary_mac: &str,
    ) -> Self {
        Self {
            use_bond: true,
            bond_type,
            bond_primary_interface: primary_mac.to_string(),
            bond_secondary_interface: secondary_mac.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ip(mut self, version: ProtocolVersion, ip: &str) -> Self {
        self.ips.set(version, ip.to_string());
        self
    }

    /// Bonding takes effect only when enabled with both port MACs given.
    pub fn is_bonded(&self) -> bool {
        self.use_bond
            && !self.bond_primary_interface.is_empty()
            && !self.bond_secondary_interface.is_empty()
    }

    /// Drop IPs of protocol versions not shown for `protocol_type`.
    pub(crate) fn retain_shown_ips(
        &mut self,
        protocol_type: StaticProtocolType,
    ) {
        let mut ips = HostIps::default();
        for version in crate::shown_protocol_versions(protocol_type) {
            ips.set(*version, self.ips.get(*version).to_string());
        }
        self.ips = ips;
    }
}
