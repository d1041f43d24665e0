// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ProtocolVersion, StaticNetError, StaticProtocolType};

/// Network in `ip/prefix-length` form as the user typed it. Both parts may
/// still be empty while the form is being filled.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Cidr {
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub prefix_length: Option<u8>,
}

impl Cidr {
    pub fn new(ip: &str, prefix_length: u8) -> Self {
        Self {
            ip: ip.to_string(),
            prefix_length: Some(prefix_length),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ip.is_empty() && self.prefix_length.is_none()
    }
}

impl std::fmt::Display for Cidr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        match self.prefix_length {
            Some(len) => write!(f, "{}/{len}", self.ip),
            None => write!(f, "{}/", self.ip),
        }
    }
}

impl FromStr for Cidr {
    type Err = StaticNetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::default());
        }
        let Some((ip, prefix)) = s.split_once('/') else {
            return Err(StaticNetError::invalid(format!(
                "Invalid CIDR '{s}', expecting 'ip/prefix-length' format"
            )));
        };
        let prefix_length = if prefix.is_empty() {
            None
        } else {
            Some(prefix.parse::<u8>().map_err(|e| {
                StaticNetError::invalid(format!(
                    "Invalid prefix length '{prefix}' in CIDR '{s}': {e}"
                ))
            })?)
        };
        Ok(Self {
            ip: ip.to_string(),
            prefix_length,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct IpConfig {
    #[serde(default)]
    pub machine_network: Cidr,
    #[serde(default)]
    pub gateway: String,
}

impl IpConfig {
    pub fn new(machine_network: Cidr, gateway: &str) -> Self {
        Self {
            machine_network,
            gateway: gateway.to_string(),
        }
    }
}

/// One [IpConfig] per protocol version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub struct IpConfigs {
    #[serde(default)]
    pub ipv4: IpConfig,
    #[serde(default)]
    pub ipv6: IpConfig,
}

impl IpConfigs {
    pub fn get(&self, version: ProtocolVersion) -> &IpConfig {
        match version {
            ProtocolVersion::Ipv4 => &self.ipv4,
            ProtocolVersion::Ipv6 => &self.ipv6,
        }
    }

    pub fn get_mut(&mut self, version: ProtocolVersion) -> &mut IpConfig {
        match version {
            ProtocolVersion::Ipv4 => &mut self.ipv4,
            ProtocolVersion::Ipv6 => &mut self.ipv6,
        }
    }
}

/// Settings shared by all hosts of the infra-env.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct NetworkWideConfig {
    #[serde(default)]
    pub protocol_type: StaticProtocolType,
    #[serde(default)]
    pub use_vlan: bool,
    #[serde(default)]
    pub vlan_id: Option<u16>,
    /// Comma separated DNS servers
    #[serde(default)]
    pub dns: String,
    #[serde(default)]
    pub ip_configs: IpConfigs,
}

impl NetworkWideConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// VLAN ID to apply, `None` unless VLAN is enabled with an ID.
    pub fn vlan(&self) -> Option<u16> {
        if self.use_vlan { self.vlan_id } else { None }
    }

    /// DNS servers with surrounding whitespace and empty entries removed.
    pub fn dns_servers(&self) -> Vec<String> {
        self.dns
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn shown_protocol_versions(&self) -> &'static [ProtocolVersion] {
        crate::shown_protocol_versions(self.protocol_type)
    }
}
