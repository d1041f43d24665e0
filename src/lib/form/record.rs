// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::StaticNetError;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct MacInterfaceMapEntry {
    #[serde(default, alias = "mac_address")]
    pub mac_address: String,
    #[serde(default, alias = "logical_nic_name")]
    pub logical_nic_name: String,
}

impl MacInterfaceMapEntry {
    pub fn new(mac_address: &str, logical_nic_name: &str) -> Self {
        Self {
            mac_address: mac_address.to_string(),
            logical_nic_name: logical_nic_name.to_string(),
        }
    }
}

pub type MacInterfaceMap = Vec<MacInterfaceMapEntry>;

/// Persisted static network configuration of a single host.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct HostStaticNetworkConfig {
    /// NMState YAML of this host
    #[serde(default, alias = "network_yaml")]
    pub network_yaml: String,
    #[serde(default, alias = "mac_interface_map")]
    pub mac_interface_map: MacInterfaceMap,
}

impl HostStaticNetworkConfig {
    pub fn new(
        network_yaml: String,
        mac_interface_map: MacInterfaceMap,
    ) -> Self {
        Self {
            network_yaml,
            mac_interface_map,
        }
    }
}

/// The subset of the backend infra-env this crate consumes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct InfraEnv {
    pub id: String,
    /// JSON encoded list of [HostStaticNetworkConfig]
    #[serde(
        default,
        alias = "static_network_config",
        skip_serializing_if = "Option::is_none"
    )]
    pub static_network_config: Option<String>,
}

impl InfraEnv {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            static_network_config: None,
        }
    }

    /// Parsed static network config, `None` if the infra-env has none.
    pub fn static_network_config(
        &self,
    ) -> Result<Option<Vec<HostStaticNetworkConfig>>, StaticNetError> {
        match self.static_network_config.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => serde_json::from_str(s).map(Some).map_err(|e| {
                StaticNetError::malformed(format!(
                    "Invalid static network config of infra-env {}: {e}",
                    self.id
                ))
            }),
        }
    }

    pub fn set_static_network_config(
        &mut self,
        records: &[HostStaticNetworkConfig],
    ) -> Result<(), StaticNetError> {
        self.static_network_config = Some(serde_json::to_string(records)?);
        Ok(())
    }
}
