// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{BaseInterface, InterfaceType, JsonDisplay};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonDisplay)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// VLAN interface
///
/// The yaml output of a VLAN on top of `eth0`:
/// ```yml
/// - name: eth0.100
///   type: vlan
///   state: up
///   vlan:
///     base-iface: eth0
///     id: 100
/// ```
pub struct VlanInterface {
    #[serde(flatten)]
    pub base: BaseInterface,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<VlanConfig>,
}

impl VlanInterface {
    pub fn new(base: BaseInterface, vlan: VlanConfig) -> Self {
        Self {
            base,
            vlan: Some(vlan),
        }
    }

    pub fn vlan_id(&self) -> Option<u16> {
        self.vlan.as_ref().and_then(|v| v.id)
    }
}

impl Default for VlanInterface {
    fn default() -> Self {
        Self {
            base: BaseInterface {
                iface_type: InterfaceType::Vlan,
                ..Default::default()
            },
            vlan: None,
        }
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, JsonDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct VlanConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_iface: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_u16_or_string"
    )]
    pub id: Option<u16>,
}

impl VlanConfig {
    pub fn new(base_iface: &str, id: u16) -> Self {
        Self {
            base_iface: Some(base_iface.to_string()),
            id: Some(id),
        }
    }
}

/// Name of VLAN interface on top of `base_iface`, e.g. `eth0.100`.
pub fn vlan_nic_name(base_iface: &str, vlan_id: u16) -> String {
    format!("{base_iface}.{vlan_id}")
}
