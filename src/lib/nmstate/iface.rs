// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    BaseInterface, BondInterface, EthernetInterface, InterfaceType,
    JsonDisplay, VlanInterface,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonDisplay)]
#[serde(rename_all = "kebab-case", untagged)]
#[non_exhaustive]
/// Network interface kinds the form view can produce.
pub enum Interface {
    /// Ethernet interface.
    Ethernet(Box<EthernetInterface>),
    /// VLAN Interface
    Vlan(Box<VlanInterface>),
    /// Bond Interface
    Bond(Box<BondInterface>),
}

impl<'de> Deserialize<'de> for Interface {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = serde_json::Value::deserialize(deserializer)?;

        // It is safe to do `v["type"]` here as serde_json will
        // return `json!(null)` for undefined property
        match Option::deserialize(&v["type"])
            .map_err(serde::de::Error::custom)?
        {
            Some(InterfaceType::Ethernet) => {
                let inner = EthernetInterface::deserialize(v)
                    .map_err(serde::de::Error::custom)?;
                Ok(Interface::Ethernet(Box::new(inner)))
            }
            Some(InterfaceType::Vlan) => {
                let inner = VlanInterface::deserialize(v)
                    .map_err(serde::de::Error::custom)?;
                Ok(Interface::Vlan(Box::new(inner)))
            }
            Some(InterfaceType::Bond) => {
                let inner = BondInterface::deserialize(v)
                    .map_err(serde::de::Error::custom)?;
                Ok(Interface::Bond(Box::new(inner)))
            }
            Some(InterfaceType::Unknown(t)) => Err(serde::de::Error::custom(
                format!("Unsupported interface type {t}"),
            )),
            None => Err(serde::de::Error::custom(
                "Interface type is mandatory",
            )),
        }
    }
}

impl Interface {
    pub fn base_iface(&self) -> &BaseInterface {
        match self {
            Self::Ethernet(iface) => &iface.base,
            Self::Vlan(iface) => &iface.base,
            Self::Bond(iface) => &iface.base,
        }
    }

    pub fn name(&self) -> &str {
        self.base_iface().name.as_str()
    }

    pub fn iface_type(&self) -> InterfaceType {
        match self {
            Self::Ethernet(_) => InterfaceType::Ethernet,
            Self::Vlan(_) => InterfaceType::Vlan,
            Self::Bond(_) => InterfaceType::Bond,
        }
    }
}

impl From<EthernetInterface> for Interface {
    fn from(iface: EthernetInterface) -> Self {
        Self::Ethernet(Box::new(iface))
    }
}

impl From<VlanInterface> for Interface {
    fn from(iface: VlanInterface) -> Self {
        Self::Vlan(Box::new(iface))
    }
}

impl From<BondInterface> for Interface {
    fn from(iface: BondInterface) -> Self {
        Self::Bond(Box::new(iface))
    }
}
