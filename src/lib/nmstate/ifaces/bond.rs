// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{BaseInterface, InterfaceType, JsonDisplay};

/// Bond interface.
///
/// When serializing or deserializing, the [BaseInterface] will
/// be flatted and [BondConfig] stored as `link-aggregation` section. The yaml
/// output of a bond produced by the form view:
/// ```yml
/// interfaces:
/// - name: bond0
///   type: bond
///   state: up
///   link-aggregation:
///     mode: active-backup
///     options:
///       miimon: 140
///     port:
///     - eth0
///     - eth1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonDisplay)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct BondInterface {
    #[serde(flatten)]
    pub base: BaseInterface,
    #[serde(
        skip_serializing_if = "Option::is_none",
        rename = "link-aggregation",
        alias = "bond"
    )]
    pub bond: Option<BondConfig>,
}

impl BondInterface {
    pub fn new(base: BaseInterface, bond: BondConfig) -> Self {
        Self {
            base,
            bond: Some(bond),
        }
    }

    pub fn mode(&self) -> Option<BondMode> {
        self.bond.as_ref().and_then(|b| b.mode)
    }

    pub fn ports(&self) -> Option<&[String]> {
        self.bond.as_ref().and_then(|b| b.port.as_deref())
    }
}

impl Default for BondInterface {
    fn default() -> Self {
        Self {
            base: BaseInterface {
                iface_type: InterfaceType::Bond,
                ..Default::default()
            },
            bond: None,
        }
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, JsonDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub struct BondConfig {
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_enum_string_or_integer"
    )]
    pub mode: Option<BondMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BondOptions>,
    /// Deserialize and serialize from/to `port`.
    /// You can also use `ports` for deserializing.
    #[serde(skip_serializing_if = "Option::is_none", alias = "ports")]
    pub port: Option<Vec<String>>,
}

impl BondConfig {
    pub fn new(
        mode: BondMode,
        options: BondOptions,
        port: Vec<String>,
    ) -> Self {
        Self {
            mode: Some(mode),
            options: Some(options),
            port: Some(port),
        }
    }
}

/// Bond mode
#[derive(
    Serialize,
    Deserialize,
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    Default,
    JsonDisplay,
)]
#[non_exhaustive]
pub enum BondMode {
    #[serde(rename = "balance-rr", alias = "0")]
    /// Deserialize and serialize from/to `balance-rr`.
    /// You can use integer 0 for deserializing to this mode.
    RoundRobin,
    #[serde(rename = "active-backup", alias = "1")]
    /// Deserialize and serialize from/to `active-backup`.
    /// You can use integer 1 for deserializing to this mode.
    /// Default mode offered by the form view.
    #[default]
    ActiveBackup,
    #[serde(rename = "balance-xor", alias = "2")]
    /// Deserialize and serialize from/to `balance-xor`.
    /// You can use integer 2 for deserializing to this mode.
    XOR,
    #[serde(rename = "broadcast", alias = "3")]
    /// Deserialize and serialize from/to `broadcast`.
    /// You can use integer 3 for deserializing to this mode.
    Broadcast,
    #[serde(rename = "802.3ad", alias = "lacp", alias = "4")]
    /// Deserialize and serialize from/to `802.3ad`.
    /// You can use integer 4, or the alias "lacp" for deserializing to this
    /// mode.
    LACP,
    #[serde(rename = "balance-tlb", alias = "5")]
    /// Deserialize and serialize from/to `balance-tlb`.
    /// You can use integer 5 for deserializing to this mode.
    TLB,
    /// Deserialize and serialize from/to `balance-alb`.
    /// You can use integer 6 for deserializing to this mode.
    #[serde(rename = "balance-alb", alias = "6")]
    ALB,
}

/// Bond specific configurations
///
/// Please refer to [kernel documentation](https://www.kernel.org/doc/Documentation/networking/bonding.txt)
/// for detail.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default, JsonDisplay,
)]
// Do not use serde rename `kebab-case` here, because we need to align with
// linux kernel option name.
#[non_exhaustive]
pub struct BondOptions {
    #[serde(
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "crate::deserializer::option_u32_or_string"
    )]
    pub miimon: Option<u32>,
}

impl BondOptions {
    pub fn new_miimon(miimon: u32) -> Self {
        Self {
            miimon: Some(miimon),
        }
    }
}
