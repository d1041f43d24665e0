// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{DnsState, Interface, JsonDisplay, Routes, StaticNetError};

#[derive(
    Clone, Debug, PartialEq, Eq, Default, Deserialize, Serialize, JsonDisplay,
)]
#[non_exhaustive]
/// The NMState document stored per host. Field order here is the order of
/// sections in the generated YAML.
pub struct NetworkState {
    /// Network interfaces, in the order they are declared.
    #[serde(default)]
    pub interfaces: Vec<Interface>,
    /// Routes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Routes>,
    /// DNS resolver
    #[serde(
        default,
        rename = "dns-resolver",
        skip_serializing_if = "Option::is_none"
    )]
    pub dns: Option<DnsState>,
}

impl NetworkState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrapping function of [serde_yaml::from_str()] with error mapped to
    /// [StaticNetError].
    pub fn new_from_yaml(net_state_yaml: &str) -> Result<Self, StaticNetError> {
        Ok(serde_yaml::from_str(net_state_yaml)?)
    }

    pub fn to_yaml(&self) -> Result<String, StaticNetError> {
        serde_yaml::to_string(self).map_err(|e| {
            StaticNetError::new(
                crate::ErrorKind::Bug,
                format!("Failed to serialize network state: {e}"),
            )
        })
    }
}
