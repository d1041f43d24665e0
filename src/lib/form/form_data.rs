// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{FormViewHost, NetworkWideConfig};

/// Everything the static IP form step holds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct StaticFormData {
    #[serde(default)]
    pub network_wide: NetworkWideConfig,
    #[serde(default)]
    pub hosts: Vec<FormViewHost>,
}

impl StaticFormData {
    pub fn new(
        network_wide: NetworkWideConfig,
        hosts: Vec<FormViewHost>,
    ) -> Self {
        Self {
            network_wide,
            hosts,
        }
    }
}
