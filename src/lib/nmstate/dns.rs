// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::JsonDisplay;

/// DNS resolver configuration. Serialized as the `dns-resolver` section:
/// ```yml
/// dns-resolver:
///   config:
///     server:
///     - 192.0.2.53
///     - 2001:db8::53
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonDisplay,
)]
#[non_exhaustive]
pub struct DnsState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<DnsClientState>,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonDisplay,
)]
#[non_exhaustive]
pub struct DnsClientState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<Vec<String>>,
}

impl DnsState {
    pub fn new_servers(servers: Vec<String>) -> Self {
        Self {
            config: Some(DnsClientState {
                server: Some(servers),
                search: None,
            }),
        }
    }

    /// Configured name servers, empty when undefined.
    pub fn servers(&self) -> &[String] {
        self.config
            .as_ref()
            .and_then(|c| c.server.as_deref())
            .unwrap_or_default()
    }
}
