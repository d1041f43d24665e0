// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use crate::{
    Cidr, NetworkWideConfig, ProtocolVersion, StaticNetError,
    StaticProtocolType,
};

const COMMENT_CHAR: char = '#';
const FORM_VIEW_MARKER: &str = "staticnet-form-view";
const MACHINE_NETWORK_SUFFIX: &str = "-machine-network";

/// Network wide metadata the NMState schema has no field for, stored as
/// leading YAML comment lines:
/// ```text
/// #staticnet-form-view
/// #ipv4-machine-network 192.0.2.0/24
/// #ipv6-machine-network 2001:db8::/64
/// ```
/// The IPv6 line only exists for dual stack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct FormViewHeader {
    pub(crate) ipv4_machine_network: Option<Cidr>,
    pub(crate) ipv6_machine_network: Option<Cidr>,
}

impl FormViewHeader {
    pub(crate) fn new(network_wide: &NetworkWideConfig) -> Self {
        let mut ret = Self::default();
        for version in network_wide.shown_protocol_versions() {
            let cidr =
                network_wide.ip_configs.get(*version).machine_network.clone();
            match version {
                ProtocolVersion::Ipv4 => ret.ipv4_machine_network = Some(cidr),
                ProtocolVersion::Ipv6 => ret.ipv6_machine_network = Some(cidr),
            }
        }
        ret
    }

    pub(crate) fn protocol_type(&self) -> StaticProtocolType {
        if self.ipv6_machine_network.is_some() {
            StaticProtocolType::DualStack
        } else {
            StaticProtocolType::Ipv4
        }
    }

    pub(crate) fn machine_network(
        &self,
        version: ProtocolVersion,
    ) -> Option<&Cidr> {
        match version {
            ProtocolVersion::Ipv4 => self.ipv4_machine_network.as_ref(),
            ProtocolVersion::Ipv6 => self.ipv6_machine_network.as_ref(),
        }
    }

    pub(crate) fn to_comment_lines(&self) -> String {
        let mut ret = format!("{COMMENT_CHAR}{FORM_VIEW_MARKER}\n");
        for version in [ProtocolVersion::Ipv4, ProtocolVersion::Ipv6] {
            if let Some(cidr) = self.machine_network(version) {
                ret.push_str(&format!(
                    "{COMMENT_CHAR}{}{MACHINE_NETWORK_SUFFIX} {cidr}\n",
                    version.as_str()
                ));
            }
        }
        ret
    }

    /// Parse the leading comment block of `network_yaml`.
    ///
    /// Returns `None` when the form view marker is absent, which is the
    /// case for infra-envs never saved through the form view.
    pub(crate) fn parse(
        network_yaml: &str,
    ) -> Result<Option<Self>, StaticNetError> {
        let mut found_marker = false;
        let mut ret = Self::default();
        for line in network_yaml.lines() {
            let Some(comment) = line.strip_prefix(COMMENT_CHAR) else {
                break;
            };
            let comment = comment.trim();
            if comment == FORM_VIEW_MARKER {
                found_marker = true;
                continue;
            }
            let (field, value) = match comment.split_once(' ') {
                Some((f, v)) => (f, v.trim()),
                None => (comment, ""),
            };
            let Some(version) = field.strip_suffix(MACHINE_NETWORK_SUFFIX)
            else {
                log::debug!("Ignoring unknown comment line '{line}'");
                continue;
            };
            let cidr = Cidr::from_str(value).map_err(|e| {
                StaticNetError::malformed(format!(
                    "Invalid machine network in comment line '{line}': {}",
                    e.msg()
                ))
            })?;
            match version {
                "ipv4" => ret.ipv4_machine_network = Some(cidr),
                "ipv6" => ret.ipv6_machine_network = Some(cidr),
                _ => {
                    return Err(StaticNetError::malformed(format!(
                        "Unknown protocol version in comment line '{line}'"
                    )));
                }
            }
        }
        Ok(found_marker.then_some(ret))
    }
}
