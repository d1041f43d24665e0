// SPDX-License-Identifier: Apache-2.0

use super::{
    dummy::{DUMMY_MAC_ADDRESS, is_dummy_interface},
    header::FormViewHeader,
};
use crate::{
    FormViewHost, HostStaticNetworkConfig, Interface, NetworkState,
    NetworkWideConfig, StaticFormData, StaticNetError, StaticProtocolType,
    shown_protocol_versions,
};

/// How far the form view configuration stored in the records has got.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormViewState {
    /// Infra-env just created, no network wide settings saved yet.
    Unconfigured,
    /// Network wide settings saved, no host holds a real interface yet.
    NetworkWideOnly(NetworkWideConfig),
    /// Every host holds an address for every shown protocol version.
    FullyConfigured {
        network_wide: NetworkWideConfig,
        hosts: Vec<FormViewHost>,
    },
    /// Some host misses the address of a shown protocol version, e.g. after
    /// switching from IPv4 to dual stack.
    PartiallyConfigured {
        network_wide: NetworkWideConfig,
        hosts: Vec<FormViewHost>,
    },
}

impl FormViewState {
    pub fn network_wide(&self) -> Option<&NetworkWideConfig> {
        match self {
            Self::Unconfigured => None,
            Self::NetworkWideOnly(network_wide)
            | Self::FullyConfigured { network_wide, .. }
            | Self::PartiallyConfigured { network_wide, .. } => {
                Some(network_wide)
            }
        }
    }

    pub fn hosts(&self) -> &[FormViewHost] {
        match self {
            Self::Unconfigured | Self::NetworkWideOnly(_) => &[],
            Self::FullyConfigured { hosts, .. }
            | Self::PartiallyConfigured { hosts, .. } => hosts.as_slice(),
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::FullyConfigured { .. })
    }
}

impl From<FormViewState> for StaticFormData {
    fn from(state: FormViewState) -> Self {
        match state {
            FormViewState::Unconfigured => Self::default(),
            FormViewState::NetworkWideOnly(network_wide) => {
                Self::new(network_wide, Vec::new())
            }
            FormViewState::FullyConfigured {
                network_wide,
                hosts,
            }
            | FormViewState::PartiallyConfigured {
                network_wide,
                hosts,
            } => Self::new(network_wide, hosts),
        }
    }
}

pub fn decode(
    records: &[HostStaticNetworkConfig],
) -> Result<StaticFormData, StaticNetError> {
    classify(records).map(StaticFormData::from)
}

pub fn classify(
    records: &[HostStaticNetworkConfig],
) -> Result<FormViewState, StaticNetError> {
    let Some(first) = records.first() else {
        return Err(StaticNetError::malformed("Static network config is empty"));
    };
    for record in records {
        check_record(record)?;
    }

    let Some(header) = FormViewHeader::parse(&first.network_yaml)? else {
        log::debug!("No form view header found, static IP is unconfigured");
        return Ok(FormViewState::Unconfigured);
    };
    let protocol_type = header.protocol_type();
    let first_state = NetworkState::new_from_yaml(&first.network_yaml)?;
    let network_wide = decode_network_wide(&first_state, &header)?;

    let mut hosts = Vec::new();
    for (idx, record) in records.iter().enumerate() {
        let host = if idx == 0 {
            decode_host(record, &first_state, protocol_type)?
        } else {
            let state = NetworkState::new_from_yaml(&record.network_yaml)?;
            decode_host(record, &state, protocol_type)?
        };
        match host {
            Some(host) => hosts.push(host),
            None if is_dummy_record(record) => {
                log::debug!("Record {idx} holds network wide settings only");
            }
            None => {
                log::warn!(
                    "Dropping host {} of static network config: no real \
                     interface defined",
                    record.mac_interface_map[0].mac_address
                );
            }
        }
    }

    let is_complete = hosts.iter().all(|host| {
        shown_protocol_versions(protocol_type)
            .iter()
            .all(|version| !host.ips.get(*version).is_empty())
    });
    let ret = if hosts.is_empty() {
        FormViewState::NetworkWideOnly(network_wide)
    } else if is_complete {
        FormViewState::FullyConfigured {
            network_wide,
            hosts,
        }
    } else {
        FormViewState::PartiallyConfigured {
            network_wide,
            hosts,
        }
    };
    log::debug!(
        "Static network config holds {} host(s), complete: {}",
        ret.hosts().len(),
        ret.is_complete()
    );
    Ok(ret)
}

/// Interfaces not created as protocol placeholders.
pub fn find_all_real_interfaces(interfaces: &[Interface]) -> Vec<&Interface> {
    interfaces
        .iter()
        .filter(|iface| !is_dummy_interface(iface.name()))
        .collect()
}

fn check_record(
    record: &HostStaticNetworkConfig,
) -> Result<(), StaticNetError> {
    let Some(first_entry) = record.mac_interface_map.first() else {
        return Err(StaticNetError::malformed(
            "Static network config is missing information",
        ));
    };
    if record.network_yaml.trim().is_empty() {
        return Err(StaticNetError::malformed(
            "Static network config is missing information",
        ));
    }
    if first_entry.mac_address.is_empty() {
        return Err(StaticNetError::malformed(
            "Static network config is missing mac address",
        ));
    }
    Ok(())
}

fn is_dummy_record(record: &HostStaticNetworkConfig) -> bool {
    record
        .mac_interface_map
        .iter()
        .all(|entry| entry.mac_address == DUMMY_MAC_ADDRESS)
}

fn decode_network_wide(
    state: &NetworkState,
    header: &FormViewHeader,
) -> Result<NetworkWideConfig, StaticNetError> {
    let mut network_wide = NetworkWideConfig::new();
    network_wide.protocol_type = header.protocol_type();

    let servers = state.dns.as_ref().map(|d| d.servers()).unwrap_or_default();
    if servers.is_empty() {
        return Err(StaticNetError::malformed(
            "Nmstate YAML doesn't contain dns-resolver section",
        ));
    }
    network_wide.dns = servers.join(",");

    if let Some(vlan_id) = state.interfaces.iter().find_map(|iface| {
        if let Interface::Vlan(vlan_iface) = iface {
            vlan_iface.vlan_id()
        } else {
            None
        }
    }) {
        network_wide.use_vlan = true;
        network_wide.vlan_id = Some(vlan_id);
    }

    let Some(routes) = state.routes.as_ref().and_then(|r| r.config.as_deref())
    else {
        return Err(StaticNetError::malformed(
            "Nmstate YAML doesn't contain routes section",
        ));
    };
    for version in network_wide.shown_protocol_versions() {
        let destination = version.default_route_destination();
        let Some(route) = routes
            .iter()
            .find(|r| r.destination.as_deref() == Some(destination))
        else {
            return Err(StaticNetError::malformed(format!(
                "Nmstate YAML doesn't contain a default route for {version}"
            )));
        };
        let Some(machine_network) = header.machine_network(*version) else {
            return Err(StaticNetError::malformed(format!(
                "Static network config doesn't contain the {version} machine \
                 network"
            )));
        };
        let Some(gateway) = route.next_hop_addr.as_ref() else {
            return Err(StaticNetError::malformed(format!(
                "Nmstate YAML doesn't contain a gateway for {version}"
            )));
        };
        let ip_config = network_wide.ip_configs.get_mut(*version);
        ip_config.gateway = gateway.clone();
        ip_config.machine_network = machine_network.clone();
    }
    Ok(network_wide)
}

/// `None` when the host has no real interface.
fn decode_host(
    record: &HostStaticNetworkConfig,
    state: &NetworkState,
    protocol_type: StaticProtocolType,
) -> Result<Option<FormViewHost>, StaticNetError> {
    let real_ifaces = find_all_real_interfaces(&state.interfaces);
    if real_ifaces.is_empty() {
        return Ok(None);
    }

    let mut host = FormViewHost::default();
    let bond = real_ifaces.iter().find_map(|iface| {
        if let Interface::Bond(bond_iface) = iface {
            Some(bond_iface)
        } else {
            None
        }
    });
    let macs: Vec<&str> = record
        .mac_interface_map
        .iter()
        .map(|entry| entry.mac_address.as_str())
        .collect();
    if let Some(bond) = bond {
        let [primary, secondary, ..] = macs.as_slice() else {
            return Err(StaticNetError::malformed(
                "Static network config of bonded host is missing the mac \
                 address of second bond port",
            ));
        };
        if secondary.is_empty() {
            return Err(StaticNetError::malformed(
                "Static network config is missing mac address",
            ));
        }
        host.use_bond = true;
        host.bond_type = bond.mode().unwrap_or_default();
        host.bond_primary_interface = primary.to_string();
        host.bond_secondary_interface = secondary.to_string();
    } else {
        host.mac_address = macs[0].to_string();
    }

    for version in shown_protocol_versions(protocol_type) {
        for iface in real_ifaces.iter() {
            match iface.base_iface().first_ip_of(*version) {
                None => continue,
                Some(None) => {
                    return Err(StaticNetError::malformed(format!(
                        "Nmstate YAML doesn't contain an address for \
                         protocol version {version}"
                    )));
                }
                Some(Some(ip)) => {
                    host.ips.set(*version, ip);
                    break;
                }
            }
        }
    }
    Ok(Some(host))
}
