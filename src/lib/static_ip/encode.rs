// SPDX-License-Identifier: Apache-2.0

use std::{net::IpAddr, str::FromStr};

use super::{
    dummy::{dummy_interfaces, set_ip},
    header::FormViewHeader,
    mac_map::{BOND_NIC_NAME, REAL_NIC_NAME, REAL_NIC_NAME_1},
};
use crate::{
    BaseInterface, BondConfig, BondInterface, BondMode, BondOptions, DnsState,
    EthernetInterface, FormViewHost, HostStaticNetworkConfig, Interface,
    InterfaceIpAddr, InterfaceType, NetworkState, NetworkWideConfig,
    ProtocolVersion, RouteEntry, Routes, StaticFormData, StaticNetError,
    VlanConfig, VlanInterface, decode, mac_interface_map, vlan_nic_name,
};

const BOND_MIIMON: u32 = 140;

/// Records of a network wide only save: a single record in which every
/// shown protocol version is served by a dummy interface.
pub fn encode_network_wide(
    network_wide: &NetworkWideConfig,
) -> Result<Vec<HostStaticNetworkConfig>, StaticNetError> {
    Ok(vec![HostStaticNetworkConfig::new(
        encode_network_yaml(network_wide, None)?,
        mac_interface_map(None),
    )])
}

pub fn encode_host(
    network_wide: &NetworkWideConfig,
    host: &FormViewHost,
) -> Result<HostStaticNetworkConfig, StaticNetError> {
    if !host.is_bonded() && host.mac_address.is_empty() {
        return Err(StaticNetError::invalid(
            "Host MAC address not configured",
        ));
    }
    Ok(HostStaticNetworkConfig::new(
        encode_network_yaml(network_wide, Some(host))?,
        mac_interface_map(Some(host)),
    ))
}

/// Encode the whole form, falling back to [encode_network_wide] when no
/// host is defined.
pub fn encode_form_data(
    form_data: &StaticFormData,
) -> Result<Vec<HostStaticNetworkConfig>, StaticNetError> {
    if form_data.hosts.is_empty() {
        return encode_network_wide(&form_data.network_wide);
    }
    form_data
        .hosts
        .iter()
        .map(|host| encode_host(&form_data.network_wide, host))
        .collect()
}

/// Re-encode the hosts stored in `current` under new network wide settings.
/// Host IPs of protocol versions no longer shown are discarded.
pub fn network_wide_to_records(
    current: &[HostStaticNetworkConfig],
    network_wide: &NetworkWideConfig,
) -> Result<Vec<HostStaticNetworkConfig>, StaticNetError> {
    let mut hosts = decode(current)?.hosts;
    for host in hosts.iter_mut() {
        host.retain_shown_ips(network_wide.protocol_type);
    }
    encode_form_data(&StaticFormData::new(network_wide.clone(), hosts))
}

/// Replace the hosts stored in `current`, keeping its network wide settings.
pub fn hosts_to_records(
    current: &[HostStaticNetworkConfig],
    hosts: &[FormViewHost],
) -> Result<Vec<HostStaticNetworkConfig>, StaticNetError> {
    let network_wide = decode(current)?.network_wide;
    encode_form_data(&StaticFormData::new(network_wide, hosts.to_vec()))
}

/// NMState YAML of a single host prefixed by the form view header.
pub fn encode_network_yaml(
    network_wide: &NetworkWideConfig,
    host: Option<&FormViewHost>,
) -> Result<String, StaticNetError> {
    let servers = network_wide.dns_servers();
    if servers.is_empty() {
        return Err(StaticNetError::invalid("DNS servers not configured"));
    }
    let vlan_id = network_wide.vlan();
    let bond_mode = host.filter(|h| h.is_bonded()).map(|h| h.bond_type);
    let base_name = if bond_mode.is_some() {
        BOND_NIC_NAME
    } else {
        REAL_NIC_NAME
    };
    let carrier_name = match vlan_id {
        Some(id) => vlan_nic_name(base_name, id),
        None => base_name.to_string(),
    };
    let carrier_type = match (vlan_id, bond_mode) {
        (Some(_), _) => InterfaceType::Vlan,
        (None, Some(_)) => InterfaceType::Bond,
        (None, None) => InterfaceType::Ethernet,
    };
    let mut carrier = BaseInterface::new(carrier_name.clone(), carrier_type);
    let mut has_real_ip = false;
    let mut dummies: Vec<Interface> = Vec::new();
    let mut routes: Vec<RouteEntry> = Vec::new();

    for version in network_wide.shown_protocol_versions() {
        let host_ip = host.map(|h| h.ips.get(*version)).unwrap_or("");
        let next_hop_iface = if host_ip.is_empty() {
            log::debug!("No host {version} address, using dummy interface");
            let (ifaces, route_iface) = dummy_interfaces(*version, vlan_id);
            dummies.extend(ifaces);
            route_iface
        } else {
            set_ip(
                &mut carrier,
                *version,
                host_address(network_wide, *version, host_ip)?,
            );
            has_real_ip = true;
            carrier_name.clone()
        };
        routes.push(RouteEntry::new_default_gateway(
            version.default_route_destination(),
            &network_wide.ip_configs.get(*version).gateway,
            &next_hop_iface,
        ));
    }

    let mut state = NetworkState::new();
    if has_real_ip {
        state.interfaces = real_interfaces(carrier, vlan_id, bond_mode);
    }
    state.interfaces.extend(dummies);
    state.routes = Some(Routes::new(routes));
    state.dns = Some(DnsState::new_servers(servers));

    Ok(format!(
        "{}{}",
        FormViewHeader::new(network_wide).to_comment_lines(),
        state.to_yaml()?
    ))
}

fn host_address(
    network_wide: &NetworkWideConfig,
    version: ProtocolVersion,
    host_ip: &str,
) -> Result<InterfaceIpAddr, StaticNetError> {
    let Some(prefix_length) = network_wide
        .ip_configs
        .get(version)
        .machine_network
        .prefix_length
    else {
        return Err(StaticNetError::invalid(format!(
            "Machine network prefix length not configured for {version}"
        )));
    };
    if prefix_length > version.max_prefix_length() {
        return Err(StaticNetError::invalid(format!(
            "Invalid {} machine network prefix length {prefix_length}",
            version.label()
        )));
    }
    let ip = IpAddr::from_str(host_ip).map_err(|e| {
        StaticNetError::invalid(format!(
            "Invalid {} host address '{host_ip}': {e}",
            version.label()
        ))
    })?;
    if !version.matches(&ip) {
        return Err(StaticNetError::invalid(format!(
            "Host address '{host_ip}' is not an {} address",
            version.label()
        )));
    }
    Ok(InterfaceIpAddr::new(host_ip, prefix_length))
}

/// Interfaces of the host NIC with `carrier` holding the host addresses.
/// `carrier` is a VLAN on top of `eth0`/`bond0` when `vlan_id` is set,
/// otherwise it is `eth0`/`bond0` itself.
fn real_interfaces(
    carrier: BaseInterface,
    vlan_id: Option<u16>,
    bond_mode: Option<BondMode>,
) -> Vec<Interface> {
    let mut ret: Vec<Interface> = Vec::new();
    let (nic, vlan) = match vlan_id {
        Some(id) => {
            let nic_type = if bond_mode.is_some() {
                InterfaceType::Bond
            } else {
                InterfaceType::Ethernet
            };
            let nic_name = if bond_mode.is_some() {
                BOND_NIC_NAME
            } else {
                REAL_NIC_NAME
            };
            let vlan =
                VlanInterface::new(carrier, VlanConfig::new(nic_name, id));
            (BaseInterface::new(nic_name.to_string(), nic_type), Some(vlan))
        }
        None => (carrier, None),
    };
    match bond_mode {
        Some(mode) => ret.push(
            BondInterface::new(
                nic,
                BondConfig::new(
                    mode,
                    BondOptions::new_miimon(BOND_MIIMON),
                    vec![
                        REAL_NIC_NAME.to_string(),
                        REAL_NIC_NAME_1.to_string(),
                    ],
                ),
            )
            .into(),
        ),
        None => ret.push(EthernetInterface::new(nic).into()),
    }
    if let Some(vlan) = vlan {
        ret.push(vlan.into());
    }
    ret
}
