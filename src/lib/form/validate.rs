// SPDX-License-Identifier: Apache-2.0

use std::{
    collections::HashSet,
    net::{IpAddr, Ipv4Addr},
    str::FromStr,
};

use crate::{
    FormViewHost, NetworkWideConfig, ProtocolVersion, StaticFormData,
    StaticNetError, StaticProtocolType,
    nmstate::ip::{apply_ip_prefix_len, is_ip_in_network, last_ip_of_network},
};

const VLAN_ID_MIN: u16 = 1;
const VLAN_ID_MAX: u16 = 4094;

const RESERVED_IPV4: [Ipv4Addr; 4] = [
    Ipv4Addr::UNSPECIFIED,
    Ipv4Addr::new(127, 0, 0, 0),
    Ipv4Addr::LOCALHOST,
    Ipv4Addr::BROADCAST,
];

fn is_reserved_ip(ip: &IpAddr) -> bool {
    match ip {
        IpAddr::V4(ip) => RESERVED_IPV4.contains(ip),
        IpAddr::V6(ip) => {
            ip.is_loopback() || ip.is_unspecified() || ip.is_multicast()
        }
    }
}

fn parse_ip(
    version: ProtocolVersion,
    value: &str,
) -> Result<IpAddr, StaticNetError> {
    let ip = IpAddr::from_str(value)
        .ok()
        .filter(|ip| version.matches(ip));
    let Some(ip) = ip else {
        return Err(StaticNetError::invalid(format!(
            "Value {value} is not a valid {} address",
            version.label()
        )));
    };
    if is_reserved_ip(&ip) {
        return Err(StaticNetError::invalid(format!(
            "Provided IP address {value} is not a correct address for an \
             interface"
        )));
    }
    Ok(ip)
}

fn is_valid_mac(mac: &str) -> bool {
    let octets: Vec<&str> = mac.split(':').collect();
    octets.len() == 6
        && octets.iter().all(|octet| {
            octet.len() == 2 && octet.bytes().all(|b| b.is_ascii_hexdigit())
        })
}

impl NetworkWideConfig {
    /// Check the settings are complete and consistent, returning the first
    /// violation found.
    pub fn validate(&self) -> Result<(), StaticNetError> {
        if self.use_vlan {
            match self.vlan_id {
                Some(id) if (VLAN_ID_MIN..=VLAN_ID_MAX).contains(&id) => (),
                _ => {
                    return Err(StaticNetError::invalid(format!(
                        "VLAN ID must be in the range of {VLAN_ID_MIN} to \
                         {VLAN_ID_MAX}"
                    )));
                }
            }
        }
        for version in self.shown_protocol_versions() {
            self.validate_ip_config(*version)?;
        }
        self.validate_dns()
    }

    fn validate_ip_config(
        &self,
        version: ProtocolVersion,
    ) -> Result<(), StaticNetError> {
        let ip_config = self.ip_configs.get(version);
        let label = version.label();
        if ip_config.machine_network.ip.is_empty() {
            return Err(StaticNetError::invalid(format!(
                "{label} machine network is required"
            )));
        }
        let net_ip = parse_ip(version, &ip_config.machine_network.ip)?;
        let max_len = version.max_prefix_length();
        let prefix_length = match ip_config.machine_network.prefix_length {
            Some(len) if (1..=max_len).contains(&len) => len,
            _ => {
                return Err(StaticNetError::invalid(format!(
                    "{label} machine network prefix length must be in the \
                     range of 1 to {max_len}"
                )));
            }
        };
        let cidr = &ip_config.machine_network;

        if ip_config.gateway.is_empty() {
            return Err(StaticNetError::invalid(format!(
                "{label} default gateway is required"
            )));
        }
        let gateway = parse_ip(version, &ip_config.gateway)?;
        if !is_ip_in_network(gateway, net_ip, prefix_length) {
            return Err(StaticNetError::invalid(format!(
                "IP Address {gateway} is outside of the machine network {cidr}"
            )));
        }
        // A /31 IPv4 network has no network or broadcast address
        if version == ProtocolVersion::Ipv4 && prefix_length == 31 {
            return Ok(());
        }
        if gateway == apply_ip_prefix_len(net_ip, prefix_length) {
            return Err(StaticNetError::invalid(format!(
                "Default gateway {gateway} cannot be the network address of \
                 {cidr}"
            )));
        }
        if gateway == last_ip_of_network(net_ip, prefix_length) {
            return Err(StaticNetError::invalid(format!(
                "Default gateway {gateway} cannot be the broadcast address \
                 of {cidr}"
            )));
        }
        Ok(())
    }

    fn validate_dns(&self) -> Result<(), StaticNetError> {
        let servers = self.dns_servers();
        if servers.is_empty() {
            return Err(StaticNetError::invalid("DNS is required"));
        }
        let mut seen = HashSet::new();
        for server in servers.iter() {
            let ip = if self.protocol_type == StaticProtocolType::Ipv4 {
                parse_ip(ProtocolVersion::Ipv4, server)?
            } else {
                match IpAddr::from_str(server) {
                    Ok(ip) => {
                        let version = if ip.is_ipv4() {
                            ProtocolVersion::Ipv4
                        } else {
                            ProtocolVersion::Ipv6
                        };
                        parse_ip(version, server)?
                    }
                    Err(_) => {
                        return Err(StaticNetError::invalid(format!(
                            "Value {server} is not a valid IP address"
                        )));
                    }
                }
            };
            if !seen.insert(ip) {
                return Err(StaticNetError::invalid(format!(
                    "DNS server {server} is duplicated"
                )));
            }
        }
        Ok(())
    }
}

impl FormViewHost {
    /// Check the host is completely configured for `network_wide`.
    pub fn validate(
        &self,
        network_wide: &NetworkWideConfig,
    ) -> Result<(), StaticNetError> {
        if self.use_bond {
            for mac in [
                &self.bond_primary_interface,
                &self.bond_secondary_interface,
            ] {
                if !is_valid_mac(mac) {
                    return Err(StaticNetError::invalid(format!(
                        "Invalid bond port MAC address '{mac}'"
                    )));
                }
            }
            if self
                .bond_primary_interface
                .eq_ignore_ascii_case(&self.bond_secondary_interface)
            {
                return Err(StaticNetError::invalid(
                    "Bond ports must use different MAC addresses",
                ));
            }
        } else if !is_valid_mac(&self.mac_address) {
            return Err(StaticNetError::invalid(format!(
                "Invalid MAC address '{}'",
                self.mac_address
            )));
        }

        for version in network_wide.shown_protocol_versions() {
            let value = self.ips.get(*version);
            let label = version.label();
            if value.is_empty() {
                return Err(StaticNetError::invalid(format!(
                    "{label} address is required"
                )));
            }
            let ip = parse_ip(*version, value)?;
            let cidr = &network_wide.ip_configs.get(*version).machine_network;
            if let Ok(net_ip) = IpAddr::from_str(&cidr.ip)
                && let Some(prefix_length) = cidr.prefix_length
                && !is_ip_in_network(ip, net_ip, prefix_length)
            {
                return Err(StaticNetError::invalid(format!(
                    "IP Address {value} is outside of the machine network \
                     {cidr}"
                )));
            }
        }
        Ok(())
    }

    fn macs(&self) -> Vec<String> {
        if self.use_bond {
            vec![
                self.bond_primary_interface.to_lowercase(),
                self.bond_secondary_interface.to_lowercase(),
            ]
        } else {
            vec![self.mac_address.to_lowercase()]
        }
    }
}

impl StaticFormData {
    /// Validate network wide settings, every host, and that no MAC or IP
    /// address is used by more than one host.
    pub fn validate(&self) -> Result<(), StaticNetError> {
        self.network_wide.validate()?;
        let mut macs = HashSet::new();
        let mut ips = HashSet::new();
        for (idx, host) in self.hosts.iter().enumerate() {
            host.validate(&self.network_wide).map_err(|e| {
                StaticNetError::new(
                    e.kind(),
                    format!("Host {idx}: {}", e.msg()),
                )
            })?;
            for mac in host.macs() {
                if !macs.insert(mac.clone()) {
                    return Err(StaticNetError::invalid(format!(
                        "Host {idx}: MAC address {mac} is used by another host"
                    )));
                }
            }
            for version in self.network_wide.shown_protocol_versions() {
                let ip = parse_ip(*version, host.ips.get(*version))?;
                if !ips.insert(ip) {
                    return Err(StaticNetError::invalid(format!(
                        "Host {idx}: IP address {ip} is used by another host"
                    )));
                }
            }
        }
        Ok(())
    }
}
