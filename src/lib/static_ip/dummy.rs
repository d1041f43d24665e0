// SPDX-License-Identifier: Apache-2.0

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use crate::{
    BaseInterface, EthernetInterface, HostStaticNetworkConfig, Interface,
    InterfaceIpAddr, InterfaceIpv4, InterfaceIpv6, InterfaceType,
    MacInterfaceMapEntry, NetworkState, ProtocolVersion,
    StaticNetError, VlanConfig, VlanInterface, vlan_nic_name,
};

const DUMMY_NIC_PREFIX: &str = "dummy";

/// Placeholder MAC from the RFC 7042 documentation range, never a real NIC.
pub const DUMMY_MAC_ADDRESS: &str = "00:00:5e:00:53:00";

/// Placeholder address per protocol version, taken from the documentation
/// ranges of RFC 5737 and RFC 3849.
pub const DUMMY_ADDRESSES: [(ProtocolVersion, IpAddr, u8); 2] = [
    (
        ProtocolVersion::Ipv4,
        IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1)),
        24,
    ),
    (
        ProtocolVersion::Ipv6,
        IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1)),
        64,
    ),
];

/// Whether the interface is a placeholder created by [dummy_nic_name],
/// including VLANs on top of it.
pub fn is_dummy_interface(name: &str) -> bool {
    let base = match name.split_once('.') {
        Some((base, _)) => base,
        None => name,
    };
    base.strip_prefix(DUMMY_NIC_PREFIX).is_some_and(|idx| {
        !idx.is_empty() && idx.bytes().all(|b| b.is_ascii_digit())
    })
}

pub fn dummy_nic_name(version: ProtocolVersion) -> String {
    match version {
        ProtocolVersion::Ipv4 => format!("{DUMMY_NIC_PREFIX}0"),
        ProtocolVersion::Ipv6 => format!("{DUMMY_NIC_PREFIX}1"),
    }
}

pub fn dummy_address(version: ProtocolVersion) -> InterfaceIpAddr {
    let (ip, prefix_length) = match version {
        ProtocolVersion::Ipv4 => (DUMMY_ADDRESSES[0].1, DUMMY_ADDRESSES[0].2),
        ProtocolVersion::Ipv6 => (DUMMY_ADDRESSES[1].1, DUMMY_ADDRESSES[1].2),
    };
    InterfaceIpAddr::new(ip.to_string(), prefix_length)
}

/// Placeholder interfaces for `version`.
///
/// Returns the interfaces to declare and the name the default route should
/// point to.
pub(crate) fn dummy_interfaces(
    version: ProtocolVersion,
    vlan_id: Option<u16>,
) -> (Vec<Interface>, String) {
    let name = dummy_nic_name(version);
    let mut base = BaseInterface::new(name.clone(), InterfaceType::Ethernet);
    match vlan_id {
        None => {
            set_ip(&mut base, version, dummy_address(version));
            (vec![EthernetInterface::new(base).into()], name)
        }
        Some(id) => {
            let vlan_name = vlan_nic_name(&name, id);
            let mut vlan_base =
                BaseInterface::new(vlan_name.clone(), InterfaceType::Vlan);
            set_ip(&mut vlan_base, version, dummy_address(version));
            (
                vec![
                    EthernetInterface::new(base).into(),
                    VlanInterface::new(vlan_base, VlanConfig::new(&name, id))
                        .into(),
                ],
                vlan_name,
            )
        }
    }
}

pub(crate) fn set_ip(
    base: &mut BaseInterface,
    version: ProtocolVersion,
    addr: InterfaceIpAddr,
) {
    match version {
        ProtocolVersion::Ipv4 => {
            base.ipv4 = Some(InterfaceIpv4::new_static(addr));
        }
        ProtocolVersion::Ipv6 => {
            base.ipv6 = Some(InterfaceIpv6::new_static(addr));
        }
    }
}

/// MAC map of a record holding no host, pointing the placeholder MAC at the
/// dummy interface of the primary protocol version.
pub(crate) fn dummy_mac_interface_map() -> Vec<MacInterfaceMapEntry> {
    vec![MacInterfaceMapEntry::new(
        DUMMY_MAC_ADDRESS,
        &dummy_nic_name(ProtocolVersion::Ipv4),
    )]
}

/// Records a freshly created infra-env starts with: a single dummy IPv4
/// interface without any form view header.
pub fn unconfigured_records()
-> Result<Vec<HostStaticNetworkConfig>, StaticNetError> {
    let (interfaces, _) = dummy_interfaces(ProtocolVersion::Ipv4, None);
    let mut state = NetworkState::new();
    state.interfaces = interfaces;
    Ok(vec![HostStaticNetworkConfig::new(
        state.to_yaml()?,
        dummy_mac_interface_map(),
    )])
}
