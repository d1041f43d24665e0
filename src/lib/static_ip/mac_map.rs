// SPDX-License-Identifier: Apache-2.0

use crate::{FormViewHost, MacInterfaceMap, MacInterfaceMapEntry};

use super::dummy::dummy_mac_interface_map;

pub(crate) const REAL_NIC_NAME: &str = "eth0";
pub(crate) const REAL_NIC_NAME_1: &str = "eth1";
pub(crate) const BOND_NIC_NAME: &str = "bond0";

/// MAC address to logical NIC name map stored next to the network YAML of
/// `host`. The port names match the ones [crate::encode_host] declares.
pub fn mac_interface_map(host: Option<&FormViewHost>) -> MacInterfaceMap {
    match host {
        None => dummy_mac_interface_map(),
        Some(host) if host.is_bonded() => vec![
            MacInterfaceMapEntry::new(
                &host.bond_primary_interface,
                REAL_NIC_NAME,
            ),
            MacInterfaceMapEntry::new(
                &host.bond_secondary_interface,
                REAL_NIC_NAME_1,
            ),
        ],
        Some(host) => {
            vec![MacInterfaceMapEntry::new(&host.mac_address, REAL_NIC_NAME)]
        }
    }
}
