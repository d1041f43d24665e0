// SPDX-License-Identifier: Apache-2.0

use pretty_assertions::assert_eq;

use super::{
    BOND_PRIMARY_MAC, BOND_SECONDARY_MAC, HOST_MAC, bonded_host,
    dual_stack_network_wide, ipv4_host, ipv4_network_wide,
};
use crate::{
    BondMode, DUMMY_MAC_ADDRESS, ErrorKind, FormViewHost, Interface,
    InterfaceType, MacInterfaceMapEntry, NetworkState, ProtocolVersion,
    StaticProtocolType, decode, encode_host, encode_network_wide,
    encode_network_yaml, hosts_to_records, mac_interface_map,
    network_wide_to_records,
};

fn iface_names(state: &NetworkState) -> Vec<&str> {
    state.interfaces.iter().map(|i| i.name()).collect()
}

#[test]
fn test_encode_single_stack_header() {
    let yaml = encode_network_yaml(&ipv4_network_wide(), Some(&ipv4_host()))
        .unwrap();

    assert!(yaml.starts_with(
        "#staticnet-form-view\n#ipv4-machine-network 192.168.1.0/24\n"
    ));
    assert!(!yaml.contains("#ipv6-machine-network"));
}

#[test]
fn test_encode_dual_stack_header() {
    let yaml =
        encode_network_yaml(&dual_stack_network_wide(), None).unwrap();

    assert!(yaml.starts_with(
        "#staticnet-form-view\n\
         #ipv4-machine-network 192.168.1.0/24\n\
         #ipv6-machine-network 2001:db8:1::/64\n"
    ));
}

#[test]
fn test_encode_single_stack_host() {
    let yaml = encode_network_yaml(&ipv4_network_wide(), Some(&ipv4_host()))
        .unwrap();
    let state = NetworkState::new_from_yaml(&yaml).unwrap();

    assert_eq!(iface_names(&state), vec!["eth0"]);
    let ipv4 = state.interfaces[0].base_iface().ipv4.as_ref().unwrap();
    assert_eq!(ipv4.dhcp, Some(false));
    let addr = &ipv4.addresses.as_ref().unwrap()[0];
    assert_eq!(addr.ip.to_string(), "192.168.1.10");
    assert_eq!(addr.prefix_length, 24);

    let routes = state.routes.unwrap().config.unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].destination.as_deref(), Some("0.0.0.0/0"));
    assert_eq!(routes[0].next_hop_addr.as_deref(), Some("192.168.1.1"));
    assert_eq!(routes[0].next_hop_iface.as_deref(), Some("eth0"));
    assert_eq!(routes[0].table_id, Some(254));
    assert_eq!(state.dns.unwrap().servers(), &["8.8.8.8".to_string()]);
}

#[test]
fn test_encode_sections_order() {
    let yaml = encode_network_yaml(&ipv4_network_wide(), Some(&ipv4_host()))
        .unwrap();
    let interfaces = yaml.find("interfaces:").unwrap();
    let routes = yaml.find("routes:").unwrap();
    let dns = yaml.find("dns-resolver:").unwrap();

    assert!(interfaces < routes);
    assert!(routes < dns);
}

#[test]
fn test_encode_real_interface_before_dummy() {
    let yaml =
        encode_network_yaml(&dual_stack_network_wide(), Some(&ipv4_host()))
            .unwrap();
    let state = NetworkState::new_from_yaml(&yaml).unwrap();

    assert_eq!(iface_names(&state), vec!["eth0", "dummy1"]);
    let routes = state.routes.unwrap().config.unwrap();
    assert_eq!(routes[0].next_hop_iface.as_deref(), Some("eth0"));
    assert_eq!(routes[1].destination.as_deref(), Some("::/0"));
    assert_eq!(routes[1].next_hop_iface.as_deref(), Some("dummy1"));
    assert_eq!(routes[1].next_hop_addr.as_deref(), Some("2001:db8:1::1"));
}

#[test]
fn test_encode_network_wide_only_uses_dummies() {
    let records = encode_network_wide(&dual_stack_network_wide()).unwrap();
    let state = NetworkState::new_from_yaml(&records[0].network_yaml).unwrap();

    assert_eq!(iface_names(&state), vec!["dummy0", "dummy1"]);
    assert_eq!(
        state.interfaces[0].base_iface().ipv4.as_ref().unwrap().addresses,
        Some(vec![crate::dummy_address(ProtocolVersion::Ipv4)])
    );
    assert_eq!(
        records[0].mac_interface_map,
        vec![MacInterfaceMapEntry::new(DUMMY_MAC_ADDRESS, "dummy0")]
    );
}

#[test]
fn test_encode_vlan() {
    let mut network_wide = ipv4_network_wide();
    network_wide.use_vlan = true;
    network_wide.vlan_id = Some(100);
    let yaml =
        encode_network_yaml(&network_wide, Some(&ipv4_host())).unwrap();
    let state = NetworkState::new_from_yaml(&yaml).unwrap();

    assert_eq!(iface_names(&state), vec!["eth0", "eth0.100"]);
    assert!(state.interfaces[0].base_iface().ipv4.is_none());
    if let Interface::Vlan(vlan_iface) = &state.interfaces[1] {
        assert_eq!(vlan_iface.vlan_id(), Some(100));
        assert_eq!(
            vlan_iface.vlan.as_ref().unwrap().base_iface.as_deref(),
            Some("eth0")
        );
        assert!(vlan_iface.base.ipv4.is_some());
    } else {
        panic!("Expecting VLAN interface");
    }
    let routes = state.routes.unwrap().config.unwrap();
    assert_eq!(routes[0].next_hop_iface.as_deref(), Some("eth0.100"));
}

#[test]
fn test_encode_vlan_ignored_without_vlan_id() {
    let mut network_wide = ipv4_network_wide();
    network_wide.use_vlan = true;
    let yaml =
        encode_network_yaml(&network_wide, Some(&ipv4_host())).unwrap();
    let state = NetworkState::new_from_yaml(&yaml).unwrap();

    assert_eq!(iface_names(&state), vec!["eth0"]);
}

#[test]
fn test_encode_bond() {
    let yaml =
        encode_network_yaml(&ipv4_network_wide(), Some(&bonded_host()))
            .unwrap();
    let state = NetworkState::new_from_yaml(&yaml).unwrap();

    assert_eq!(iface_names(&state), vec!["bond0"]);
    assert_eq!(state.interfaces[0].iface_type(), InterfaceType::Bond);
    if let Interface::Bond(bond_iface) = &state.interfaces[0] {
        assert_eq!(bond_iface.mode(), Some(BondMode::ActiveBackup));
        assert_eq!(
            bond_iface.ports(),
            Some(["eth0".to_string(), "eth1".to_string()].as_slice())
        );
        assert_eq!(
            bond_iface.bond.as_ref().unwrap().options.as_ref().unwrap().miimon,
            Some(140)
        );
        assert!(bond_iface.base.ipv4.is_some());
    }
    assert!(yaml.contains("mode: active-backup"));
}

#[test]
fn test_encode_bond_requires_both_macs() {
    let mut host = bonded_host();
    host.bond_secondary_interface = String::new();
    host.mac_address = HOST_MAC.to_string();
    let yaml =
        encode_network_yaml(&ipv4_network_wide(), Some(&host)).unwrap();
    let state = NetworkState::new_from_yaml(&yaml).unwrap();

    assert_eq!(iface_names(&state), vec!["eth0"]);
    assert_eq!(
        mac_interface_map(Some(&host)),
        vec![MacInterfaceMapEntry::new(HOST_MAC, "eth0")]
    );
}

#[test]
fn test_encode_missing_prefix_length() {
    let mut network_wide = ipv4_network_wide();
    network_wide.ip_configs.ipv4.machine_network.prefix_length = None;
    let result = encode_host(&network_wide, &ipv4_host());

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert!(e.msg().contains("prefix length not configured"));
    }
}

#[test]
fn test_encode_host_ip_of_wrong_family() {
    let host =
        FormViewHost::new(HOST_MAC)
            .with_ip(ProtocolVersion::Ipv4, "2001:db8::1");
    let result = encode_host(&ipv4_network_wide(), &host);

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_encode_empty_dns() {
    let mut network_wide = ipv4_network_wide();
    network_wide.dns = " , ".to_string();
    let result = encode_network_wide(&network_wide);

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_encode_dns_split_and_trim() {
    let mut network_wide = ipv4_network_wide();
    network_wide.dns = " 8.8.8.8 ,, 1.1.1.1".to_string();
    let yaml = encode_network_yaml(&network_wide, None).unwrap();
    let state = NetworkState::new_from_yaml(&yaml).unwrap();

    assert_eq!(
        state.dns.unwrap().servers(),
        &["8.8.8.8".to_string(), "1.1.1.1".to_string()]
    );
}

#[test]
fn test_encode_host_without_mac() {
    let host =
        FormViewHost::new("").with_ip(ProtocolVersion::Ipv4, "192.168.1.10");
    let result = encode_host(&ipv4_network_wide(), &host);

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_mac_interface_map_single_nic() {
    assert_eq!(
        mac_interface_map(Some(&ipv4_host())),
        vec![MacInterfaceMapEntry::new(HOST_MAC, "eth0")]
    );
}

#[test]
fn test_mac_interface_map_bond() {
    assert_eq!(
        mac_interface_map(Some(&bonded_host())),
        vec![
            MacInterfaceMapEntry::new(BOND_PRIMARY_MAC, "eth0"),
            MacInterfaceMapEntry::new(BOND_SECONDARY_MAC, "eth1"),
        ]
    );
}

#[test]
fn test_mac_interface_map_no_host() {
    assert_eq!(
        mac_interface_map(None),
        vec![MacInterfaceMapEntry::new(DUMMY_MAC_ADDRESS, "dummy0")]
    );
}

#[test]
fn test_network_wide_to_records_trims_ipv6() {
    let host = ipv4_host().with_ip(ProtocolVersion::Ipv6, "2001:db8:1::10");
    let current = vec![encode_host(&dual_stack_network_wide(), &host).unwrap()];

    let records =
        network_wide_to_records(&current, &ipv4_network_wide()).unwrap();
    let form_data = decode(&records).unwrap();

    assert_eq!(form_data.network_wide.protocol_type, StaticProtocolType::Ipv4);
    assert_eq!(form_data.hosts, vec![ipv4_host()]);
    assert!(!records[0].network_yaml.contains("2001:db8:1::10"));
}

#[test]
fn test_network_wide_to_records_to_dual_stack_keeps_hosts() {
    let current =
        vec![encode_host(&ipv4_network_wide(), &ipv4_host()).unwrap()];

    let records =
        network_wide_to_records(&current, &dual_stack_network_wide()).unwrap();
    let form_data = decode(&records).unwrap();

    assert_eq!(form_data.network_wide, dual_stack_network_wide());
    assert_eq!(form_data.hosts, vec![ipv4_host()]);
}

#[test]
fn test_network_wide_to_records_without_hosts() {
    let current = crate::unconfigured_records().unwrap();

    let records =
        network_wide_to_records(&current, &ipv4_network_wide()).unwrap();

    assert_eq!(records, encode_network_wide(&ipv4_network_wide()).unwrap());
}

#[test]
fn test_hosts_to_records_keeps_network_wide() {
    let current = encode_network_wide(&dual_stack_network_wide()).unwrap();
    let hosts = vec![ipv4_host(), bonded_host()];

    let records = hosts_to_records(&current, &hosts).unwrap();
    let form_data = decode(&records).unwrap();

    assert_eq!(form_data.network_wide, dual_stack_network_wide());
    assert_eq!(form_data.hosts, hosts);
}

#[test]
fn test_hosts_to_records_remove_all_hosts() {
    let current =
        vec![encode_host(&ipv4_network_wide(), &ipv4_host()).unwrap()];

    let records = hosts_to_records(&current, &[]).unwrap();

    assert_eq!(records, encode_network_wide(&ipv4_network_wide()).unwrap());
}
