// SPDX-License-Identifier: Apache-2.0

use crate::{
    BondMode, ErrorKind, Interface, InterfaceIpAddr, InterfaceType,
    NetworkState, is_dummy_interface,
};

#[test]
fn test_parse_bond_with_integer_mode_and_quoted_miimon() {
    let state: NetworkState = serde_yaml::from_str(
        r#"---
interfaces:
- name: bond0
  type: bond
  state: up
  link-aggregation:
    mode: 4
    options:
      miimon: "140"
    port:
    - eth0
    - eth1
"#,
    )
    .unwrap();

    assert_eq!(state.interfaces.len(), 1);
    if let Interface::Bond(iface) = &state.interfaces[0] {
        assert_eq!(iface.mode(), Some(BondMode::LACP));
        let options =
            iface.bond.as_ref().and_then(|b| b.options.as_ref()).unwrap();
        assert_eq!(options.miimon, Some(140));
        assert_eq!(
            iface.ports(),
            Some(["eth0".to_string(), "eth1".to_string()].as_slice())
        );
    } else {
        panic!("Expecting bond interface, got {:?}", state.interfaces[0]);
    }
}

#[test]
fn test_parse_bond_ports_alias() {
    let state: NetworkState = serde_yaml::from_str(
        r#"---
interfaces:
- name: bond0
  type: bond
  link-aggregation:
    mode: balance-alb
    ports:
    - eth0
"#,
    )
    .unwrap();
    if let Interface::Bond(iface) = &state.interfaces[0] {
        assert_eq!(iface.mode(), Some(BondMode::ALB));
        assert_eq!(iface.ports(), Some(["eth0".to_string()].as_slice()));
    } else {
        panic!("Expecting bond interface");
    }
}

#[test]
fn test_parse_vlan_with_quoted_id() {
    let state: NetworkState = serde_yaml::from_str(
        r#"---
interfaces:
- name: eth0.100
  type: vlan
  vlan:
    base-iface: eth0
    id: "100"
  ipv4:
    enabled: "yes"
    dhcp: false
    address:
    - ip: 192.0.2.10
      prefix-length: "24"
"#,
    )
    .unwrap();

    let iface = &state.interfaces[0];
    assert_eq!(iface.iface_type(), InterfaceType::Vlan);
    if let Interface::Vlan(vlan_iface) = iface {
        assert_eq!(vlan_iface.vlan_id(), Some(100));
    }
    let ipv4 = iface.base_iface().ipv4.as_ref().unwrap();
    assert!(ipv4.is_enabled());
    let addrs = ipv4.addresses.as_ref().unwrap();
    assert_eq!(addrs[0].ip.to_string(), "192.0.2.10");
    assert_eq!(addrs[0].prefix_length, 24);
}

#[test]
fn test_parse_unsupported_iface_type() {
    let result = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: br0
  type: linux-bridge
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::MalformedInput);
    }
}

#[test]
fn test_parse_iface_without_type() {
    let result = NetworkState::new_from_yaml(
        r#"---
interfaces:
- name: eth0
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::MalformedInput);
    }
}

#[test]
fn test_parse_routes_and_dns() {
    let state = NetworkState::new_from_yaml(
        r#"---
routes:
  config:
  - destination: 0.0.0.0/0
    next-hop-address: 192.0.2.1
    next-hop-interface: eth0
    table-id: "254"
dns-resolver:
  config:
    server:
    - 192.0.2.53
"#,
    )
    .unwrap();
    assert!(state.interfaces.is_empty());
    let routes = state.routes.unwrap().config.unwrap();
    assert_eq!(routes[0].table_id, Some(254));
    assert_eq!(routes[0].next_hop_iface.as_deref(), Some("eth0"));
    assert_eq!(state.dns.unwrap().servers(), &["192.0.2.53".to_string()]);
}

#[test]
fn test_is_dummy_interface() {
    assert!(is_dummy_interface("dummy0"));
    assert!(is_dummy_interface("dummy1"));
    assert!(is_dummy_interface("dummy1.100"));
    assert!(!is_dummy_interface("eth0"));
    assert!(!is_dummy_interface("bond0.100"));
    assert!(!is_dummy_interface("dummy"));
    assert!(!is_dummy_interface("dummyfoo"));
}

#[test]
fn test_interface_ip_addr_from_str() {
    let addr = InterfaceIpAddr::try_from("2001:db8::1/64").unwrap();
    assert_eq!(addr.ip.to_string(), "2001:db8::1");
    assert_eq!(addr.prefix_length, 64);

    let addr = InterfaceIpAddr::try_from("192.0.2.1").unwrap();
    assert_eq!(addr.prefix_length, 32);

    let result = InterfaceIpAddr::try_from("192.0.2.1/33");
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_parse_address_keeps_notation() {
    let state = NetworkState::new_from_yaml(
        r#"interfaces:
- name: eth0
  type: ethernet
  ipv6:
    enabled: true
    address:
    - ip: 2001:DB8::0A
      prefix-length: 64
"#,
    )
    .unwrap();
    let ipv6 = state.interfaces[0].base_iface().ipv6.as_ref().unwrap();
    assert_eq!(ipv6.addresses.as_ref().unwrap()[0].ip, "2001:DB8::0A");
}

#[test]
fn test_parse_invalid_address() {
    let result = NetworkState::new_from_yaml(
        r#"interfaces:
- name: eth0
  type: ethernet
  ipv4:
    enabled: true
    address:
    - ip: 192.0.2.300
      prefix-length: 24
"#,
    );
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::MalformedInput);
    }
}
