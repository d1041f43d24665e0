// SPDX-License-Identifier: Apache-2.0

use pretty_assertions::assert_eq;

use super::{HOST_MAC, ipv4_host, ipv4_network_wide};
use crate::{
    BondMode, Cidr, ErrorKind, FormViewHost, FormViewState,
    HostStaticNetworkConfig, InfraEnv, MacInterfaceMapEntry, NetworkState,
    NetworkWideConfig, ProtocolVersion, StaticFormData, StaticProtocolType,
    classify, decode, encode_host, encode_network_wide,
    find_all_real_interfaces, unconfigured_records,
};

fn record(network_yaml: &str, macs: &[&str]) -> HostStaticNetworkConfig {
    HostStaticNetworkConfig::new(
        network_yaml.to_string(),
        macs.iter()
            .enumerate()
            .map(|(idx, mac)| {
                MacInterfaceMapEntry::new(mac, &format!("eth{idx}"))
            })
            .collect(),
    )
}

fn assert_malformed(records: &[HostStaticNetworkConfig], msg: &str) {
    let result = decode(records);
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::MalformedInput);
        assert!(e.msg().contains(msg), "Unexpected error {e}");
    }
}

#[test]
fn test_decode_empty_records() {
    assert_malformed(&[], "Static network config is empty");
}

#[test]
fn test_decode_fresh_cluster() {
    let records = unconfigured_records().unwrap();

    assert_eq!(classify(&records).unwrap(), FormViewState::Unconfigured);
    assert_eq!(decode(&records).unwrap(), StaticFormData::default());
}

#[test]
fn test_decode_without_form_view_marker() {
    let records = vec![record(
        r#"interfaces:
- name: eth0
  type: ethernet
  state: up
"#,
        &[HOST_MAC],
    )];

    let form_data = decode(&records).unwrap();

    assert_eq!(form_data.network_wide, NetworkWideConfig::default());
    assert!(form_data.hosts.is_empty());
}

#[test]
fn test_decode_hand_written_vlan_record() {
    let records = vec![record(
        r#"#staticnet-form-view
#ipv4-machine-network 192.0.2.0/24
interfaces:
- name: eth0
  type: ethernet
  state: up
- name: eth0.200
  type: vlan
  state: up
  vlan:
    base-iface: eth0
    id: 200
  ipv4:
    enabled: true
    dhcp: false
    address:
    - ip: 192.0.2.10
      prefix-length: 24
routes:
  config:
  - destination: 0.0.0.0/0
    next-hop-address: 192.0.2.1
    next-hop-interface: eth0.200
    table-id: 254
dns-resolver:
  config:
    server:
    - 192.0.2.53
    - 192.0.2.54
"#,
        &[HOST_MAC],
    )];

    let form_data = decode(&records).unwrap();

    let network_wide = &form_data.network_wide;
    assert_eq!(network_wide.protocol_type, StaticProtocolType::Ipv4);
    assert!(network_wide.use_vlan);
    assert_eq!(network_wide.vlan_id, Some(200));
    assert_eq!(network_wide.dns, "192.0.2.53,192.0.2.54");
    assert_eq!(
        network_wide.ip_configs.ipv4.machine_network,
        Cidr::new("192.0.2.0", 24)
    );
    assert_eq!(network_wide.ip_configs.ipv4.gateway, "192.0.2.1");
    assert_eq!(
        form_data.hosts,
        vec![
            FormViewHost::new(HOST_MAC)
                .with_ip(ProtocolVersion::Ipv4, "192.0.2.10")
        ]
    );
}

#[test]
fn test_decode_hand_written_bond_record() {
    let records = vec![record(
        r#"#staticnet-form-view
#ipv4-machine-network 192.0.2.0/24
interfaces:
- name: bond0
  type: bond
  state: up
  link-aggregation:
    mode: balance-xor
    port:
    - eth0
    - eth1
  ipv4:
    enabled: true
    address:
    - ip: 192.0.2.10
      prefix-length: 24
routes:
  config:
  - destination: 0.0.0.0/0
    next-hop-address: 192.0.2.1
    next-hop-interface: bond0
dns-resolver:
  config:
    server:
    - 192.0.2.53
"#,
        &["aa:bb:cc:dd:ee:01", "aa:bb:cc:dd:ee:02"],
    )];

    let form_data = decode(&records).unwrap();

    let host = &form_data.hosts[0];
    assert!(host.use_bond);
    assert_eq!(host.bond_type, BondMode::XOR);
    assert_eq!(host.mac_address, "");
    assert_eq!(host.bond_primary_interface, "aa:bb:cc:dd:ee:01");
    assert_eq!(host.bond_secondary_interface, "aa:bb:cc:dd:ee:02");
    assert_eq!(host.ips.ipv4, "192.0.2.10");
}

#[test]
fn test_decode_bond_missing_second_mac() {
    let mut records = vec![
        encode_host(&ipv4_network_wide(), &super::bonded_host()).unwrap(),
    ];
    records[0].mac_interface_map.truncate(1);

    assert_malformed(&records, "second bond port");
}

#[test]
fn test_decode_missing_dns() {
    let records = vec![record(
        r#"#staticnet-form-view
#ipv4-machine-network 192.0.2.0/24
interfaces:
- name: dummy0
  type: ethernet
  ipv4:
    enabled: true
    address:
    - ip: 192.0.2.1
      prefix-length: 24
routes:
  config:
  - destination: 0.0.0.0/0
    next-hop-address: 192.0.2.254
    next-hop-interface: dummy0
"#,
        &[HOST_MAC],
    )];

    assert_malformed(&records, "doesn't contain dns-resolver section");
}

#[test]
fn test_decode_missing_routes() {
    let records = vec![record(
        r#"#staticnet-form-view
#ipv4-machine-network 192.0.2.0/24
interfaces: []
dns-resolver:
  config:
    server:
    - 192.0.2.53
"#,
        &[HOST_MAC],
    )];

    assert_malformed(&records, "doesn't contain routes section");
}

#[test]
fn test_decode_missing_default_route_of_shown_version() {
    let records = vec![record(
        r#"#staticnet-form-view
#ipv4-machine-network 192.0.2.0/24
#ipv6-machine-network 2001:db8::/64
routes:
  config:
  - destination: 0.0.0.0/0
    next-hop-address: 192.0.2.254
    next-hop-interface: dummy0
dns-resolver:
  config:
    server:
    - 192.0.2.53
"#,
        &[HOST_MAC],
    )];

    assert_malformed(&records, "default route for ipv6");
}

#[test]
fn test_decode_default_route_without_gateway() {
    let records = vec![record(
        r#"#staticnet-form-view
#ipv4-machine-network 192.0.2.0/24
routes:
  config:
  - destination: 0.0.0.0/0
    next-hop-interface: dummy0
dns-resolver:
  config:
    server:
    - 192.0.2.53
"#,
        &[HOST_MAC],
    )];

    assert_malformed(&records, "doesn't contain a gateway for ipv4");
}

#[test]
fn test_decode_missing_machine_network() {
    let mut records = encode_network_wide(&ipv4_network_wide()).unwrap();
    records[0].network_yaml = records[0]
        .network_yaml
        .replace("#ipv4-machine-network 192.168.1.0/24\n", "");

    assert_malformed(&records, "ipv4 machine network");
}

#[test]
fn test_decode_invalid_machine_network() {
    let mut records = encode_network_wide(&ipv4_network_wide()).unwrap();
    records[0].network_yaml = records[0]
        .network_yaml
        .replace("192.168.1.0/24", "192.168.1.0/abc");

    assert_malformed(&records, "Invalid machine network");
}

#[test]
fn test_decode_empty_mac_interface_map() {
    let mut records =
        vec![encode_host(&ipv4_network_wide(), &ipv4_host()).unwrap()];
    records[0].mac_interface_map.clear();

    assert_malformed(&records, "missing information");
}

#[test]
fn test_decode_empty_mac_interface_map_of_second_host() {
    let mut records = vec![
        encode_host(&ipv4_network_wide(), &ipv4_host()).unwrap(),
        encode_host(&ipv4_network_wide(), &ipv4_host()).unwrap(),
    ];
    records[1].mac_interface_map.clear();

    assert_malformed(&records, "missing information");
}

#[test]
fn test_decode_empty_mac_address() {
    let mut records =
        vec![encode_host(&ipv4_network_wide(), &ipv4_host()).unwrap()];
    records[0].mac_interface_map[0].mac_address = String::new();

    assert_malformed(&records, "missing mac address");
}

#[test]
fn test_decode_empty_network_yaml() {
    assert_malformed(&[record("", &[HOST_MAC])], "missing information");
}

#[test]
fn test_decode_address_block_without_address() {
    let records = vec![record(
        r#"#staticnet-form-view
#ipv4-machine-network 192.0.2.0/24
interfaces:
- name: eth0
  type: ethernet
  ipv4:
    enabled: true
    dhcp: true
routes:
  config:
  - destination: 0.0.0.0/0
    next-hop-address: 192.0.2.254
    next-hop-interface: eth0
dns-resolver:
  config:
    server:
    - 192.0.2.53
"#,
        &[HOST_MAC],
    )];

    assert_malformed(&records, "doesn't contain an address for protocol");
}

#[test]
fn test_decode_invalid_yaml() {
    assert_malformed(
        &[record("#staticnet-form-view\ninterfaces: {", &[HOST_MAC])],
        "Invalid network YAML",
    );
}

#[test]
fn test_decode_drops_host_without_real_interface() {
    let network_wide = ipv4_network_wide();
    let mut dummy_only = encode_network_wide(&network_wide).unwrap().remove(0);
    dummy_only.mac_interface_map[0].mac_address =
        "aa:bb:cc:dd:ee:09".to_string();
    let records = vec![
        encode_host(&network_wide, &ipv4_host()).unwrap(),
        dummy_only,
    ];

    let form_data = decode(&records).unwrap();

    assert_eq!(form_data.hosts, vec![ipv4_host()]);
}

#[test]
fn test_find_all_real_interfaces() {
    let mut network_wide = super::dual_stack_network_wide();
    network_wide.use_vlan = true;
    network_wide.vlan_id = Some(10);
    let record = encode_host(&network_wide, &ipv4_host()).unwrap();
    let state = NetworkState::new_from_yaml(&record.network_yaml).unwrap();

    let names: Vec<&str> = find_all_real_interfaces(&state.interfaces)
        .into_iter()
        .map(|iface| iface.name())
        .collect();

    assert_eq!(state.interfaces.len(), 4);
    assert_eq!(names, vec!["eth0", "eth0.10"]);
}

#[test]
fn test_infra_env_static_network_config() {
    let records =
        vec![encode_host(&ipv4_network_wide(), &ipv4_host()).unwrap()];
    let mut infra_env = InfraEnv::new("infra-env-1");
    assert_eq!(infra_env.static_network_config().unwrap(), None);

    infra_env.set_static_network_config(&records).unwrap();

    assert!(
        infra_env
            .static_network_config
            .as_deref()
            .unwrap()
            .contains("\"macInterfaceMap\"")
    );
    assert_eq!(infra_env.static_network_config().unwrap(), Some(records));
}

#[test]
fn test_infra_env_snake_case_static_network_config() {
    let infra_env: InfraEnv = serde_json::from_str(
        r#"{
            "id": "infra-env-1",
            "static_network_config": "[{\"network_yaml\": \"interfaces: []\", \"mac_interface_map\": [{\"mac_address\": \"aa:bb:cc:dd:ee:ff\", \"logical_nic_name\": \"eth0\"}]}]"
        }"#,
    )
    .unwrap();

    let records = infra_env.static_network_config().unwrap().unwrap();

    assert_eq!(records[0].network_yaml, "interfaces: []");
    assert_eq!(
        records[0].mac_interface_map,
        vec![MacInterfaceMapEntry::new(HOST_MAC, "eth0")]
    );
}

#[test]
fn test_infra_env_invalid_static_network_config() {
    let mut infra_env = InfraEnv::new("infra-env-1");
    infra_env.static_network_config = Some("{not json".to_string());
    let result = infra_env.static_network_config();

    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::MalformedInput);
    }
}
