// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use crate::{
    Cidr, ErrorKind, ProtocolVersion, StaticProtocolType,
    show_protocol_version, shown_protocol_versions,
};

#[test]
fn test_shown_protocol_versions_ipv4() {
    assert_eq!(
        shown_protocol_versions(StaticProtocolType::Ipv4),
        &[ProtocolVersion::Ipv4]
    );
    assert!(!show_protocol_version(
        StaticProtocolType::Ipv4,
        ProtocolVersion::Ipv6
    ));
}

#[test]
fn test_shown_protocol_versions_dual_stack_ipv4_first() {
    assert_eq!(
        shown_protocol_versions(StaticProtocolType::DualStack),
        &[ProtocolVersion::Ipv4, ProtocolVersion::Ipv6]
    );
    assert!(show_protocol_version(
        StaticProtocolType::DualStack,
        ProtocolVersion::Ipv6
    ));
}

#[test]
fn test_protocol_type_serde_names() {
    let protocol_type: StaticProtocolType =
        serde_yaml::from_str("dualStack").unwrap();
    assert_eq!(protocol_type, StaticProtocolType::DualStack);
    assert_eq!(StaticProtocolType::Ipv4.to_string(), "ipv4");
    assert_eq!(ProtocolVersion::Ipv6.to_string(), "ipv6");
}

#[test]
fn test_default_route_destination() {
    assert_eq!(ProtocolVersion::Ipv4.default_route_destination(), "0.0.0.0/0");
    assert_eq!(ProtocolVersion::Ipv6.default_route_destination(), "::/0");
    assert_eq!(ProtocolVersion::Ipv6.max_prefix_length(), 128);
}

#[test]
fn test_cidr_display_and_parse() {
    let cidr = Cidr::from_str("192.0.2.0/24").unwrap();
    assert_eq!(cidr, Cidr::new("192.0.2.0", 24));
    assert_eq!(cidr.to_string(), "192.0.2.0/24");
}

#[test]
fn test_cidr_empty() {
    let cidr = Cidr::from_str("").unwrap();
    assert!(cidr.is_empty());
    assert_eq!(cidr.to_string(), "");
}

#[test]
fn test_cidr_without_prefix_length() {
    let cidr = Cidr::from_str("192.0.2.0/").unwrap();
    assert_eq!(cidr.ip, "192.0.2.0");
    assert_eq!(cidr.prefix_length, None);
    assert_eq!(cidr.to_string(), "192.0.2.0/");
}

#[test]
fn test_cidr_invalid() {
    let result = Cidr::from_str("192.0.2.0");
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
    let result = Cidr::from_str("192.0.2.0/abc");
    assert!(result.is_err());
}
