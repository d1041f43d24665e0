// SPDX-License-Identifier: Apache-2.0

//! Static network configuration of installer hosts.
//!
//! Converts the static IP form model (network wide settings plus per host
//! MAC to IP mapping) into the per host NMState YAML records stored by the
//! installer backend, and parses those records back into the form model.

mod error;
mod form;
mod nmstate;
mod session;
mod static_ip;

pub(crate) use staticnet_derive::JsonDisplay;

pub use self::error::{ErrorKind, StaticNetError};
pub use self::form::{
    Cidr, FormViewHost, HostIps, HostStaticNetworkConfig, InfraEnv, IpConfig,
    IpConfigs, MacInterfaceMap, MacInterfaceMapEntry, NetworkWideConfig,
    ProtocolVersion, StaticFormData, StaticProtocolType,
    show_protocol_version, shown_protocol_versions,
};
pub use self::nmstate::{
    BaseInterface, BondConfig, BondInterface, BondMode, BondOptions,
    DnsClientState, DnsState, EthernetInterface, Interface, InterfaceIpAddr,
    InterfaceIpv4, InterfaceIpv6, InterfaceState, InterfaceType,
    NetworkState, RouteEntry, Routes, VlanConfig, VlanInterface,
    vlan_nic_name,
};
pub use self::session::{InfraEnvService, StaticIpSession};
pub use self::static_ip::{
    DUMMY_ADDRESSES, DUMMY_MAC_ADDRESS, FormViewState, classify, decode,
    dummy_address, dummy_nic_name, encode_form_data, encode_host,
    encode_network_wide, encode_network_yaml, find_all_real_interfaces,
    hosts_to_records, is_dummy_interface, mac_interface_map,
    network_wide_to_records, unconfigured_records,
};

pub(crate) use self::nmstate::deserializer;
