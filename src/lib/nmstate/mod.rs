// SPDX-License-Identifier: Apache-2.0

pub(crate) mod deserializer;
mod dns;
mod iface;
mod iface_state;
mod iface_type;
mod ifaces;
pub(crate) mod ip;
mod net_state;
mod route;

pub use self::{
    dns::{DnsClientState, DnsState},
    iface::Interface,
    iface_state::InterfaceState,
    iface_type::InterfaceType,
    ifaces::{
        BaseInterface, BondConfig, BondInterface, BondMode, BondOptions,
        EthernetInterface, VlanConfig, VlanInterface, vlan_nic_name,
    },
    ip::{InterfaceIpAddr, InterfaceIpv4, InterfaceIpv6},
    net_state::NetworkState,
    route::{RouteEntry, Routes},
};
