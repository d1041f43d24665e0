// SPDX-License-Identifier: Apache-2.0

mod base;
mod bond;
mod ethernet;
mod vlan;

pub use self::{
    base::BaseInterface,
    bond::{BondConfig, BondInterface, BondMode, BondOptions},
    ethernet::EthernetInterface,
    vlan::{VlanConfig, VlanInterface, vlan_nic_name},
};
