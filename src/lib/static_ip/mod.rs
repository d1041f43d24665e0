// SPDX-License-Identifier: Apache-2.0

mod decode;
mod dummy;
mod encode;
mod header;
mod mac_map;

pub use self::{
    decode::{FormViewState, classify, decode, find_all_real_interfaces},
    dummy::{
        DUMMY_ADDRESSES, DUMMY_MAC_ADDRESS, dummy_address, dummy_nic_name,
        is_dummy_interface, unconfigured_records,
    },
    encode::{
        encode_form_data, encode_host, encode_network_wide,
        encode_network_yaml, hosts_to_records, network_wide_to_records,
    },
    mac_map::mac_interface_map,
};
