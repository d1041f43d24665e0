// SPDX-License-Identifier: Apache-2.0

mod form_data;
mod host;
mod network_wide;
mod protocol;
mod record;
mod validate;

pub use self::{
    form_data::StaticFormData,
    host::{FormViewHost, HostIps},
    network_wide::{Cidr, IpConfig, IpConfigs, NetworkWideConfig},
    protocol::{
        ProtocolVersion, StaticProtocolType, show_protocol_version,
        shown_protocol_versions,
    },
    record::{
        HostStaticNetworkConfig, InfraEnv, MacInterfaceMap,
        MacInterfaceMapEntry,
    },
};
