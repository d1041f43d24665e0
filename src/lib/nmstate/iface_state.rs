// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::JsonDisplay;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
/// The state of interface
pub enum InterfaceState {
    /// Deserialize and serialize from/to 'up'.
    #[default]
    Up,
    /// Deserialize and serialize from/to 'down'.
    Down,
    /// Deserialize and serialize from/to 'absent'.
    Absent,
}
