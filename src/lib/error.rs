// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::JsonDisplay;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Please report this as bug to upstream
    Bug,
    /// Form values cannot be encoded, or failed validation
    InvalidArgument,
    /// Persisted static network config is corrupted or was not produced by
    /// the form view
    MalformedInput,
    /// Requested infra-env does not exist
    NotFound,
}

// Try not implement From for StaticNetError here unless you are sure this
// error should always convert to certain type of ErrorKind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct StaticNetError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl std::fmt::Display for StaticNetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl StaticNetError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedInput, msg.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl std::error::Error for StaticNetError {}

impl From<serde_json::Error> for StaticNetError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ErrorKind::Bug, format!("serde_json::Error: {e}"))
    }
}

// Persisted network YAML is the only YAML this crate parses, hence
// failures are treated as corrupted input.
impl From<serde_yaml::Error> for StaticNetError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::new(
            ErrorKind::MalformedInput,
            format!("Invalid network YAML: {e}"),
        )
    }
}

impl From<std::io::Error> for StaticNetError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Bug, format!("std::io::Error: {e}"))
    }
}

impl From<std::net::AddrParseError> for StaticNetError {
    fn from(e: std::net::AddrParseError) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("Invalid IP address: {e}"),
        )
    }
}
