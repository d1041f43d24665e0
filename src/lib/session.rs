// SPDX-License-Identifier: Apache-2.0

use std::future::Future;

use crate::{
    FormViewHost, FormViewState, HostStaticNetworkConfig, InfraEnv,
    NetworkWideConfig, StaticNetError, classify, hosts_to_records,
    network_wide_to_records, unconfigured_records,
};

/// Backend storing the static network config of infra-envs.
pub trait InfraEnvService: Send + Sync {
    /// Should fail with [crate::ErrorKind::NotFound] for unknown `id`.
    fn fetch_infra_env(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<InfraEnv, StaticNetError>> + Send;

    fn persist_static_network_config(
        &self,
        id: &str,
        records: &[HostStaticNetworkConfig],
    ) -> impl Future<Output = Result<(), StaticNetError>> + Send;
}

/// Static IP form state of a single infra-env.
///
/// Every save fetches the latest stored records first, so several sessions
/// on the same infra-env never overwrite each other with stale hosts.
#[derive(Debug)]
pub struct StaticIpSession<'a, S: InfraEnvService> {
    service: &'a S,
    infra_env_id: String,
}

impl<'a, S: InfraEnvService> StaticIpSession<'a, S> {
    pub fn new(service: &'a S, infra_env_id: &str) -> Self {
        Self {
            service,
            infra_env_id: infra_env_id.to_string(),
        }
    }

    pub fn infra_env_id(&self) -> &str {
        self.infra_env_id.as_str()
    }

    /// Stored records, or the records of a freshly created infra-env when
    /// nothing is stored yet.
    pub async fn records(
        &self,
    ) -> Result<Vec<HostStaticNetworkConfig>, StaticNetError> {
        let infra_env =
            self.service.fetch_infra_env(&self.infra_env_id).await?;
        match infra_env.static_network_config()? {
            Some(records) if !records.is_empty() => Ok(records),
            _ => {
                log::debug!(
                    "Infra-env {} holds no static network config",
                    self.infra_env_id
                );
                unconfigured_records()
            }
        }
    }

    pub async fn load(&self) -> Result<FormViewState, StaticNetError> {
        classify(&self.records().await?)
    }

    /// Returns whether the backend was updated.
    pub async fn save_network_wide(
        &self,
        network_wide: &NetworkWideConfig,
    ) -> Result<bool, StaticNetError> {
        let current = self.records().await?;
        let records = network_wide_to_records(&current, network_wide)?;
        self.persist(&current, records).await
    }

    /// Returns whether the backend was updated.
    pub async fn save_hosts(
        &self,
        hosts: &[FormViewHost],
    ) -> Result<bool, StaticNetError> {
        let current = self.records().await?;
        let records = hosts_to_records(&current, hosts)?;
        self.persist(&current, records).await
    }

    async fn persist(
        &self,
        current: &[HostStaticNetworkConfig],
        records: Vec<HostStaticNetworkConfig>,
    ) -> Result<bool, StaticNetError> {
        if current == records.as_slice() {
            log::debug!(
                "Static network config of infra-env {} unchanged",
                self.infra_env_id
            );
            return Ok(false);
        }
        log::info!(
            "Saving static network config of {} host record(s) to infra-env {}",
            records.len(),
            self.infra_env_id
        );
        self.service
            .persist_static_network_config(&self.infra_env_id, &records)
            .await?;
        Ok(true)
    }
}
