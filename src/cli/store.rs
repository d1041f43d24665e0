// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use staticnet::{
    ErrorKind, HostStaticNetworkConfig, InfraEnv, InfraEnvService,
    StaticNetError,
};

/// Infra-envs stored as `<id>.json` files of a directory.
#[derive(Debug, Clone)]
pub(crate) struct DirInfraEnvService {
    dir: PathBuf,
}

impl DirInfraEnvService {
    pub(crate) const ARG: &str = "STORE";

    pub(crate) fn arg() -> clap::Arg {
        clap::Arg::new(Self::ARG)
            .long("store")
            .short('s')
            .required(true)
            .help("Directory holding infra-env JSON files")
    }

    pub(crate) fn from_matches(matches: &clap::ArgMatches) -> Self {
        Self {
            dir: matches
                .get_one::<String>(Self::ARG)
                .map(PathBuf::from)
                .unwrap_or_default(),
        }
    }

    fn path(&self, id: &str) -> Result<PathBuf, StaticNetError> {
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(StaticNetError::new(
                ErrorKind::InvalidArgument,
                format!("Invalid infra-env ID '{id}'"),
            ));
        }
        Ok(self.dir.join(format!("{id}.json")))
    }

    pub(crate) async fn create(&self, id: &str) -> Result<(), StaticNetError> {
        let path = self.path(id)?;
        if tokio::fs::try_exists(&path).await? {
            return Err(StaticNetError::new(
                ErrorKind::InvalidArgument,
                format!("Infra-env {id} already exists"),
            ));
        }
        tokio::fs::create_dir_all(&self.dir).await?;
        self.write(&InfraEnv::new(id)).await
    }

    async fn write(&self, infra_env: &InfraEnv) -> Result<(), StaticNetError> {
        let path = self.path(&infra_env.id)?;
        log::debug!("Writing infra-env {} to {}", infra_env.id, path.display());
        tokio::fs::write(&path, serde_json::to_string_pretty(infra_env)?)
            .await?;
        Ok(())
    }
}

impl InfraEnvService for DirInfraEnvService {
    async fn fetch_infra_env(
        &self,
        id: &str,
    ) -> Result<InfraEnv, StaticNetError> {
        let path = self.path(id)?;
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StaticNetError::new(
                    ErrorKind::NotFound,
                    format!("Infra-env {id} not found in {}", path.display()),
                ));
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&content).map_err(|e| {
            StaticNetError::new(
                ErrorKind::MalformedInput,
                format!("Invalid infra-env file {}: {e}", path.display()),
            )
        })
    }

    async fn persist_static_network_config(
        &self,
        id: &str,
        records: &[HostStaticNetworkConfig],
    ) -> Result<(), StaticNetError> {
        let mut infra_env = self.fetch_infra_env(id).await?;
        infra_env.set_static_network_config(records)?;
        self.write(&infra_env).await
    }
}
