// SPDX-License-Identifier: Apache-2.0

use staticnet::{
    FormViewHost, NetworkWideConfig, StaticFormData, StaticIpSession,
};

use super::{
    CliError,
    input::{file_arg, load_from_file},
    store::DirInfraEnvService,
};

const ID_ARG: &str = "INFRA_ENV_ID";

fn id_arg() -> clap::Arg {
    clap::Arg::new(ID_ARG)
        .required(true)
        .index(1)
        .help("Infra-env ID")
}

fn infra_env_id(matches: &clap::ArgMatches) -> Result<&str, CliError> {
    matches
        .get_one::<String>(ID_ARG)
        .map(String::as_str)
        .ok_or_else(|| CliError::from("Infra-env ID not defined"))
}

fn input_file(matches: &clap::ArgMatches) -> &str {
    matches
        .get_one::<String>("FILE")
        .map(String::as_str)
        .unwrap_or("-")
}

pub(crate) struct CommandCreate;

impl CommandCreate {
    pub(crate) const CMD: &str = "create";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .about("Create an infra-env without static network config")
            .arg(DirInfraEnvService::arg())
            .arg(id_arg())
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        let service = DirInfraEnvService::from_matches(matches);
        service.create(infra_env_id(matches)?).await?;
        Ok(())
    }
}

pub(crate) struct CommandLoad;

impl CommandLoad {
    pub(crate) const CMD: &str = "load";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .about("Show static IP form data of an infra-env")
            .arg(DirInfraEnvService::arg())
            .arg(id_arg())
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        let service = DirInfraEnvService::from_matches(matches);
        let session = StaticIpSession::new(&service, infra_env_id(matches)?);
        let state = session.load().await?;
        if !state.is_complete() {
            log::info!(
                "Static IP configuration of infra-env {} is not complete yet",
                session.infra_env_id()
            );
        }
        println!("{}", serde_yaml::to_string(&StaticFormData::from(state))?);
        Ok(())
    }
}

pub(crate) struct CommandSaveNetworkWide;

impl CommandSaveNetworkWide {
    pub(crate) const CMD: &str = "save-network-wide";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .about("Save network wide settings to an infra-env")
            .arg(DirInfraEnvService::arg())
            .arg(id_arg())
            .arg(file_arg("FILE", "Network wide settings YAML, - for stdin"))
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        let network_wide: NetworkWideConfig =
            load_from_file(input_file(matches))?;
        network_wide.validate()?;
        let service = DirInfraEnvService::from_matches(matches);
        let session = StaticIpSession::new(&service, infra_env_id(matches)?);
        let changed = session.save_network_wide(&network_wide).await?;
        report(session.infra_env_id(), changed);
        Ok(())
    }
}

pub(crate) struct CommandSaveHosts;

impl CommandSaveHosts {
    pub(crate) const CMD: &str = "save-hosts";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .about("Save host settings to an infra-env")
            .arg(DirInfraEnvService::arg())
            .arg(id_arg())
            .arg(file_arg("FILE", "YAML list of hosts, - for stdin"))
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        let hosts: Vec<FormViewHost> = load_from_file(input_file(matches))?;
        let service = DirInfraEnvService::from_matches(matches);
        let session = StaticIpSession::new(&service, infra_env_id(matches)?);
        let changed = session.save_hosts(&hosts).await?;
        report(session.infra_env_id(), changed);
        Ok(())
    }
}

fn report(id: &str, changed: bool) {
    if changed {
        println!("Static network config of infra-env {id} saved");
    } else {
        println!("Static network config of infra-env {id} unchanged");
    }
}
