// SPDX-License-Identifier: Apache-2.0

use staticnet::{HostStaticNetworkConfig, StaticFormData, classify};

use super::{
    CliError,
    input::{file_arg, load_from_file},
};

pub(crate) struct CommandDecode;

impl CommandDecode {
    pub(crate) const CMD: &str = "decode";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .alias("d")
            .about("Decode host network configs into static IP form data")
            .arg(file_arg(
                "RECORDS_FILE",
                "JSON or YAML list of host network configs, - for stdin",
            ))
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        let records: Vec<HostStaticNetworkConfig> = load_from_file(
            matches
                .get_one::<String>("RECORDS_FILE")
                .map(String::as_str)
                .unwrap_or("-"),
        )?;
        let state = classify(&records)?;
        if !state.is_complete() {
            log::info!("Static IP configuration is not complete yet");
        }
        println!("{}", serde_yaml::to_string(&StaticFormData::from(state))?);
        Ok(())
    }
}
