// SPDX-License-Identifier: Apache-2.0

use staticnet::HostStaticNetworkConfig;

use super::{
    CliError,
    input::{file_arg, load_from_file},
};

pub(crate) struct CommandShow;

impl CommandShow {
    pub(crate) const CMD: &str = "show";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .alias("s")
            .about("Show network YAML of a host network config")
            .arg(file_arg(
                "RECORDS_FILE",
                "JSON or YAML list of host network configs, - for stdin",
            ))
            .arg(
                clap::Arg::new("HOST")
                    .long("host")
                    .short('H')
                    .value_parser(clap::value_parser!(usize))
                    .default_value("0")
                    .help("Index of the host to show"),
            )
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
        let idx = matches.get_one::<usize>("HOST").copied().unwrap_or(0);
        let Some(record) = records.get(idx) else {
            return Err(format!(
                "Host index {idx} out of range, only {} host(s) defined",
                records.len()
            )
            .into());
        };
        for entry in record.mac_interface_map.iter() {
            println!("# {} -> {}", entry.mac_address, entry.logical_nic_name);
        }
        print!("{}", record.network_yaml);
        Ok(())
    }
}
