// SPDX-License-Identifier: Apache-2.0

use staticnet::StaticFormData;

use super::{
    CliError,
    input::{file_arg, load_from_file},
};

pub(crate) struct CommandCheck;

impl CommandCheck {
    pub(crate) const CMD: &str = "check";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .alias("c")
            .about("Validate static IP form data")
            .arg(file_arg("FORM_FILE", "Form data YAML file, - for stdin"))
    }

    pub(crate) async fn handle(
        matches: &clap::ArgMatches,
    ) -> Result<(), CliError> {
        let form_data: StaticFormData = load_from_file(
            matches
                .get_one::<String>("FORM_FILE")
                .map(String::as_str)
                .unwrap_or("-"),
        )?;
        form_data.validate()?;
        println!(
            "Form data of {} host(s) is valid",
            form_data.hosts.len()
        );
        Ok(())
    }
}
