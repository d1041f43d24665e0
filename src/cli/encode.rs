// SPDX-License-Identifier: Apache-2.0

use staticnet::{StaticFormData, encode_form_data};

use super::{
    CliError,
    input::{file_arg, load_from_file},
};

pub(crate) struct CommandEncode;

impl CommandEncode {
    pub(crate) const CMD: &str = "encode";

    pub(crate) fn new_cmd() -> clap::Command {
        clap::Command::new(Self::CMD)
            .alias("e")
            .about("Encode static IP form data into host network configs")
            .arg(file_arg("FORM_FILE", "Form data YAML file, - for stdin"))
            .arg(
                clap::Arg::new("NO_VALIDATE")
                    .long("no-validate")
                    .action(clap::ArgAction::SetTrue)
                    .help("Encode incomplete form data"),
            )
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
        if !matches.get_flag("NO_VALIDATE") {
            form_data.validate()?;
        }
        let records = encode_form_data(&form_data)?;
        println!("{}", serde_json::to_string_pretty(&records)?);
        Ok(())
    }
}
