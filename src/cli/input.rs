// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use serde::de::DeserializeOwned;

use super::CliError;

/// Load YAML (or JSON) from `file_path`, `-` for stdin.
pub(crate) fn load_from_file<T>(file_path: &str) -> Result<T, CliError>
where
    T: DeserializeOwned,
{
    if file_path == "-" {
        load_from_fd(&mut std::io::stdin())
    } else {
        load_from_fd(&mut std::fs::File::open(file_path)?)
    }
}

fn load_from_fd<R, T>(fd: &mut R) -> Result<T, CliError>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut content = String::new();
    // Replace non-breaking space '\u{A0}'  to normal space
    fd.read_to_string(&mut content)?;
    let content = content.replace('\u{A0}', " ");

    Ok(serde_yaml::from_str::<T>(&content)?)
}

pub(crate) fn file_arg(name: &'static str, help: &'static str) -> clap::Arg {
    clap::Arg::new(name)
        .required(false)
        .default_value("-")
        .help(help)
}
