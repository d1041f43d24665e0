// SPDX-License-Identifier: Apache-2.0

mod check;
mod decode;
mod encode;
mod error;
mod infra_env;
mod input;
mod show;
mod store;

pub(crate) use self::error::CliError;
use self::{
    check::CommandCheck,
    decode::CommandDecode,
    encode::CommandEncode,
    infra_env::{
        CommandCreate, CommandLoad, CommandSaveHosts, CommandSaveNetworkWide,
    },
    show::CommandShow,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let mut cli_cmd = clap::Command::new("snt")
        .about("Static IP form view network config CLI")
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            clap::Arg::new("quiet")
                .short('q')
                .action(clap::ArgAction::SetTrue)
                .help("Disable logging")
                .global(true),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .action(clap::ArgAction::Count)
                .help("Increase verbose level")
                .global(true),
        )
        .subcommand(CommandEncode::new_cmd())
        .subcommand(CommandDecode::new_cmd())
        .subcommand(CommandCheck::new_cmd())
        .subcommand(CommandShow::new_cmd())
        .subcommand(CommandCreate::new_cmd())
        .subcommand(CommandLoad::new_cmd())
        .subcommand(CommandSaveNetworkWide::new_cmd())
        .subcommand(CommandSaveHosts::new_cmd());

    let matches = cli_cmd.get_matches_mut();

    let (log_groups, log_level) = match matches.get_count("verbose") {
        0 => (vec!["staticnet", "snt"], log::LevelFilter::Warn),
        1 => (vec!["staticnet", "snt"], log::LevelFilter::Info),
        2 => (vec!["staticnet", "snt"], log::LevelFilter::Debug),
        3 => (vec!["staticnet", "snt"], log::LevelFilter::Trace),
        _ => (vec![], log::LevelFilter::Trace),
    };

    if !matches.get_flag("quiet") {
        let mut log_builder = env_logger::Builder::new();
        if log_groups.is_empty() {
            log_builder.filter(None, log_level);
        } else {
            for log_group in log_groups {
                log_builder.filter(Some(log_group), log_level);
            }
        }
        log_builder.init();
    }

    log::info!("snt version: {}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = call_subcommand(&matches).await {
        eprintln!("{e}");
        std::process::exit(1);
    }

    Ok(())
}

async fn call_subcommand(matches: &clap::ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((CommandEncode::CMD, matches)) => {
            CommandEncode::handle(matches).await
        }
        Some((CommandDecode::CMD, matches)) => {
            CommandDecode::handle(matches).await
        }
        Some((CommandCheck::CMD, matches)) => {
            CommandCheck::handle(matches).await
        }
        Some((CommandShow::CMD, matches)) => CommandShow::handle(matches).await,
        Some((CommandCreate::CMD, matches)) => {
            CommandCreate::handle(matches).await
        }
        Some((CommandLoad::CMD, matches)) => CommandLoad::handle(matches).await,
        Some((CommandSaveNetworkWide::CMD, matches)) => {
            CommandSaveNetworkWide::handle(matches).await
        }
        Some((CommandSaveHosts::CMD, matches)) => {
            CommandSaveHosts::handle(matches).await
        }
        _ => Err(CliError::from("Unknown command")),
    }
}
