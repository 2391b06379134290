//! Configuration command definitions.

use crate::actions::config;
use crate::commands::params::{
    output_file_parameter, COMMAND_CONFIG, COMMAND_EXPORT, COMMAND_PATH, COMMAND_SHOW,
};
use crate::error::CliError;
use clap::{ArgMatches, Command};

/// Create the config command with all its subcommands.
pub fn config_command() -> Command {
    Command::new(COMMAND_CONFIG)
        .about("Configuration management")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(COMMAND_PATH).about("Show the configuration file path"))
        .subcommand(Command::new(COMMAND_SHOW).about("Show the configuration, secrets masked"))
        .subcommand(
            Command::new(COMMAND_EXPORT)
                .about("Export the configuration to a file, secrets masked")
                .arg(output_file_parameter()),
        )
}

pub async fn execute_config_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_PATH, sub_matches)) => config::print_path(sub_matches),
        Some((COMMAND_SHOW, sub_matches)) => config::show(sub_matches),
        Some((COMMAND_EXPORT, sub_matches)) => config::export(sub_matches),
        _ => Err(CliError::UnsupportedSubcommand(
            crate::commands::subcommand_name(matches),
        )),
    }
}
