//! Station command definitions.

use crate::actions::stations;
use crate::commands::params::{
    filter_parameter, id_parameter, COMMAND_GET, COMMAND_LIST, COMMAND_STATION, PARAMETER_FILTER,
};
use crate::error::CliError;
use clap::{ArgMatches, Command};

pub fn station_command() -> Command {
    Command::new(COMMAND_STATION)
        .about("Agency stations")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get the first station matching a filter")
                .arg(id_parameter(
                    PARAMETER_FILTER,
                    "Filter expression, e.g. 'stationNumber eq 2'",
                )),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List stations")
                .visible_alias("ls")
                .arg(filter_parameter()),
        )
}

pub async fn execute_station_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, sub_matches)) => stations::get_station(sub_matches).await,
        Some((COMMAND_LIST, sub_matches)) => stations::list_stations(sub_matches).await,
        _ => Err(CliError::UnsupportedSubcommand(
            crate::commands::subcommand_name(matches),
        )),
    }
}
