//! Apparatus command definitions.

use crate::actions::apparatus;
use crate::commands::params::{
    filter_parameter, id_parameter, COMMAND_APPARATUS, COMMAND_GET, COMMAND_LIST, PARAMETER_ID,
};
use crate::error::CliError;
use clap::{ArgMatches, Command};

pub fn apparatus_command() -> Command {
    Command::new(COMMAND_APPARATUS)
        .about("Department apparatus (vehicles)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get an apparatus")
                .arg(id_parameter(PARAMETER_ID, "Department apparatus ID")),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List apparatus")
                .visible_alias("ls")
                .arg(filter_parameter()),
        )
}

pub async fn execute_apparatus_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, sub_matches)) => apparatus::get_apparatus(sub_matches).await,
        Some((COMMAND_LIST, sub_matches)) => apparatus::list_apparatuses(sub_matches).await,
        _ => Err(CliError::UnsupportedSubcommand(
            crate::commands::subcommand_name(matches),
        )),
    }
}
