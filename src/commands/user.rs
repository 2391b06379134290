//! User command definitions and argument parsing.

use crate::actions::users;
use crate::commands::params::{
    filter_parameter, id_parameter, COMMAND_GET, COMMAND_ID, COMMAND_LIST, COMMAND_ME,
    COMMAND_PATCH, COMMAND_USER, COMMAND_USER_CONTACT_INFO, PARAMETER_OPERATION, PARAMETER_PATH,
    PARAMETER_USER_ID, PARAMETER_VALUE,
};
use crate::error::CliError;
use clap::{ArgMatches, Command};

/// Define the user command and its subcommands
pub fn user_command() -> Command {
    Command::new(COMMAND_USER)
        .about("Agency users")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a user")
                .arg(id_parameter(PARAMETER_USER_ID, "User ID")),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List users")
                .visible_alias("ls")
                .arg(filter_parameter()),
        )
        .subcommand(Command::new(COMMAND_ME).about("Get the logged in user"))
        .subcommand(
            Command::new(COMMAND_PATCH)
                .about("Patch one field of a user")
                .long_about(
                    "Patch one field of a user.\n\n\
                     Example: ercli user patch 42 replace /primaryEmail pat@example.com",
                )
                .arg(id_parameter(PARAMETER_USER_ID, "User ID"))
                .arg(id_parameter(PARAMETER_OPERATION, "Patch operation, e.g. replace"))
                .arg(id_parameter(PARAMETER_PATH, "Field path, e.g. /primaryEmail"))
                .arg(id_parameter(PARAMETER_VALUE, "New value")),
        )
}

pub fn user_contact_info_command() -> Command {
    Command::new(COMMAND_USER_CONTACT_INFO)
        .about("Contact information of users")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_ID)
                .about("Get the contact information of a user")
                .arg(id_parameter(PARAMETER_USER_ID, "User ID")),
        )
}

/// Execute user-related subcommands based on the provided arguments
pub async fn execute_user_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, sub_matches)) => users::get_user(sub_matches).await,
        Some((COMMAND_LIST, sub_matches)) => users::list_users(sub_matches).await,
        Some((COMMAND_ME, sub_matches)) => users::get_current_user(sub_matches).await,
        Some((COMMAND_PATCH, sub_matches)) => users::patch_user(sub_matches).await,
        _ => Err(CliError::UnsupportedSubcommand(
            crate::commands::subcommand_name(matches),
        )),
    }
}

pub async fn execute_user_contact_info_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_ID, sub_matches)) => users::get_user_contact_info(sub_matches).await,
        _ => Err(CliError::UnsupportedSubcommand(
            crate::commands::subcommand_name(matches),
        )),
    }
}
