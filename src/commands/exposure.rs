//! Exposure command definitions.
//!
//! `exposure` lists exposures across incidents; the `exposure-*` groups reach the records
//! hanging off a single exposure.

use crate::actions::exposures;
use crate::commands::params::{
    filter_parameter, id_parameter, json_parameter, COMMAND_CREATE, COMMAND_EXPOSURE,
    COMMAND_EXPOSURE_APPARATUS, COMMAND_EXPOSURE_FIRE, COMMAND_EXPOSURE_LOCATION,
    COMMAND_EXPOSURE_MEMBER, COMMAND_EXPOSURE_NARRATIVE, COMMAND_EXPOSURE_USER_ROLE, COMMAND_GET,
    COMMAND_LIST, COMMAND_PUT, PARAMETER_EXPOSURE_ID, PARAMETER_EXPOSURE_USER_ID,
};
use crate::error::CliError;
use clap::{ArgMatches, Command};

fn exposure_id() -> clap::Arg {
    id_parameter(PARAMETER_EXPOSURE_ID, "Exposure ID")
}

pub fn exposure_command() -> Command {
    Command::new(COMMAND_EXPOSURE)
        .about("Exposures across all incidents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List exposures")
                .visible_alias("ls")
                .arg(filter_parameter()),
        )
}

pub fn exposure_location_command() -> Command {
    Command::new(COMMAND_EXPOSURE_LOCATION)
        .about("Location of an exposure")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get the location of an exposure")
                .arg(exposure_id()),
        )
        .subcommand(
            Command::new(COMMAND_PUT)
                .about("Replace the location of an exposure")
                .long_about(
                    "Replace the location of an exposure.\n\n\
                     When the JSON document has no rowVersion, the current one is fetched first.",
                )
                .arg(exposure_id())
                .arg(json_parameter("Location JSON")),
        )
}

pub fn exposure_fire_command() -> Command {
    Command::new(COMMAND_EXPOSURE_FIRE)
        .about("Fire details of an exposure")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get the fire details of an exposure")
                .arg(exposure_id()),
        )
}

pub fn exposure_apparatus_command() -> Command {
    Command::new(COMMAND_EXPOSURE_APPARATUS)
        .about("Apparatus that responded to an exposure")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the apparatus of an exposure")
                .visible_alias("ls")
                .arg(exposure_id()),
        )
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Add an apparatus to an exposure, by agency apparatus ID")
                .arg(exposure_id())
                .arg(json_parameter("Exposure apparatus JSON")),
        )
}

pub fn exposure_narrative_command() -> Command {
    Command::new(COMMAND_EXPOSURE_NARRATIVE)
        .about("Narratives of an exposure")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the narratives of an exposure")
                .visible_alias("ls")
                .arg(exposure_id()),
        )
}

pub fn exposure_member_command() -> Command {
    Command::new(COMMAND_EXPOSURE_MEMBER)
        .about("Crew members of an exposure")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the crew members of an exposure")
                .visible_alias("ls")
                .arg(exposure_id())
                .arg(filter_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get a crew member of an exposure")
                .arg(exposure_id())
                .arg(id_parameter(PARAMETER_EXPOSURE_USER_ID, "Exposure user ID")),
        )
}

pub fn exposure_user_role_command() -> Command {
    Command::new(COMMAND_EXPOSURE_USER_ROLE)
        .about("Roles of an exposure crew member")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the roles of a crew member")
                .visible_alias("ls")
                .arg(id_parameter(PARAMETER_EXPOSURE_USER_ID, "Exposure user ID"))
                .arg(filter_parameter()),
        )
}

fn unsupported(matches: &ArgMatches) -> CliError {
    CliError::UnsupportedSubcommand(crate::commands::subcommand_name(matches))
}

pub async fn execute_exposure_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => exposures::list_exposures(sub_matches).await,
        _ => Err(unsupported(matches)),
    }
}

pub async fn execute_exposure_location_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, sub_matches)) => exposures::get_exposure_location(sub_matches).await,
        Some((COMMAND_PUT, sub_matches)) => exposures::put_exposure_location(sub_matches).await,
        _ => Err(unsupported(matches)),
    }
}

pub async fn execute_exposure_fire_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_GET, sub_matches)) => exposures::get_exposure_fire(sub_matches).await,
        _ => Err(unsupported(matches)),
    }
}

pub async fn execute_exposure_apparatus_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            exposures::list_exposure_apparatuses(sub_matches).await
        }
        Some((COMMAND_CREATE, sub_matches)) => {
            exposures::create_exposure_apparatus(sub_matches).await
        }
        _ => Err(unsupported(matches)),
    }
}

pub async fn execute_exposure_narrative_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            exposures::list_exposure_narratives(sub_matches).await
        }
        _ => Err(unsupported(matches)),
    }
}

pub async fn execute_exposure_member_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => exposures::list_exposure_members(sub_matches).await,
        Some((COMMAND_GET, sub_matches)) => exposures::get_exposure_member(sub_matches).await,
        _ => Err(unsupported(matches)),
    }
}

pub async fn execute_exposure_user_role_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LIST, sub_matches)) => {
            exposures::list_exposure_member_roles(sub_matches).await
        }
        _ => Err(unsupported(matches)),
    }
}
