//! Incident and incident exposure command definitions.

use crate::actions::{exposures, incidents};
use crate::commands::params::{
    filter_parameter, id_parameter, json_parameter, COMMAND_CREATE, COMMAND_DELETE, COMMAND_GET,
    COMMAND_INCIDENT, COMMAND_INCIDENT_EXPOSURE, COMMAND_LIST, COMMAND_PATCH, PARAMETER_DEEP,
    PARAMETER_EXPOSURE_ID, PARAMETER_ID, PARAMETER_IDS, PARAMETER_INCIDENT_ID,
};
use crate::error::CliError;
use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn incident_command() -> Command {
    Command::new(COMMAND_INCIDENT)
        .about("Incidents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create an incident from a JSON document")
                .arg(json_parameter("Incident JSON, e.g. '{\"stationID\":\"7\",...}'")),
        )
        .subcommand(
            Command::new(COMMAND_DELETE).about("Delete incidents").arg(
                Arg::new(PARAMETER_IDS)
                    .num_args(1..)
                    .required(true)
                    .help("Incident IDs"),
            ),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get an incident")
                .arg(id_parameter(PARAMETER_ID, "Incident ID"))
                .arg(
                    Arg::new(PARAMETER_DEEP)
                        .long(PARAMETER_DEEP)
                        .action(ArgAction::SetTrue)
                        .help("Also fetch the exposures with their locations and apparatuses"),
                ),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List incidents")
                .visible_alias("ls")
                .arg(filter_parameter()),
        )
}

pub fn incident_exposure_command() -> Command {
    Command::new(COMMAND_INCIDENT_EXPOSURE)
        .about("Exposures of an incident")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new(COMMAND_CREATE)
                .about("Create an exposure from a JSON document")
                .arg(id_parameter(PARAMETER_INCIDENT_ID, "Incident ID"))
                .arg(json_parameter("Exposure JSON")),
        )
        .subcommand(
            Command::new(COMMAND_DELETE)
                .about("Delete an exposure")
                .arg(id_parameter(PARAMETER_INCIDENT_ID, "Incident ID"))
                .arg(id_parameter(PARAMETER_EXPOSURE_ID, "Exposure ID")),
        )
        .subcommand(
            Command::new(COMMAND_GET)
                .about("Get an exposure")
                .arg(id_parameter(PARAMETER_INCIDENT_ID, "Incident ID"))
                .arg(id_parameter(PARAMETER_EXPOSURE_ID, "Exposure ID")),
        )
        .subcommand(
            Command::new(COMMAND_LIST)
                .about("List the exposures of an incident")
                .visible_alias("ls")
                .arg(id_parameter(PARAMETER_INCIDENT_ID, "Incident ID"))
                .arg(filter_parameter()),
        )
        .subcommand(
            Command::new(COMMAND_PATCH)
                .about("Patch an exposure with a JSON document of the fields to change")
                .arg(id_parameter(PARAMETER_INCIDENT_ID, "Incident ID"))
                .arg(id_parameter(PARAMETER_EXPOSURE_ID, "Exposure ID"))
                .arg(json_parameter("Fields to change, e.g. '{\"incidentType\":\"111\"}'")),
        )
}

pub async fn execute_incident_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_CREATE, sub_matches)) => incidents::create_incident(sub_matches).await,
        Some((COMMAND_DELETE, sub_matches)) => incidents::delete_incidents(sub_matches).await,
        Some((COMMAND_GET, sub_matches)) => incidents::get_incident(sub_matches).await,
        Some((COMMAND_LIST, sub_matches)) => incidents::list_incidents(sub_matches).await,
        _ => Err(CliError::UnsupportedSubcommand(
            crate::commands::subcommand_name(matches),
        )),
    }
}

pub async fn execute_incident_exposure_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_CREATE, sub_matches)) => {
            exposures::create_incident_exposure(sub_matches).await
        }
        Some((COMMAND_DELETE, sub_matches)) => {
            exposures::delete_incident_exposure(sub_matches).await
        }
        Some((COMMAND_GET, sub_matches)) => exposures::get_incident_exposure(sub_matches).await,
        Some((COMMAND_LIST, sub_matches)) => {
            exposures::list_incident_exposures(sub_matches).await
        }
        Some((COMMAND_PATCH, sub_matches)) => {
            exposures::patch_incident_exposure(sub_matches).await
        }
        _ => Err(CliError::UnsupportedSubcommand(
            crate::commands::subcommand_name(matches),
        )),
    }
}
