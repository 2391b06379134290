use clap::ArgMatches;
use ercli::commands::{
    apparatus, config, exposure, incident, raw, station, subcommand_name, user, COMMAND_APPARATUS,
    COMMAND_CONFIG, COMMAND_EXPOSURE, COMMAND_EXPOSURE_APPARATUS, COMMAND_EXPOSURE_FIRE,
    COMMAND_EXPOSURE_LOCATION, COMMAND_EXPOSURE_MEMBER, COMMAND_EXPOSURE_NARRATIVE,
    COMMAND_EXPOSURE_USER_ROLE, COMMAND_INCIDENT, COMMAND_INCIDENT_EXPOSURE, COMMAND_LOGIN,
    COMMAND_RAW, COMMAND_STATION, COMMAND_USER, COMMAND_USER_CONTACT_INFO,
};
use ercli::error::CliError;

/// Routes the parsed command line to its command group.
pub async fn execute_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((COMMAND_LOGIN, sub_matches)) => ercli::actions::auth::login(sub_matches).await,
        Some((COMMAND_RAW, sub_matches)) => raw::execute_raw_command(sub_matches).await,
        Some((COMMAND_APPARATUS, sub_matches)) => {
            apparatus::execute_apparatus_command(sub_matches).await
        }
        Some((COMMAND_EXPOSURE, sub_matches)) => {
            exposure::execute_exposure_command(sub_matches).await
        }
        Some((COMMAND_INCIDENT, sub_matches)) => {
            incident::execute_incident_command(sub_matches).await
        }
        Some((COMMAND_INCIDENT_EXPOSURE, sub_matches)) => {
            incident::execute_incident_exposure_command(sub_matches).await
        }
        Some((COMMAND_EXPOSURE_LOCATION, sub_matches)) => {
            exposure::execute_exposure_location_command(sub_matches).await
        }
        Some((COMMAND_EXPOSURE_FIRE, sub_matches)) => {
            exposure::execute_exposure_fire_command(sub_matches).await
        }
        Some((COMMAND_EXPOSURE_APPARATUS, sub_matches)) => {
            exposure::execute_exposure_apparatus_command(sub_matches).await
        }
        Some((COMMAND_EXPOSURE_NARRATIVE, sub_matches)) => {
            exposure::execute_exposure_narrative_command(sub_matches).await
        }
        Some((COMMAND_EXPOSURE_MEMBER, sub_matches)) => {
            exposure::execute_exposure_member_command(sub_matches).await
        }
        Some((COMMAND_EXPOSURE_USER_ROLE, sub_matches)) => {
            exposure::execute_exposure_user_role_command(sub_matches).await
        }
        Some((COMMAND_STATION, sub_matches)) => station::execute_station_command(sub_matches).await,
        Some((COMMAND_USER, sub_matches)) => user::execute_user_command(sub_matches).await,
        Some((COMMAND_USER_CONTACT_INFO, sub_matches)) => {
            user::execute_user_contact_info_command(sub_matches).await
        }
        Some((COMMAND_CONFIG, sub_matches)) => config::execute_config_command(sub_matches).await,
        _ => Err(CliError::UnsupportedSubcommand(subcommand_name(matches))),
    }
}
