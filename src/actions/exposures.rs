//! Exposure actions, including the records that hang off an exposure.

use crate::actions::utils::{json_argument, required_string};
use crate::commands::params::{
    PARAMETER_EXPOSURE_ID, PARAMETER_EXPOSURE_USER_ID, PARAMETER_FILTER, PARAMETER_INCIDENT_ID,
    PARAMETER_JSON,
};
use crate::context::ExecutionContext;
use crate::error::CliError;
use crate::model::{Exposure, ExposureApparatus, ExposureLocation, PatchExposureRequest};
use clap::ArgMatches;
use tracing::{debug, info};

pub async fn list_exposures(matches: &ArgMatches) -> Result<(), CliError> {
    let context = ExecutionContext::from_args(matches).await?;
    let options = context.list_options(matches.get_one::<String>(PARAMETER_FILTER));
    let response = context.client().get_exposures(&options).await?;
    context.print(&response.exposures)
}

// Incident exposures

pub async fn create_incident_exposure(matches: &ArgMatches) -> Result<(), CliError> {
    let incident_id = required_string(matches, PARAMETER_INCIDENT_ID)?;
    let exposure: Exposure = json_argument(matches, PARAMETER_JSON)?;
    let context = ExecutionContext::from_args(matches).await?;
    let response = context
        .client()
        .post_incident_exposure(incident_id, &exposure)
        .await?;
    context.print_json(&response)
}

pub async fn delete_incident_exposure(matches: &ArgMatches) -> Result<(), CliError> {
    let incident_id = required_string(matches, PARAMETER_INCIDENT_ID)?;
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let context = ExecutionContext::from_args(matches).await?;
    context
        .client()
        .delete_incident_exposure(incident_id, exposure_id)
        .await?;
    info!("Deleted exposure {} of incident {}", exposure_id, incident_id);
    Ok(())
}

pub async fn get_incident_exposure(matches: &ArgMatches) -> Result<(), CliError> {
    let incident_id = required_string(matches, PARAMETER_INCIDENT_ID)?;
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let context = ExecutionContext::from_args(matches).await?;

    match context
        .client()
        .get_incident_exposure(incident_id, exposure_id)
        .await?
        .exposure
    {
        Some(exposure) => context.print(std::slice::from_ref(&exposure)),
        None => Err(CliError::NotFound(format!("Exposure '{}'", exposure_id))),
    }
}

pub async fn list_incident_exposures(matches: &ArgMatches) -> Result<(), CliError> {
    let incident_id = required_string(matches, PARAMETER_INCIDENT_ID)?;
    let context = ExecutionContext::from_args(matches).await?;
    let options = context.list_options(matches.get_one::<String>(PARAMETER_FILTER));
    let response = context
        .client()
        .get_incident_exposures(incident_id, &options)
        .await?;
    context.print(&response.exposures)
}

/// Patches an exposure against its current row version.
pub async fn patch_incident_exposure(matches: &ArgMatches) -> Result<(), CliError> {
    let incident_id = required_string(matches, PARAMETER_INCIDENT_ID)?;
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let patch: PatchExposureRequest = json_argument(matches, PARAMETER_JSON)?;
    let context = ExecutionContext::from_args(matches).await?;

    let current = context
        .client()
        .get_incident_exposure(incident_id, exposure_id)
        .await?
        .exposure
        .ok_or_else(|| CliError::NotFound(format!("Exposure '{}'", exposure_id)))?;
    debug!("Patching exposure {} at row version {}", exposure_id, current.row_version);

    let response = context
        .client()
        .patch_incident_exposure(incident_id, exposure_id, &current.row_version, &patch)
        .await?;
    context.print_json(&response)
}

// Exposure location and fire

pub async fn get_exposure_location(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let context = ExecutionContext::from_args(matches).await?;

    match context
        .client()
        .get_exposure_location(exposure_id)
        .await?
        .location
    {
        Some(location) => context.print_json(&location),
        None => Err(CliError::NotFound(format!(
            "Location of exposure '{}'",
            exposure_id
        ))),
    }
}

/// Replaces the location; without a row version in the input the current one is used.
pub async fn put_exposure_location(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let mut location: ExposureLocation = json_argument(matches, PARAMETER_JSON)?;
    let context = ExecutionContext::from_args(matches).await?;

    if location.row_version.is_empty() {
        let current = context.client().get_exposure_location(exposure_id).await?;
        if let Some(current) = current.location {
            location.row_version = current.row_version;
        }
    }

    let response = context
        .client()
        .put_exposure_location(exposure_id, &location)
        .await?;
    context.print_json(&response)
}

pub async fn get_exposure_fire(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let context = ExecutionContext::from_args(matches).await?;
    let response = context.client().get_exposure_fire(exposure_id).await?;
    context.print_json(&response.exposure_fire)
}

// Exposure apparatus and narratives

pub async fn list_exposure_apparatuses(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let context = ExecutionContext::from_args(matches).await?;
    let response = context.client().get_exposure_apparatuses(exposure_id).await?;
    context.print_json(&response.apparatuses)
}

pub async fn create_exposure_apparatus(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let apparatus: ExposureApparatus = json_argument(matches, PARAMETER_JSON)?;
    let context = ExecutionContext::from_args(matches).await?;
    let response = context
        .client()
        .post_exposure_apparatus(exposure_id, &apparatus)
        .await?;
    context.print_json(&response)
}

pub async fn list_exposure_narratives(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let context = ExecutionContext::from_args(matches).await?;
    let response = context.client().get_exposure_narratives(exposure_id).await?;
    context.print_json(&response.narratives)
}

// Crew members

pub async fn list_exposure_members(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let context = ExecutionContext::from_args(matches).await?;
    let options = context.limit_options(matches.get_one::<String>(PARAMETER_FILTER));
    let response = context
        .client()
        .get_exposure_members(exposure_id, &options)
        .await?;
    context.print(&response.crew_members)
}

pub async fn get_exposure_member(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_id = required_string(matches, PARAMETER_EXPOSURE_ID)?;
    let exposure_user_id = required_string(matches, PARAMETER_EXPOSURE_USER_ID)?;
    let context = ExecutionContext::from_args(matches).await?;

    match context
        .client()
        .get_exposure_member(exposure_id, exposure_user_id)
        .await?
        .crew_member
    {
        Some(member) => context.print(std::slice::from_ref(&member)),
        None => Err(CliError::NotFound(format!(
            "Crew member '{}'",
            exposure_user_id
        ))),
    }
}

pub async fn list_exposure_member_roles(matches: &ArgMatches) -> Result<(), CliError> {
    let exposure_user_id = required_string(matches, PARAMETER_EXPOSURE_USER_ID)?;
    let context = ExecutionContext::from_args(matches).await?;
    let options = context.limit_options(matches.get_one::<String>(PARAMETER_FILTER));
    let response = context
        .client()
        .get_exposure_member_roles(exposure_user_id, &options)
        .await?;
    context.print(&response.roles)
}
