//! Incident actions.

use crate::actions::utils::{json_argument, required_string};
use crate::commands::params::{PARAMETER_DEEP, PARAMETER_FILTER, PARAMETER_ID, PARAMETER_IDS, PARAMETER_JSON};
use crate::context::ExecutionContext;
use crate::error::CliError;
use crate::model::Incident;
use clap::ArgMatches;
use tracing::info;

pub async fn create_incident(matches: &ArgMatches) -> Result<(), CliError> {
    let incident: Incident = json_argument(matches, PARAMETER_JSON)?;
    let context = ExecutionContext::from_args(matches).await?;
    let response = context.client().post_incident(&incident).await?;
    context.print_json(&response)
}

/// Deletes the incidents in order, stopping at the first failure.
pub async fn delete_incidents(matches: &ArgMatches) -> Result<(), CliError> {
    let ids: Vec<&String> = matches
        .get_many::<String>(PARAMETER_IDS)
        .into_iter()
        .flatten()
        .collect();
    if ids.is_empty() {
        return Err(CliError::MissingRequiredArgument(PARAMETER_IDS.to_string()));
    }

    let context = ExecutionContext::from_args(matches).await?;
    for id in ids {
        context.client().delete_incident(id).await?;
        info!("Deleted incident {}", id);
    }
    Ok(())
}

pub async fn get_incident(matches: &ArgMatches) -> Result<(), CliError> {
    let id = required_string(matches, PARAMETER_ID)?;
    let context = ExecutionContext::from_args(matches).await?;

    if matches.get_flag(PARAMETER_DEEP) {
        let details = context.client().get_incident_details(id).await?;
        return context.print_json(&details);
    }

    match context.client().get_incident(id).await?.incident {
        Some(incident) => context.print(std::slice::from_ref(&incident)),
        None => Err(CliError::NotFound(format!("Incident '{}'", id))),
    }
}

pub async fn list_incidents(matches: &ArgMatches) -> Result<(), CliError> {
    let context = ExecutionContext::from_args(matches).await?;
    let options = context.list_options(matches.get_one::<String>(PARAMETER_FILTER));
    let response = context.client().get_incidents(&options).await?;
    context.print(&response.incidents)
}
