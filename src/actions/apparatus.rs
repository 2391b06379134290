use crate::actions::utils::required_string;
use crate::commands::params::{PARAMETER_FILTER, PARAMETER_ID};
use crate::context::ExecutionContext;
use crate::error::CliError;
use clap::ArgMatches;

pub async fn get_apparatus(matches: &ArgMatches) -> Result<(), CliError> {
    let id = required_string(matches, PARAMETER_ID)?;
    let context = ExecutionContext::from_args(matches).await?;

    match context.client().get_apparatus(id).await?.apparatus {
        Some(apparatus) => context.print(std::slice::from_ref(&apparatus)),
        None => Err(CliError::NotFound(format!("Apparatus '{}'", id))),
    }
}

pub async fn list_apparatuses(matches: &ArgMatches) -> Result<(), CliError> {
    let context = ExecutionContext::from_args(matches).await?;
    let options = context.list_options(matches.get_one::<String>(PARAMETER_FILTER));
    let response = context.client().get_apparatuses(&options).await?;
    context.print(&response.apparatuses)
}
