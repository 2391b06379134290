//! User action implementations.

use crate::actions::utils::required_string;
use crate::commands::params::{
    PARAMETER_FILTER, PARAMETER_OPERATION, PARAMETER_PATH, PARAMETER_USER_ID, PARAMETER_VALUE,
};
use crate::context::ExecutionContext;
use crate::error::CliError;
use crate::model::PatchOperation;
use clap::ArgMatches;
use tracing::debug;

pub async fn get_user(matches: &ArgMatches) -> Result<(), CliError> {
    let user_id = required_string(matches, PARAMETER_USER_ID)?;
    let context = ExecutionContext::from_args(matches).await?;

    match context.client().get_user(user_id).await?.user {
        Some(user) => context.print(std::slice::from_ref(&user)),
        None => Err(CliError::NotFound(format!("User '{}'", user_id))),
    }
}

pub async fn list_users(matches: &ArgMatches) -> Result<(), CliError> {
    let context = ExecutionContext::from_args(matches).await?;
    let options = context.list_options(matches.get_one::<String>(PARAMETER_FILTER));
    let response = context.client().get_users(&options).await?;
    context.print(&response.users)
}

pub async fn get_current_user(matches: &ArgMatches) -> Result<(), CliError> {
    let context = ExecutionContext::from_args(matches).await?;

    match context.client().get_current_user().await?.user {
        Some(user) => context.print_json(&user),
        None => Err(CliError::NotFound("Current user".to_string())),
    }
}

/// Applies one patch operation against the user's current row version.
pub async fn patch_user(matches: &ArgMatches) -> Result<(), CliError> {
    let user_id = required_string(matches, PARAMETER_USER_ID)?;
    let operation = PatchOperation::new(
        required_string(matches, PARAMETER_OPERATION)?,
        required_string(matches, PARAMETER_PATH)?,
        required_string(matches, PARAMETER_VALUE)?,
    );
    let context = ExecutionContext::from_args(matches).await?;

    let current = match context.client().get_user(user_id).await?.user {
        Some(user) => user,
        None => {
            println!("User not found.");
            return Ok(());
        }
    };
    debug!("Patching user {} at row version {}", user_id, current.row_version);

    let response = context
        .client()
        .patch_user(user_id, &current.row_version, &[operation])
        .await?;
    context.print_json(&response)
}

pub async fn get_user_contact_info(matches: &ArgMatches) -> Result<(), CliError> {
    let user_id = required_string(matches, PARAMETER_USER_ID)?;
    let context = ExecutionContext::from_args(matches).await?;
    let response = context.client().get_user_contact_info(user_id).await?;
    context.print_json(&response.contact_info)
}
