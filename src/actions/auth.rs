use crate::context::ExecutionContext;
use crate::error::CliError;
use clap::ArgMatches;

/// Prints the token of the session, generating one if needed.
pub async fn login(matches: &ArgMatches) -> Result<(), CliError> {
    let context = ExecutionContext::from_args(matches).await?;
    println!("{}", context.client().token());
    Ok(())
}
