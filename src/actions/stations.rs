use crate::actions::utils::required_string;
use crate::commands::params::PARAMETER_FILTER;
use crate::context::ExecutionContext;
use crate::er_api::Options;
use crate::error::CliError;
use clap::ArgMatches;

/// Prints the first station matching the filter, or a notice when none does.
pub async fn get_station(matches: &ArgMatches) -> Result<(), CliError> {
    let filter = required_string(matches, PARAMETER_FILTER)?;
    let context = ExecutionContext::from_args(matches).await?;

    let mut options = Options::new();
    options.insert("filter".to_string(), filter.to_string());
    let response = context.client().get_stations(&options).await?;

    match response.stations.first() {
        Some(station) => context.print(std::slice::from_ref(station)),
        None => {
            println!("Station not found.");
            Ok(())
        }
    }
}

pub async fn list_stations(matches: &ArgMatches) -> Result<(), CliError> {
    let context = ExecutionContext::from_args(matches).await?;
    let options = context.list_options(matches.get_one::<String>(PARAMETER_FILTER));
    let response = context.client().get_stations(&options).await?;
    context.print(&response.stations)
}
