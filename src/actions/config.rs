use crate::commands::params::PARAMETER_OUTPUT;
use crate::configuration::Configuration;
use crate::context::{configuration_path, output_format};
use crate::error::CliError;
use crate::format::Formattable;
use clap::ArgMatches;
use std::path::PathBuf;

pub fn print_path(matches: &ArgMatches) -> Result<(), CliError> {
    println!("{}", configuration_path(matches)?.display());
    Ok(())
}

/// Prints the configuration with secrets masked. Does not require a valid configuration.
pub fn show(matches: &ArgMatches) -> Result<(), CliError> {
    let configuration = Configuration::load_from_file(&configuration_path(matches)?)?;
    println!("{}", configuration.redacted().format(&output_format(matches)?)?);
    Ok(())
}

pub fn export(matches: &ArgMatches) -> Result<(), CliError> {
    let output = matches
        .get_one::<PathBuf>(PARAMETER_OUTPUT)
        .ok_or_else(|| CliError::MissingRequiredArgument(PARAMETER_OUTPUT.to_string()))?;
    let configuration = Configuration::load_from_file(&configuration_path(matches)?)?;
    configuration.redacted().save(output)?;
    Ok(())
}
