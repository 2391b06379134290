//! Execution context for the `ercli` commands.
//!
//! Most commands need the same things: the configuration with command line overrides
//! applied, an authenticated client, and the output format. [`ExecutionContext`] bundles
//! them.

use crate::{
    auth,
    commands::params::{
        PARAMETER_CONFIG, PARAMETER_FORMAT, PARAMETER_HEADERS, PARAMETER_LIMIT, PARAMETER_PRETTY,
        PARAMETER_TENANT_FLOW, PARAMETER_TOKEN,
    },
    configuration::Configuration,
    er_api::{ErApiClient, Options},
    error::CliError,
    format::{format_json_only, Formattable, OutputFormat, OutputFormatOptions},
};
use chrono::Utc;
use clap::ArgMatches;
use serde::Serialize;
use std::path::PathBuf;

/// Execution context containing common resources needed by CLI commands.
pub struct ExecutionContext {
    pub configuration: Configuration,
    pub client: ErApiClient,
    pub format: OutputFormat,
    pub limit: u32,
}

impl ExecutionContext {
    /// Loads the configuration and logs in.
    pub async fn from_args(matches: &ArgMatches) -> Result<Self, CliError> {
        let configuration = load_configuration(matches)?;
        let client = auth::login(&configuration, Utc::now()).await?;

        Ok(ExecutionContext {
            configuration,
            client,
            format: output_format(matches)?,
            limit: matches.get_one::<u32>(PARAMETER_LIMIT).copied().unwrap_or(100),
        })
    }

    pub fn client(&self) -> &ErApiClient {
        &self.client
    }

    /// `filter` and `limit` options of the list commands.
    pub fn list_options(&self, filter: Option<&String>) -> Options {
        list_options(filter, self.limit)
    }

    /// `limit`, plus `filter` only when one was given.
    pub fn limit_options(&self, filter: Option<&String>) -> Options {
        limit_options(filter, self.limit)
    }

    pub fn print<T: Formattable + ?Sized>(&self, value: &T) -> Result<(), CliError> {
        println!("{}", value.format(&self.format)?);
        Ok(())
    }

    /// Prints a value that has no CSV rendering.
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), CliError> {
        println!("{}", format_json_only(value, &self.format)?);
        Ok(())
    }
}

pub fn list_options(filter: Option<&String>, limit: u32) -> Options {
    let mut options = Options::new();
    options.insert(
        "filter".to_string(),
        filter.cloned().unwrap_or_default(),
    );
    options.insert("limit".to_string(), limit.to_string());
    options
}

pub fn limit_options(filter: Option<&String>, limit: u32) -> Options {
    let mut options = Options::new();
    if let Some(filter) = filter {
        options.insert("filter".to_string(), filter.clone());
    }
    options.insert("limit".to_string(), limit.to_string());
    options
}

pub fn configuration_path(matches: &ArgMatches) -> Result<PathBuf, CliError> {
    match matches.get_one::<PathBuf>(PARAMETER_CONFIG) {
        Some(path) => Ok(path.clone()),
        None => Ok(Configuration::get_default_configuration_file_path()?),
    }
}

/// Loads and validates the configuration, then applies `--token` and `--tenant-flow`.
pub fn load_configuration(matches: &ArgMatches) -> Result<Configuration, CliError> {
    let path = configuration_path(matches)?;
    let mut configuration = Configuration::load(Some(&path))?;

    if let Some(token) = matches.get_one::<String>(PARAMETER_TOKEN) {
        configuration.token = token.clone();
    }
    if matches.get_flag(PARAMETER_TENANT_FLOW) {
        configuration.force_tenant_flow = true;
    }
    Ok(configuration)
}

pub fn output_format(matches: &ArgMatches) -> Result<OutputFormat, CliError> {
    let format = matches
        .get_one::<String>(PARAMETER_FORMAT)
        .map(String::as_str)
        .unwrap_or(crate::format::JSON);
    let options = OutputFormatOptions {
        with_headers: matches.get_flag(PARAMETER_HEADERS),
        pretty: matches.get_flag(PARAMETER_PRETTY),
    };
    Ok(OutputFormat::from_string_with_options(format, options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli;

    fn leaf_matches(args: &[&str]) -> ArgMatches {
        let mut matches = build_cli().try_get_matches_from(args).unwrap();
        while let Some((_, sub)) = matches.subcommand() {
            matches = sub.clone();
        }
        matches
    }

    #[test]
    fn test_list_options_always_carry_filter_and_limit() {
        let options = list_options(None, 100);
        assert_eq!(options.get("filter").map(String::as_str), Some(""));
        assert_eq!(options.get("limit").map(String::as_str), Some("100"));

        let filter = "stationNumber eq 2".to_string();
        let options = list_options(Some(&filter), 5);
        assert_eq!(options.get("filter"), Some(&filter));
        assert_eq!(options.get("limit").map(String::as_str), Some("5"));
    }

    #[test]
    fn test_limit_options_skip_absent_filter() {
        let options = limit_options(None, 100);
        assert!(!options.contains_key("filter"));
        assert_eq!(options.get("limit").map(String::as_str), Some("100"));

        let filter = "nfirsCode eq 1".to_string();
        let options = limit_options(Some(&filter), 5);
        assert_eq!(options.get("filter"), Some(&filter));
    }

    #[test]
    fn test_output_format_from_arguments() {
        let matches = leaf_matches(&["ercli", "-f", "csv", "--headers", "station", "list"]);
        assert_eq!(
            output_format(&matches).unwrap(),
            OutputFormat::Csv(OutputFormatOptions {
                with_headers: true,
                pretty: false,
            })
        );
    }

    #[test]
    fn test_overrides_apply_to_loaded_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"subscription_key": "sub"}"#).unwrap();
        let path = path.to_string_lossy().to_string();

        let matches = leaf_matches(&[
            "ercli",
            "--config",
            &path,
            "--token",
            "preset",
            "--tenant-flow",
            "login",
        ]);
        let configuration = load_configuration(&matches).unwrap();
        assert_eq!(configuration.token, "preset");
        assert!(configuration.force_tenant_flow);
    }
}
