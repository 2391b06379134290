//! Raw request command definitions.

use crate::commands::params::{
    COMMAND_RAW, PARAMETER_CONTENTS, PARAMETER_HEADER, PARAMETER_PARAMETER, PARAMETER_URL,
};
use crate::error::CliError;
use clap::{Arg, ArgAction, ArgMatches, Command};
use reqwest::Method;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// HTTP methods available under `raw`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum RawMethod {
    Delete,
    Get,
    Patch,
    Post,
    Put,
}

impl RawMethod {
    pub fn method(&self) -> Method {
        match self {
            RawMethod::Delete => Method::DELETE,
            RawMethod::Get => Method::GET,
            RawMethod::Patch => Method::PATCH,
            RawMethod::Post => Method::POST,
            RawMethod::Put => Method::PUT,
        }
    }
}

fn raw_method_command(method: RawMethod) -> Command {
    let name: &'static str = method.into();
    Command::new(name)
        .about(format!("Send a {} request", method.method()))
        .arg(
            Arg::new(PARAMETER_URL)
                .num_args(1)
                .required(true)
                .help("Path relative to the API host, or an absolute URL"),
        )
        .arg(
            Arg::new(PARAMETER_PARAMETER)
                .long(PARAMETER_PARAMETER)
                .action(ArgAction::Append)
                .help("Query parameter as key=value (repeatable)"),
        )
        .arg(
            Arg::new(PARAMETER_HEADER)
                .long(PARAMETER_HEADER)
                .action(ArgAction::Append)
                .help("Request header as 'Name: value' (repeatable)"),
        )
        .arg(
            Arg::new(PARAMETER_CONTENTS)
                .long(PARAMETER_CONTENTS)
                .num_args(1)
                .help("Request body"),
        )
}

pub fn raw_command() -> Command {
    RawMethod::iter().fold(
        Command::new(COMMAND_RAW)
            .about("Send a request to any API endpoint and print the JSON response")
            .subcommand_required(true)
            .arg_required_else_help(true),
        |command, method| command.subcommand(raw_method_command(method)),
    )
}

pub async fn execute_raw_command(matches: &ArgMatches) -> Result<(), CliError> {
    match matches.subcommand() {
        Some((name, sub_matches)) => {
            let method = RawMethod::from_str(name)
                .map_err(|_| CliError::UnsupportedSubcommand(name.to_string()))?;
            crate::actions::raw::raw_request(method, sub_matches).await
        }
        None => Err(CliError::UnsupportedSubcommand(
            crate::commands::subcommand_name(matches),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_methods_parse() {
        assert_eq!(RawMethod::from_str("patch").unwrap(), RawMethod::Patch);
        assert_eq!(RawMethod::Delete.to_string(), "delete");
        assert_eq!(RawMethod::Put.method(), Method::PUT);
        assert!(RawMethod::from_str("head").is_err());
    }
}
