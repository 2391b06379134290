//! Shared command parameters for all CLI commands.
//!
//! Parameter names and the argument constructors used by more than one command group.

use crate::format::OutputFormat;
use clap::{Arg, ArgAction};
use std::path::PathBuf;

// Command groups
pub const COMMAND_LOGIN: &str = "login";
pub const COMMAND_RAW: &str = "raw";
pub const COMMAND_APPARATUS: &str = "apparatus";
pub const COMMAND_EXPOSURE: &str = "exposure";
pub const COMMAND_INCIDENT: &str = "incident";
pub const COMMAND_INCIDENT_EXPOSURE: &str = "incident-exposure";
pub const COMMAND_EXPOSURE_LOCATION: &str = "exposure-location";
pub const COMMAND_EXPOSURE_FIRE: &str = "exposure-fire";
pub const COMMAND_EXPOSURE_APPARATUS: &str = "exposure-apparatus";
pub const COMMAND_EXPOSURE_NARRATIVE: &str = "exposure-narrative";
pub const COMMAND_EXPOSURE_MEMBER: &str = "exposure-member";
pub const COMMAND_EXPOSURE_USER_ROLE: &str = "exposure-user-role";
pub const COMMAND_STATION: &str = "station";
pub const COMMAND_USER: &str = "user";
pub const COMMAND_USER_CONTACT_INFO: &str = "user-contact-info";
pub const COMMAND_CONFIG: &str = "config";

// CRUD operations
pub const COMMAND_CREATE: &str = "create";
pub const COMMAND_DELETE: &str = "delete";
pub const COMMAND_GET: &str = "get";
pub const COMMAND_LIST: &str = "list";
pub const COMMAND_PATCH: &str = "patch";
pub const COMMAND_PUT: &str = "put";
pub const COMMAND_ME: &str = "me";
pub const COMMAND_ID: &str = "id";

// Config commands
pub const COMMAND_PATH: &str = "path";
pub const COMMAND_SHOW: &str = "show";
pub const COMMAND_EXPORT: &str = "export";

// Global parameters
pub const PARAMETER_CONFIG: &str = "config";
pub const PARAMETER_TOKEN: &str = "token";
pub const PARAMETER_LIMIT: &str = "limit";
pub const PARAMETER_TENANT_FLOW: &str = "tenant-flow";
pub const PARAMETER_FORMAT: &str = "format";
pub const PARAMETER_PRETTY: &str = "pretty";
pub const PARAMETER_HEADERS: &str = "headers";
pub const PARAMETER_VERBOSE: &str = "verbose";

// Command parameters
pub const PARAMETER_FILTER: &str = "filter";
pub const PARAMETER_ID: &str = "id";
pub const PARAMETER_IDS: &str = "ids";
pub const PARAMETER_INCIDENT_ID: &str = "incident-id";
pub const PARAMETER_EXPOSURE_ID: &str = "exposure-id";
pub const PARAMETER_EXPOSURE_USER_ID: &str = "exposure-user-id";
pub const PARAMETER_USER_ID: &str = "user-id";
pub const PARAMETER_JSON: &str = "json";
pub const PARAMETER_DEEP: &str = "deep";
pub const PARAMETER_URL: &str = "url";
pub const PARAMETER_PARAMETER: &str = "parameter";
pub const PARAMETER_HEADER: &str = "header";
pub const PARAMETER_CONTENTS: &str = "contents";
pub const PARAMETER_OPERATION: &str = "operation";
pub const PARAMETER_PATH: &str = "path";
pub const PARAMETER_VALUE: &str = "value";
pub const PARAMETER_OUTPUT: &str = "output";

pub const DEFAULT_LIMIT: &str = "100";

pub fn config_parameter() -> Arg {
    Arg::new(PARAMETER_CONFIG)
        .long(PARAMETER_CONFIG)
        .num_args(1)
        .required(false)
        .env("ERCLI_CONFIG")
        .global(true)
        .help("Configuration file (JSON or YAML)")
        .value_parser(clap::value_parser!(PathBuf))
}

pub fn token_parameter() -> Arg {
    Arg::new(PARAMETER_TOKEN)
        .long(PARAMETER_TOKEN)
        .num_args(1)
        .required(false)
        .global(true)
        .help("Use this token instead of logging in")
}

pub fn limit_parameter() -> Arg {
    Arg::new(PARAMETER_LIMIT)
        .long(PARAMETER_LIMIT)
        .num_args(1)
        .required(false)
        .default_value(DEFAULT_LIMIT)
        .global(true)
        .help("Maximum number of records returned by list commands")
        .value_parser(clap::value_parser!(u32))
}

pub fn tenant_flow_parameter() -> Arg {
    Arg::new(PARAMETER_TENANT_FLOW)
        .long(PARAMETER_TENANT_FLOW)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Always use the 2020 tenant login flow")
}

/// Create the global format parameter.
pub fn format_parameter() -> Arg {
    Arg::new(PARAMETER_FORMAT)
        .short('f')
        .long(PARAMETER_FORMAT)
        .num_args(1)
        .required(false)
        .env("ERCLI_FORMAT")
        .default_value("json")
        .global(true)
        .help("Output data format")
        .value_parser(OutputFormat::names())
}

pub fn format_pretty_parameter() -> Arg {
    Arg::new(PARAMETER_PRETTY)
        .long(PARAMETER_PRETTY)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Format the output pretty")
}

pub fn format_with_headers_parameter() -> Arg {
    Arg::new(PARAMETER_HEADERS)
        .long(PARAMETER_HEADERS)
        .action(ArgAction::SetTrue)
        .env("ERCLI_HEADERS")
        .global(true)
        .help("Include a header row in CSV output")
}

pub fn verbose_parameter() -> Arg {
    Arg::new(PARAMETER_VERBOSE)
        .short('v')
        .long(PARAMETER_VERBOSE)
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Enable verbose output for debugging")
}

/// Optional positional filter of the list commands.
pub fn filter_parameter() -> Arg {
    Arg::new(PARAMETER_FILTER)
        .num_args(1)
        .required(false)
        .help("Filter expression, e.g. 'stationNumber eq 2'")
}

/// A required positional identifier.
pub fn id_parameter(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).num_args(1).required(true).help(help)
}

/// A required positional JSON document.
pub fn json_parameter(help: &'static str) -> Arg {
    Arg::new(PARAMETER_JSON).num_args(1).required(true).help(help)
}

pub fn output_file_parameter() -> Arg {
    Arg::new(PARAMETER_OUTPUT)
        .short('o')
        .long(PARAMETER_OUTPUT)
        .num_args(1)
        .required(true)
        .help("Output file path")
        .value_parser(clap::value_parser!(PathBuf))
}
