//! CLI command definitions and argument parsing.
//!
//! Each command group lives in its own file and contributes a `Command` plus the function
//! that dispatches its subcommands to the actions.

use clap::{ArgMatches, Command};

pub mod apparatus;
pub mod auth;
pub mod config;
pub mod exposure;
pub mod incident;
pub mod params;
pub mod raw;
pub mod station;
pub mod user;

pub use params::*;

/// Builds the whole command line interface.
pub fn build_cli() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .propagate_version(true)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(params::config_parameter())
        .arg(params::token_parameter())
        .arg(params::limit_parameter())
        .arg(params::tenant_flow_parameter())
        .arg(params::format_parameter())
        .arg(params::format_pretty_parameter())
        .arg(params::format_with_headers_parameter())
        .arg(params::verbose_parameter())
        .subcommand(auth::login_command())
        .subcommand(raw::raw_command())
        .subcommand(apparatus::apparatus_command())
        .subcommand(exposure::exposure_command())
        .subcommand(incident::incident_command())
        .subcommand(incident::incident_exposure_command())
        .subcommand(exposure::exposure_location_command())
        .subcommand(exposure::exposure_fire_command())
        .subcommand(exposure::exposure_apparatus_command())
        .subcommand(exposure::exposure_narrative_command())
        .subcommand(exposure::exposure_member_command())
        .subcommand(exposure::exposure_user_role_command())
        .subcommand(station::station_command())
        .subcommand(user::user_command())
        .subcommand(user::user_contact_info_command())
        .subcommand(config::config_command())
}

pub fn create_cli_commands() -> ArgMatches {
    build_cli().get_matches()
}

/// Name of the subcommand that was given, for error messages.
pub fn subcommand_name(matches: &ArgMatches) -> String {
    matches
        .subcommand()
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_global_arguments_reach_subcommands() {
        let matches = build_cli()
            .try_get_matches_from(["ercli", "station", "list", "--limit", "5", "--pretty"])
            .unwrap();
        let (_, station) = matches.subcommand().unwrap();
        let (_, list) = station.subcommand().unwrap();
        assert_eq!(list.get_one::<u32>(PARAMETER_LIMIT), Some(&5));
        assert!(list.get_flag(PARAMETER_PRETTY));
    }

    #[test]
    fn test_limit_defaults_to_one_hundred() {
        let matches = build_cli()
            .try_get_matches_from(["ercli", "user", "list"])
            .unwrap();
        let (_, user) = matches.subcommand().unwrap();
        let (_, list) = user.subcommand().unwrap();
        assert_eq!(list.get_one::<u32>(PARAMETER_LIMIT), Some(&100));
        assert!(list.get_one::<String>(PARAMETER_FILTER).is_none());
    }
}
