//! Authentication command definitions.

use crate::commands::params::COMMAND_LOGIN;
use clap::Command;

/// Create the login command.
pub fn login_command() -> Command {
    Command::new(COMMAND_LOGIN).about("Log in and print the access token").long_about(
        "Log in and print the access token.\n\n\
         A token given with --token or in the configuration is printed as is. Otherwise \
         the legacy or the 2020 tenant login flow runs, depending on the date and on \
         --tenant-flow.",
    )
}
