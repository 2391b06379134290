//! Command actions: one function per subcommand.

pub mod apparatus;
pub mod auth;
pub mod config;
pub mod exposures;
pub mod incidents;
pub mod raw;
pub mod stations;
pub mod users;
pub mod utils;
