//! Client library and command line tool for the Emergency Reporting fire/EMS API.
//!
//! # Modules
//!
//! - `auth`: token acquisition (legacy and 2020 tenant flows) and `login`
//! - `er_api`: the authenticated client and its resource operations
//! - `http_utils`: transport core and error normalization
//! - `model`: vendor wire types
//! - `logger`: request logging sink
//! - `configuration`: configuration file loading
//! - `format`: JSON and CSV output
//! - `commands`, `actions`, `context`: the command line front end

pub mod actions;
pub mod auth;
pub mod commands;
pub mod configuration;
pub mod context;
pub mod er_api;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod http_utils;
pub mod logger;
pub mod model;

pub use auth::{login, AuthError};
pub use configuration::Configuration;
pub use er_api::{ErApiClient, Options};
pub use http_utils::{ApiError, RequestSpec};
