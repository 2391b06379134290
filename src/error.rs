use thiserror::Error;

use crate::{
    auth::AuthError, configuration::ConfigurationError, exit_codes::ErExitCode,
    format::FormattingError, http_utils::ApiError,
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    #[error("Invalid value for {name}: {message}")]
    InvalidArgument { name: String, message: String },
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    #[error("Formatting error: {0}")]
    FormattingError(#[from] FormattingError),
    #[error("Invalid JSON input: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Authentication failed: {0}")]
    AuthError(#[from] AuthError),
    #[error("{}", describe_api_error(.0))]
    ApiError(#[from] ApiError),
    #[error("{0} not found")]
    NotFound(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Not-found failures read as a sentence rather than the bare vendor type.
fn describe_api_error(error: &ApiError) -> String {
    match error {
        ApiError::Operation { operation, .. } if error.is_not_found() => {
            format!("could not {}: not found", operation)
        }
        _ => error.to_string(),
    }
}

impl CliError {
    pub fn exit_code(&self) -> ErExitCode {
        match self {
            CliError::UnsupportedSubcommand(_)
            | CliError::MissingRequiredArgument(_)
            | CliError::InvalidArgument { .. } => ErExitCode::UsageError,
            CliError::ConfigurationError(_) => ErExitCode::ConfigError,
            CliError::FormattingError(_) | CliError::JsonError(_) => ErExitCode::DataError,
            CliError::AuthError(AuthError::HttpError(_)) => ErExitCode::NetworkError,
            CliError::AuthError(_) => ErExitCode::AuthError,
            CliError::ApiError(e) => match e.root() {
                ApiError::NotFound => ErExitCode::NotFound,
                ApiError::HttpError(_) => ErExitCode::NetworkError,
                ApiError::JsonError(_) | ApiError::EncodeError(_) => ErExitCode::DataError,
                ApiError::InvalidUrl { .. } | ApiError::InvalidHeader { .. } => {
                    ErExitCode::UsageError
                }
                _ => ErExitCode::ApiError,
            },
            CliError::NotFound(_) => ErExitCode::NotFound,
            CliError::IoError(_) => ErExitCode::SoftwareError,
        }
    }
}
